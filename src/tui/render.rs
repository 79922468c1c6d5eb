use std::sync::OnceLock;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use time::OffsetDateTime;
use time::format_description::FormatItem;

use crate::site::Route;
use crate::terminal::registry::command_defs;
use crate::terminal::{LineKind, Mode, OutputLine};

use super::app::App;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);

    match app.term.mode() {
        Mode::Hero => draw_home(frame, app, chunks[1]),
        Mode::Collapsed => draw_page(frame, app, chunks[1]),
        Mode::Overlay => {
            draw_page(frame, app, chunks[1]);
            draw_overlay(frame, app, chunks[1]);
        }
    }

    draw_footer(frame, app, chunks[2]);
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let spans = vec![
        Span::styled(
            format!(" {} ", app.site.content.identity.host),
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(app.site.path().to_string(), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", mode_label(app.term.mode())),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  "),
        Span::styled(clock(), Style::default().fg(Color::Gray)),
    ];
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Hero => "hero",
        Mode::Collapsed => "collapsed",
        Mode::Overlay => "overlay",
    }
}

fn clock_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse("[hour padding:zero]:[minute padding:zero]:[second padding:zero]Z")
            .expect("valid time format")
    })
}

fn clock() -> String {
    OffsetDateTime::now_utc()
        .format(clock_format())
        .unwrap_or_else(|_| "--:--:--Z".to_string())
}

fn draw_home(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let identity = &app.site.content.identity;
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            identity.tagline.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Full-stack development with modern tools. From concept to deployment.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    for (i, route) in Route::menu().iter().enumerate().skip(1) {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", i + 1), Style::default().fg(Color::Yellow)),
            Span::raw(route.title()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), cols[0]);

    draw_terminal(frame, app, cols[1]);
}

fn draw_page(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let lines = page_lines(app);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn page_lines(app: &App) -> Vec<Line<'static>> {
    let content = &app.site.content;
    let title = |t: &str| {
        Line::from(Span::styled(
            t.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let muted = |t: String| Line::from(Span::styled(t, Style::default().fg(Color::Gray)));

    let mut lines = vec![Line::from("")];
    match app.site.route() {
        Route::Home => {}
        Route::Projects => {
            lines.push(title("Projects"));
            lines.push(Line::from(""));
            for p in &content.projects {
                lines.push(Line::from(vec![
                    Span::styled(p.title.clone(), Style::default().fg(Color::Cyan)),
                    Span::styled(format!("  /{}", p.slug), Style::default().fg(Color::Yellow)),
                ]));
                lines.push(muted(format!("  {}", p.summary)));
                lines.push(Line::from(""));
            }
        }
        Route::Posts => {
            lines.push(title("Posts"));
            lines.push(Line::from(""));
            for p in &content.posts {
                lines.push(Line::from(vec![
                    Span::styled(p.published.clone(), Style::default().fg(Color::Gray)),
                    Span::raw("  "),
                    Span::styled(p.title.clone(), Style::default().fg(Color::Cyan)),
                ]));
            }
        }
        Route::About => {
            lines.push(title("About"));
            lines.push(Line::from(""));
            for bio in &content.identity.bio {
                lines.push(muted(bio.clone()));
            }
            lines.push(Line::from(""));
            lines.push(title("Stack"));
            lines.push(muted(content.stack.join(" · ")));
        }
        Route::Contact => {
            lines.push(title("Get in Touch"));
            lines.push(Line::from(""));
            for ch in &content.contact {
                lines.push(Line::from(vec![
                    Span::styled(format!("{}:  ", ch.label), Style::default().fg(Color::Gray)),
                    Span::styled(ch.value.clone(), Style::default().fg(Color::Yellow)),
                ]));
            }
        }
        Route::Status => {
            lines.push(title("Status"));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "All systems operational.",
                Style::default().fg(Color::Green),
            )));
            lines.push(muted(format!("server time: {}", now_ts())));
            lines.push(muted(format!(
                "registered commands: {}",
                command_defs().len()
            )));
            lines.push(muted(format!(
                "navigations this session: {}",
                app.site.visits().len()
            )));
        }
        Route::NotFound => {
            lines.push(title("404"));
            lines.push(Line::from(""));
            lines.push(muted("This page could not be fetched.".to_string()));
        }
    }
    lines
}

fn now_ts() -> String {
    OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}

fn draw_overlay(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let popup = centered_rect(area, 70, 70);
    frame.render_widget(Clear, popup);
    draw_terminal(frame, app, popup);
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

fn draw_terminal(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let identity = &app.site.content.identity;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" visitor@{} ", identity.host),
            Style::default().fg(Color::Gray),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    // Tail-window the output so the newest lines stay visible.
    let visible = rows[0].height as usize;
    let output = app.term.output();
    let start = output.len().saturating_sub(visible);
    let lines: Vec<Line> = output[start..].iter().map(render_line).collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), rows[0]);

    let input_line = if app.input.buf.is_empty() {
        Line::from(vec![
            Span::styled("$ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                "type 'help' for commands...",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("$ ", Style::default().fg(Color::Yellow)),
            Span::styled(app.input.buf.clone(), Style::default().fg(Color::White)),
            Span::styled("▌", Style::default().fg(Color::Yellow)),
        ])
    };
    frame.render_widget(Paragraph::new(input_line), rows[1]);
}

fn render_line(line: &OutputLine) -> Line<'static> {
    if !line.segments.is_empty() {
        return Line::from(
            line.segments
                .iter()
                .map(|s| Span::styled(s.text.clone(), kind_style(s.kind)))
                .collect::<Vec<_>>(),
        );
    }
    if line.text.is_empty() {
        // Keep blank lines at full height.
        return Line::from(Span::raw(" "));
    }
    Line::from(Span::styled(line.text.clone(), kind_style(line.kind)))
}

fn kind_style(kind: LineKind) -> Style {
    let color = match kind {
        LineKind::Input => Color::White,
        LineKind::Output => Color::Gray,
        LineKind::Error => Color::Red,
        LineKind::Info => Color::Yellow,
        LineKind::Success => Color::Green,
        LineKind::Accent => Color::Cyan,
    };
    Style::default().fg(color)
}

fn draw_footer(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let hint = if app.terminal_focused() {
        "enter run · up/down history · esc clear/close · ctrl+t overlay · ctrl+c quit"
    } else {
        ">_ press t to open the terminal · 1-6 pages · q quit"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}
