use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::CrosstermBackend;

use crate::site::Route;
use crate::terminal::Mode;

use super::app::App;

pub(super) fn run_loop(
    terminal: &mut ratatui::Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.quit = true,
            KeyCode::Char('t') => app.toggle_overlay(),
            KeyCode::Char('u') if app.terminal_focused() => app.input.clear(),
            _ => {}
        }
        return;
    }

    if app.terminal_focused() {
        handle_terminal_key(app, key);
    } else {
        handle_page_key(app, key);
    }
}

fn handle_terminal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            // Blank submissions are dropped here; the core would ignore them
            // anyway, but skipping keeps the buffer-clear out of the way.
            if !app.input.buf.trim().is_empty() {
                app.submit_input();
            }
        }

        KeyCode::Up => {
            if let Some(prev) = app.term.recall_previous() {
                let line = prev.to_string();
                app.input.set(line);
            }
        }
        KeyCode::Down => {
            let was_browsing = app.term.history_cursor().is_some();
            match app.term.recall_next() {
                Some(next) => {
                    let line = next.to_string();
                    app.input.set(line);
                }
                // Stepped past the newest entry: back to fresh input.
                None if was_browsing => app.input.clear(),
                None => {}
            }
        }

        KeyCode::Esc => {
            if !app.input.buf.is_empty() {
                app.input.clear();
            } else if app.term.mode() == Mode::Overlay {
                app.toggle_overlay();
            }
        }

        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),

        KeyCode::Char(c) => app.input.insert_char(c),

        _ => {}
    }
}

fn handle_page_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('t') => app.toggle_overlay(),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let menu = Route::menu();
            let n = c.to_digit(10).unwrap_or(0) as usize;
            if (1..=menu.len()).contains(&n) {
                app.navigate(menu[n - 1]);
            }
        }
        _ => {}
    }
}
