use super::*;
use crate::content::SiteContent;
use crate::terminal::CommandResult;

fn terminal() -> Terminal {
    Terminal::new(SiteContent::embedded(), "/")
}

#[test]
fn fetch_projects_navigates_once_and_appends_echo_plus_result() {
    let mut term = terminal();
    let navigate = term.submit("fetch projects");
    assert_eq!(navigate.as_deref(), Some("/projects"));
    assert_eq!(term.output().len(), 2);
    assert_eq!(term.output()[0].kind, LineKind::Input);
    assert_eq!(term.output()[0].text, "$ fetch projects");
    assert!(term.output()[1].text.contains("200 OK"));
}

#[test]
fn blank_submissions_change_nothing() {
    let mut term = terminal();
    for input in ["", "   ", "\t"] {
        assert_eq!(term.submit(input), None);
    }
    assert!(term.output().is_empty());
    assert!(term.input_history().is_empty());
}

#[test]
fn unknown_command_echoes_then_reports_not_found() {
    let mut term = terminal();
    let navigate = term.submit("foobar");
    assert_eq!(navigate, None);
    assert_eq!(term.output().len(), 2);
    assert_eq!(term.output()[0].text, "$ foobar");
    assert_eq!(term.output()[1].kind, LineKind::Error);
    assert_eq!(term.output()[1].text, "command not found: foobar");
}

#[test]
fn clear_is_a_hard_reset_of_output_only() {
    let mut term = terminal();
    term.submit("help");
    term.submit("whoami");
    assert!(!term.output().is_empty());

    let navigate = term.submit("clear");
    assert_eq!(navigate, None);
    // No echo line survives a clear.
    assert!(term.output().is_empty());
    // Input history is untouched.
    assert_eq!(term.input_history(), ["help", "whoami", "clear"]);
}

#[test]
fn command_names_are_case_folded_on_submission() {
    let mut term = terminal();
    term.submit("HELP");
    assert_eq!(term.output()[0].text, "$ HELP");
    assert!(term.output().len() > 2);
}

#[test]
fn echo_is_markup_escaped() {
    let mut term = terminal();
    term.submit("<script>alert(1)</script>");
    assert_eq!(term.output()[0].text, "$ &lt;script&gt;alert(1)&lt;/script&gt;");
    assert!(!term.output()[0].text.contains('<'));
    // The not-found line names the escaped command.
    assert!(term.output()[1].text.starts_with("command not found: &lt;script&gt;"));
}

#[test]
fn recall_follows_arrow_key_semantics() {
    let mut term = terminal();
    term.submit("a");
    term.submit("b");

    assert_eq!(term.recall_previous(), Some("b"));
    assert_eq!(term.recall_previous(), Some("a"));
    assert_eq!(term.recall_next(), Some("b"));
    assert_eq!(term.recall_next(), None);
    assert_eq!(term.history_cursor(), None);
}

#[test]
fn submissions_while_browsing_history_reset_the_cursor() {
    let mut term = terminal();
    term.submit("help");
    term.recall_previous();
    assert_eq!(term.history_cursor(), Some(0));
    term.submit("pwd");
    assert_eq!(term.history_cursor(), None);
}

#[test]
fn custom_commands_can_be_registered() {
    let mut term = terminal();
    term.register("ping", |_content, _args| {
        CommandResult::lines(vec![OutputLine::output("pong")])
    });
    term.submit("ping");
    assert_eq!(term.output()[1].text, "pong");
}

#[test]
fn handler_output_always_follows_the_echo_line() {
    let mut term = terminal();
    term.submit("curl");
    assert_eq!(term.output()[0].kind, LineKind::Input);
    assert!(term.output().len() > 1);
    assert!(term.output()[1..].iter().all(|l| l.kind != LineKind::Input));
}
