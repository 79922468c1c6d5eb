use super::*;

#[test]
fn parses_a_simple_command() {
    let parsed = parse("help");
    assert_eq!(parsed.name, "help");
    assert!(parsed.args.is_empty());
    assert_eq!(parsed.raw, "help");
}

#[test]
fn parses_arguments_in_order() {
    let parsed = parse("fetch projects --featured");
    assert_eq!(parsed.name, "fetch");
    assert_eq!(parsed.args, vec!["projects", "--featured"]);
}

#[test]
fn blank_and_whitespace_inputs_parse_to_empty_name() {
    for input in ["", "   ", "\t \n"] {
        let parsed = parse(input);
        assert_eq!(parsed.name, "");
        assert!(parsed.args.is_empty());
    }
}

#[test]
fn collapses_whitespace_runs_between_tokens() {
    let parsed = parse("fetch   projects \t blog");
    assert_eq!(parsed.args, vec!["projects", "blog"]);
}

#[test]
fn name_is_case_folded_but_argument_case_is_preserved() {
    assert_eq!(parse("HELP").name, "help");
    assert_eq!(parse("fetch MyProj").args, vec!["MyProj"]);
}

#[test]
fn raw_is_the_escaped_trimmed_input() {
    assert_eq!(parse("  fetch projects  ").raw, "fetch projects");
}

#[test]
fn markup_characters_never_survive_escaping() {
    let parsed = parse("<script>alert(\"xss\") & 'quotes'</script>");
    for field in [&parsed.raw, &parsed.name]
        .into_iter()
        .chain(parsed.args.iter())
    {
        assert!(
            !field.contains(['<', '>', '"', '\'']),
            "unescaped markup in {:?}",
            field
        );
        // '&' only appears as the start of an entity we emitted.
        for (i, _) in field.match_indices('&') {
            let rest = &field[i..];
            assert!(
                rest.starts_with("&amp;")
                    || rest.starts_with("&lt;")
                    || rest.starts_with("&gt;")
                    || rest.starts_with("&quot;")
                    || rest.starts_with("&#039;"),
                "stray ampersand in {:?}",
                field
            );
        }
    }
    assert!(parsed.raw.contains("&lt;script&gt;"));
}

#[test]
fn escapes_each_argument_individually() {
    let parsed = parse("fetch <b>bold</b>");
    assert_eq!(parsed.args, vec!["&lt;b&gt;bold&lt;/b&gt;"]);
}

#[test]
fn total_over_control_characters_and_unicode() {
    let parsed = parse("héllo \u{1}wörld\u{7f}");
    assert_eq!(parsed.name, "héllo");
    assert_eq!(parsed.args.len(), 1);
}
