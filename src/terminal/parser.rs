use serde::Serialize;

/// A submitted line, tokenized and made markup-safe. `name` is lowercased;
/// argument case is preserved. Blank input parses to an empty name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParsedCommand {
    pub raw: String,
    pub name: String,
    pub args: Vec<String>,
}

/// Replaces `& < > " '` with their entity forms so submitted text can never
/// be interpreted as markup downstream. Input is raw keystrokes, parsed
/// exactly once, so double-escaping is not a concern.
pub fn escape_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

/// Total over all inputs, control characters and unicode included.
pub fn parse(input: &str) -> ParsedCommand {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ParsedCommand {
            raw: escape_markup(input),
            name: String::new(),
            args: Vec::new(),
        };
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let name = escape_markup(&parts[0].to_lowercase());
    let args = parts[1..].iter().map(|a| escape_markup(a)).collect();

    ParsedCommand {
        raw: escape_markup(trimmed),
        name,
        args,
    }
}

#[cfg(test)]
#[path = "../tests/terminal/parser_tests.rs"]
mod tests;
