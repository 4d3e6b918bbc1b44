//! String literal builders for the target languages.
//!
//! Short values (URLs, header names and values) use ordinary quoted
//! literals. Bodies use each language's raw or multi-line form when the text
//! allows it, so the JSON appears verbatim in the snippet.

/// Single-quoted POSIX shell word.
pub(crate) fn shell_single(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Single-quoted PHP string.
pub(crate) fn php_single(s: &str) -> String {
    format!("'{}'", s.replace('\\', r"\\").replace('\'', r"\'"))
}

/// Double-quoted C-family string (Python, JavaScript, Go, Rust, Java).
pub(crate) fn double_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str(r"\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            '\t' => out.push_str(r"\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Double-quoted Ruby string; also escapes `#{`, `#@` and `#$` interpolation.
pub(crate) fn ruby_double(s: &str) -> String {
    let quoted = double_quoted(s);
    let mut out = String::with_capacity(quoted.len());
    let mut chars = quoted.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '#' && matches!(chars.peek(), Some('{' | '@' | '$')) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Python body: triple-quoted when safe, double-quoted otherwise.
pub(crate) fn python_body(s: &str) -> String {
    if s.contains("'''") || s.contains('\\') || s.contains('\r') || s.ends_with('\'') {
        double_quoted(s)
    } else {
        format!("'''{s}'''")
    }
}

/// JavaScript template literal.
pub(crate) fn js_template(s: &str) -> String {
    let escaped = s
        .replace('\\', r"\\")
        .replace('`', r"\`")
        .replace("${", r"\${");
    format!("`{escaped}`")
}

/// Go raw string when the text has no backtick, interpreted string otherwise.
pub(crate) fn go_raw(s: &str) -> String {
    if s.contains('`') || s.contains('\r') {
        double_quoted(s)
    } else {
        format!("`{s}`")
    }
}

/// Rust raw string with as many `#` as needed.
pub(crate) fn rust_raw(s: &str) -> String {
    let mut longest = 0;
    let mut run: Option<usize> = None;
    for c in s.chars() {
        run = match (c, run) {
            ('"', _) => Some(0),
            ('#', Some(n)) => Some(n + 1),
            _ => None,
        };
        if let Some(n) = run {
            longest = longest.max(n);
        }
    }
    let hashes = "#".repeat(longest + 1);
    format!("r{hashes}\"{s}\"{hashes}")
}

/// Lines of a Java text block holding `s`, indented by `indent`.
///
/// The caller writes the opening delimiter. Every line of `s` gets the same
/// indent as the closing delimiter, which sits on its own line, so the
/// body's own leading whitespace survives. The last content line ends in a
/// `\` continuation so no newline is added to the value.
pub(crate) fn java_text_block(s: &str, indent: &str) -> Vec<String> {
    let mut lines: Vec<String> = s
        .split('\n')
        .map(|line| format!("{indent}{}", java_text_line(line)))
        .collect();
    if let Some(last) = lines.last_mut() {
        last.push('\\');
    }
    lines.push(format!("{indent}\"\"\""));
    lines
}

/// One escaped text block line. Every third quote of a run is escaped so no
/// run can close the block, and trailing whitespace is kept with an escape.
fn java_text_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut quotes = 0;
    for c in line.chars() {
        quotes = if c == '"' { quotes + 1 } else { 0 };
        match c {
            '\\' => out.push_str(r"\\"),
            '"' if quotes % 3 == 0 => out.push_str("\\\""),
            '\r' => out.push_str(r"\r"),
            _ => out.push(c),
        }
    }
    match out.pop() {
        Some(' ') => out.push_str(r"\s"),
        Some('\t') => out.push_str(r"\t"),
        Some(c) => out.push(c),
        None => {}
    }
    out
}

/// Heredoc delimiter that does not occur at the start of any body line.
pub(crate) fn heredoc_delimiter(s: &str) -> String {
    const CANDIDATES: &[&str] = &["JSON", "BODY", "PAYLOAD"];
    let clashes = |delim: &str| s.lines().any(|l| l.trim_start().starts_with(delim));

    if let Some(found) = CANDIDATES.iter().find(|d| !clashes(**d)) {
        return (*found).to_string();
    }
    let mut n = 1;
    loop {
        let delim = format!("EOF_{n}");
        if !clashes(delim.as_str()) {
            return delim;
        }
        n += 1;
    }
}
