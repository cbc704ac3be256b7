//! String utility functions

/// Split a string into lines, preserving trailing empty lines (unlike `.lines()`).
///
/// - `"a\nb"` → `["a", "b"]`
/// - `"a\n"` → `["a"]` (single trailing newline is treated as line terminator)
/// - `"a\n\n"` → `["a", ""]` (preserves trailing empty line)
///
/// A trailing `\r` is left in place so splices can write lines back untouched.
///
/// # Examples
///
/// ```
/// use rcsect::utils::strings::split_lines_preserve_trailing;
///
/// assert_eq!(split_lines_preserve_trailing("a\nb"), vec!["a", "b"]);
/// assert_eq!(split_lines_preserve_trailing("a\n"), vec!["a"]);
/// assert_eq!(split_lines_preserve_trailing("a\n\n"), vec!["a", ""]);
/// assert_eq!(split_lines_preserve_trailing(""), Vec::<&str>::new());
/// ```
pub fn split_lines_preserve_trailing(s: &str) -> Vec<&str> {
    if s.is_empty() {
        return Vec::new();
    }

    let mut result: Vec<&str> = s.split('\n').collect();

    // The empty string after the final '\n' is the terminator, not a line
    if s.ends_with('\n') && result.last() == Some(&"") {
        result.pop();
    }

    result
}

/// Remove one layer of matching single or double quotes.
///
/// ```
/// use rcsect::utils::strings::strip_quotes;
///
/// assert_eq!(strip_quotes("'ls -la'"), "ls -la");
/// assert_eq!(strip_quotes("\"nvim\""), "nvim");
/// assert_eq!(strip_quotes("plain"), "plain");
/// assert_eq!(strip_quotes("'half"), "'half");
/// ```
pub fn strip_quotes(s: &str) -> &str {
    for quote in ['\'', '"'] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Escape text for use inside a single-quoted shell word.
///
/// Single quotes cannot be escaped inside single quotes, so each one closes
/// the quote, emits an escaped quote and reopens: `'` → `'\''`.
pub fn escape_single_quoted(s: &str) -> String {
    s.replace('\'', r"'\''")
}

/// Escape text for use inside a double-quoted shell word.
///
/// Backslashes and double quotes are escaped; `$` and backticks are left
/// alone so variable references keep expanding.
pub fn escape_double_quoted(s: &str) -> String {
    s.replace('\\', r"\\").replace('"', "\\\"")
}

/// Line terminator a document uses, judged by its first line
///
/// ```
/// use rcsect::utils::strings::line_ending;
///
/// assert_eq!(line_ending("a\r\nb\r\n"), "\r\n");
/// assert_eq!(line_ending("a\nb\r\n"), "\n");
/// assert_eq!(line_ending(""), "\n");
/// ```
pub fn line_ending(s: &str) -> &'static str {
    match s.find('\n') {
        Some(i) if s[..i].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

/// True when the line is empty or only whitespace
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
