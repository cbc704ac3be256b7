//! Shell word splitting for statement values
//!
//! Values are read the way the shell would read one word: quotes are removed,
//! backslash escapes are resolved, and `$( ... )` keeps its spaces. A quote
//! that never closes yields `None`, which leaves the line unclassified.

/// Read one shell word from the start of `input`.
///
/// Returns the unquoted word and the unread remainder (starting at the
/// whitespace that ended the word).
pub fn parse_shell_word(input: &str) -> Option<(String, &str)> {
    let mut out = String::new();
    let mut depth = 0usize;
    let mut chars = input.char_indices().peekable();

    while let Some(&(i, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() && depth == 0 => return Some((out, &input[i..])),
            '\'' => {
                chars.next();
                loop {
                    match chars.next() {
                        Some((_, '\'')) => break,
                        Some((_, ch)) => out.push(ch),
                        None => return None,
                    }
                }
            }
            '"' => {
                chars.next();
                loop {
                    match chars.next() {
                        Some((_, '"')) => break,
                        Some((_, '\\')) => match chars.next() {
                            Some((_, ch @ ('"' | '\\' | '$' | '`'))) => out.push(ch),
                            Some((_, ch)) => {
                                out.push('\\');
                                out.push(ch);
                            }
                            None => return None,
                        },
                        Some((_, ch)) => out.push(ch),
                        None => return None,
                    }
                }
            }
            '\\' => {
                chars.next();
                if let Some((_, ch)) = chars.next() {
                    out.push(ch);
                }
            }
            '(' => {
                chars.next();
                depth += 1;
                out.push(c);
            }
            ')' => {
                chars.next();
                depth = depth.saturating_sub(1);
                out.push(c);
            }
            _ => {
                chars.next();
                out.push(c);
            }
        }
    }

    if depth > 0 {
        return None;
    }
    Some((out, ""))
}

/// Read a statement value: one word, ignoring any trailing content.
///
/// An empty input is an empty value (`export FOO=`).
pub fn parse_value(input: &str) -> Option<String> {
    parse_shell_word(input.trim_start()).map(|(word, _)| word)
}

/// Split a remainder into unquoted words, stopping at a `#` comment or a
/// command separator.
pub fn split_words(input: &str) -> Option<Vec<String>> {
    let mut words = Vec::new();
    let mut rest = input.trim_start();
    while !rest.is_empty() {
        if rest.starts_with('#') || rest.starts_with(';') || rest.starts_with("&&") || rest.starts_with("||") {
            break;
        }
        let (word, next) = parse_shell_word(rest)?;
        words.push(word);
        rest = next.trim_start();
    }
    Some(words)
}
