//! Structural checks: quotes and brackets
//!
//! Quotes are checked per line, since the engine models statements as single
//! lines. Brackets are checked across the document so multi-line function
//! bodies and arrays balance. Comments and quoted text are ignored.

use super::{CheckIssue, CheckResult, Checker};
use crate::utils::strings::split_lines_preserve_trailing;

/// Reports unbalanced quotes, parentheses, brackets and braces
pub struct SyntaxChecker;

impl Checker for SyntaxChecker {
    fn check(&self, content: &str) -> CheckResult {
        let mut result = CheckResult::new();
        // (bracket, line it was opened on)
        let mut open: Vec<(char, usize)> = Vec::new();

        for (i, line) in split_lines_preserve_trailing(content).into_iter().enumerate() {
            let line_number = i + 1;
            if line.trim_start().starts_with('#') {
                continue;
            }

            let mut quote: Option<char> = None;
            let mut prev = ' ';
            let mut chars = line.chars();
            while let Some(c) = chars.next() {
                match (quote, c) {
                    (Some('\''), '\'') => quote = None,
                    (Some('\''), _) => {}
                    (Some('"'), '\\') | (None, '\\') => {
                        chars.next();
                    }
                    (Some('"'), '"') => quote = None,
                    (Some(_), _) => {}
                    (None, '\'' | '"') => quote = Some(c),
                    (None, '#') if prev.is_whitespace() => break,
                    (None, '(' | '[' | '{') => open.push((c, line_number)),
                    (None, ')' | ']' | '}') => match open.last() {
                        Some(&(opener, _)) if opener == matching(c) => {
                            open.pop();
                        }
                        Some(&(opener, opened_on)) => {
                            result.add_issue(
                                CheckIssue::warning(format!(
                                    "'{}' closes '{}' opened on line {}",
                                    c, opener, opened_on
                                ))
                                .with_line(line_number),
                            );
                            open.pop();
                        }
                        // Bare `)` is how `case` patterns end
                        None if c == ')' => {}
                        None => result.add_issue(
                            CheckIssue::warning(format!("Unmatched '{}'", c)).with_line(line_number),
                        ),
                    },
                    (None, _) => {}
                }
                prev = c;
            }

            if let Some(q) = quote {
                let kind = if q == '\'' { "single" } else { "double" };
                result.add_issue(
                    CheckIssue::warning(format!("Unbalanced {} quote", kind)).with_line(line_number),
                );
            }
        }

        for (opener, line_number) in open {
            result.add_issue(
                CheckIssue::warning(format!("Unclosed '{}'", opener)).with_line(line_number),
            );
        }

        result
    }
}

fn matching(close: char) -> char {
    match close {
        ')' => '(',
        ']' => '[',
        _ => '{',
    }
}
