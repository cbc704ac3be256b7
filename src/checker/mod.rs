//! Advisory validation of shell configuration text
//!
//! Checks never fail and never block edits; they only report issues.

mod duplicate;
mod syntax;

pub use duplicate::DuplicateChecker;
pub use syntax::SyntaxChecker;

use crate::parser::PatternRegistry;

/// Check result
#[derive(Debug)]
pub struct CheckResult {
    pub issues: Vec<CheckIssue>,
}

impl CheckResult {
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn add_issue(&mut self, issue: CheckIssue) {
        self.issues.push(issue);
    }

    /// Every issue is an advisory warning
    pub fn has_warnings(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

impl Default for CheckResult {
    fn default() -> Self {
        Self::new()
    }
}

/// A single check issue
#[derive(Debug)]
pub struct CheckIssue {
    pub message: String,
    pub line_number: Option<usize>,
    pub entry_name: Option<String>,
}

impl CheckIssue {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line_number: None,
            entry_name: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line_number = Some(line);
        self
    }

    pub fn with_entry(mut self, name: impl Into<String>) -> Self {
        self.entry_name = Some(name.into());
        self
    }
}

/// Trait for checkers
pub trait Checker {
    fn check(&self, content: &str) -> CheckResult;
}

/// Run all checks on a document
pub fn check_all(content: &str, registry: &PatternRegistry) -> CheckResult {
    let mut result = CheckResult::new();

    let duplicates = DuplicateChecker::new(*registry);
    let checkers: [&dyn Checker; 2] = [&SyntaxChecker, &duplicates];
    for checker in checkers {
        result.issues.extend(checker.check(content).issues);
    }

    result.issues.sort_by_key(|i| i.line_number);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_document() {
        let result = check_all(
            "alias ll='ls -la'\nexport EDITOR=nvim\n",
            &PatternRegistry::default(),
        );
        assert!(result.is_ok());
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_combined_issues_are_warnings() {
        let text = "alias g='git'\nalias g='git status'\necho \"unterminated\n";
        let result = check_all(text, &PatternRegistry::default());
        assert_eq!(result.issues.len(), 2);
        assert!(result.has_warnings());
        assert_eq!(result.issues[0].line_number, Some(1));
        assert_eq!(result.issues[1].line_number, Some(3));
    }
}
