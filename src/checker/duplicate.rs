//! Duplicate definition checker

use super::{CheckIssue, CheckResult, Checker};
use crate::model::StatementKind;
use crate::parser::PatternRegistry;
use std::collections::BTreeMap;

/// Reports aliases and exports defined more than once
pub struct DuplicateChecker {
    registry: PatternRegistry,
}

impl DuplicateChecker {
    pub fn new(registry: PatternRegistry) -> Self {
        Self { registry }
    }
}

impl Checker for DuplicateChecker {
    fn check(&self, content: &str) -> CheckResult {
        let mut result = CheckResult::new();

        let mut seen: BTreeMap<(StatementKind, String), Vec<usize>> = BTreeMap::new();
        for (line, statement) in self.registry.scan(content) {
            if matches!(statement.kind, StatementKind::Alias | StatementKind::Export) {
                seen.entry((statement.kind, statement.name))
                    .or_default()
                    .push(line);
            }
        }

        for ((kind, name), lines) in seen {
            if lines.len() > 1 {
                let listed: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
                result.add_issue(
                    CheckIssue::warning(format!(
                        "Duplicate {} '{}' defined on lines: {}",
                        kind,
                        name,
                        listed.join(", ")
                    ))
                    .with_line(lines[0])
                    .with_entry(name),
                );
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(content: &str) -> CheckResult {
        DuplicateChecker::new(PatternRegistry::default()).check(content)
    }

    #[test]
    fn test_no_duplicates() {
        assert!(check("alias ll='ls -la'\nalias gs='git status'\n").is_ok());
    }

    #[test]
    fn test_duplicate_alias() {
        let result = check("alias ll='ls -la'\n\n\n\nalias ll='ls -l'\n");
        assert_eq!(result.issues.len(), 1);
        assert!(result.issues[0].message.contains("lines: 1, 5"));
        assert_eq!(result.issues[0].entry_name.as_deref(), Some("ll"));
    }

    #[test]
    fn test_same_name_different_kind() {
        assert!(check("alias EDITOR='vim'\nexport EDITOR=vim\n").is_ok());
    }
}
