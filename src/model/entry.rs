//! Statement kinds, classified statements and entries to be written

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Statement kind enumeration
///
/// One kind per shell-configuration construct the registry recognises.
/// Declaration order is the display order used by listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatementKind {
    Alias,
    Export,
    Eval,
    Setopt,
    Plugins,
    Function,
    Source,
    Autoload,
    Fpath,
    Path,
    Theme,
    CompletionInit,
    HistoryOption,
    Keybinding,
}

impl StatementKind {
    /// Every kind, in display order
    pub const ALL: [StatementKind; 14] = [
        StatementKind::Alias,
        StatementKind::Export,
        StatementKind::Eval,
        StatementKind::Setopt,
        StatementKind::Plugins,
        StatementKind::Function,
        StatementKind::Source,
        StatementKind::Autoload,
        StatementKind::Fpath,
        StatementKind::Path,
        StatementKind::Theme,
        StatementKind::CompletionInit,
        StatementKind::HistoryOption,
        StatementKind::Keybinding,
    ];
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StatementKind::Alias => "alias",
            StatementKind::Export => "export",
            StatementKind::Eval => "eval",
            StatementKind::Setopt => "setopt",
            StatementKind::Plugins => "plugins",
            StatementKind::Function => "function",
            StatementKind::Source => "source",
            StatementKind::Autoload => "autoload",
            StatementKind::Fpath => "fpath",
            StatementKind::Path => "path",
            StatementKind::Theme => "theme",
            StatementKind::CompletionInit => "completion",
            StatementKind::HistoryOption => "history",
            StatementKind::Keybinding => "keybinding",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for StatementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alias" => Ok(StatementKind::Alias),
            "export" | "env" => Ok(StatementKind::Export),
            "eval" => Ok(StatementKind::Eval),
            "setopt" => Ok(StatementKind::Setopt),
            "plugins" | "plugin" => Ok(StatementKind::Plugins),
            "function" | "func" => Ok(StatementKind::Function),
            "source" => Ok(StatementKind::Source),
            "autoload" => Ok(StatementKind::Autoload),
            "fpath" => Ok(StatementKind::Fpath),
            "path" => Ok(StatementKind::Path),
            "theme" => Ok(StatementKind::Theme),
            "completion" | "compinit" => Ok(StatementKind::CompletionInit),
            "history" => Ok(StatementKind::HistoryOption),
            "keybinding" | "bindkey" => Ok(StatementKind::Keybinding),
            _ => Err(format!("Unknown statement kind: {}", s)),
        }
    }
}

/// A single classified line
///
/// - `name`: the identifier the statement defines or refers to
///   (alias name, variable name, plugin list, function name, ...)
/// - `value`: the payload with surrounding quotes removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub kind: StatementKind,
    pub name: String,
    pub value: String,
}

impl Statement {
    pub fn new(kind: StatementKind, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Per-kind statement counts for a block of text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryCounts {
    counts: BTreeMap<StatementKind, usize>,
}

impl EntryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, kind: StatementKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    /// Count for one kind, zero when never seen
    pub fn get(&self, kind: StatementKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Non-zero counts in display order
    pub fn iter(&self) -> impl Iterator<Item = (StatementKind, usize)> + '_ {
        self.counts
            .iter()
            .filter(|(_, n)| **n > 0)
            .map(|(k, n)| (*k, *n))
    }
}

/// An entry to be merged into a document by the section writer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewEntry {
    Alias { name: String, command: String },
    Export { name: String, value: String },
}

impl NewEntry {
    pub fn alias(name: impl Into<String>, command: impl Into<String>) -> Self {
        NewEntry::Alias {
            name: name.into(),
            command: command.into(),
        }
    }

    pub fn export(name: impl Into<String>, value: impl Into<String>) -> Self {
        NewEntry::Export {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            NewEntry::Alias { name, .. } | NewEntry::Export { name, .. } => name,
        }
    }

    pub fn kind(&self) -> StatementKind {
        match self {
            NewEntry::Alias { .. } => StatementKind::Alias,
            NewEntry::Export { .. } => StatementKind::Export,
        }
    }

    /// Parse a `NAME=VALUE` definition as given on the command line.
    ///
    /// One layer of matching surrounding quotes is removed from the value.
    pub fn parse_definition(kind: StatementKind, definition: &str) -> Result<Self, String> {
        let (name, value) = definition
            .split_once('=')
            .ok_or_else(|| format!("Invalid {} format. Use: NAME=VALUE", kind))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("Invalid {} format: empty name", kind));
        }
        let value = crate::utils::strings::strip_quotes(value.trim());
        match kind {
            StatementKind::Alias => Ok(NewEntry::alias(name, value)),
            StatementKind::Export => Ok(NewEntry::export(name, value)),
            other => Err(format!("Cannot add entries of kind {}", other)),
        }
    }
}
