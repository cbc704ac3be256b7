//! Entry pattern registry
//!
//! Classifies single lines into at most one [`StatementKind`] and extracts
//! the statement's name and value. Counting and extraction both go through
//! [`PatternRegistry::classify`], so `count_entries(text).get(k)` always
//! equals `extract(text, k).len()`.

use crate::model::{EntryCounts, ParserConfig, Statement, StatementKind};
use crate::utils::strings::split_lines_preserve_trailing;

use super::patterns::*;
use super::words::{parse_shell_word, parse_value, split_words};

type Classifier = fn(&str) -> Option<Statement>;

/// Classifiers in precedence order: the first one that accepts a line wins.
const CLASSIFIERS: [Classifier; 14] = [
    classify_history_option,
    classify_completion_init,
    classify_alias,
    classify_export,
    classify_eval,
    classify_setopt,
    classify_plugins,
    classify_theme,
    classify_fpath,
    classify_path,
    classify_autoload,
    classify_source,
    classify_keybinding,
    classify_function,
];

/// Line classifier with a safety limit on line length
#[derive(Debug, Clone, Copy)]
pub struct PatternRegistry {
    max_line_length: usize,
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::from_config(&ParserConfig::default())
    }
}

impl PatternRegistry {
    pub fn new(max_line_length: usize) -> Self {
        Self { max_line_length }
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new(config.max_line_length)
    }

    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// True when a line is short enough to be examined at all
    pub fn is_safe_line(&self, line: &str) -> bool {
        line.len() <= self.max_line_length || line.chars().count() <= self.max_line_length
    }

    /// Classify one line. Comments, blanks, overlong and unrecognised lines
    /// yield `None`.
    pub fn classify(&self, line: &str) -> Option<Statement> {
        if !self.is_safe_line(line) {
            return None;
        }
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        CLASSIFIERS.iter().find_map(|classify| classify(line))
    }

    /// Every classified line with its 1-indexed line number
    pub fn scan(&self, text: &str) -> Vec<(usize, Statement)> {
        split_lines_preserve_trailing(text)
            .into_iter()
            .enumerate()
            .filter_map(|(i, line)| self.classify(line).map(|s| (i + 1, s)))
            .collect()
    }

    /// Statements of one kind, in document order
    pub fn extract(&self, text: &str, kind: StatementKind) -> Vec<Statement> {
        self.scan(text)
            .into_iter()
            .map(|(_, s)| s)
            .filter(|s| s.kind == kind)
            .collect()
    }

    /// Number of statements of each kind
    pub fn count_entries(&self, text: &str) -> EntryCounts {
        let mut counts = EntryCounts::new();
        for line in split_lines_preserve_trailing(text) {
            if let Some(statement) = self.classify(line) {
                counts.increment(statement.kind);
            }
        }
        counts
    }

    /// `(name, command)` for every alias
    pub fn aliases(&self, text: &str) -> Vec<(String, String)> {
        self.extract(text, StatementKind::Alias)
            .into_iter()
            .map(|s| (s.name, s.value))
            .collect()
    }

    /// `(name, value)` for every export
    pub fn exports(&self, text: &str) -> Vec<(String, String)> {
        self.extract(text, StatementKind::Export)
            .into_iter()
            .map(|s| (s.name, s.value))
            .collect()
    }
}

fn classify_history_option(line: &str) -> Option<Statement> {
    if let Some(caps) = HISTORY_OPTION_RE.captures(line) {
        return Some(Statement::new(
            StatementKind::HistoryOption,
            &caps[1],
            caps[2].trim(),
        ));
    }
    let caps = HISTORY_VAR_RE.captures(line)?;
    let value = parse_value(&caps[2])?;
    Some(Statement::new(StatementKind::HistoryOption, &caps[1], value))
}

fn classify_completion_init(line: &str) -> Option<Statement> {
    let caps = COMPLETION_INIT_RE.captures(line)?;
    Some(Statement::new(
        StatementKind::CompletionInit,
        &caps[1],
        line.trim(),
    ))
}

fn classify_alias(line: &str) -> Option<Statement> {
    let caps = ALIAS_RE.captures(line)?;
    let value = parse_value(&caps[2])?;
    Some(Statement::new(StatementKind::Alias, &caps[1], value))
}

fn classify_export(line: &str) -> Option<Statement> {
    let caps = EXPORT_RE.captures(line)?;
    let value = parse_value(&caps[2])?;
    Some(Statement::new(StatementKind::Export, &caps[1], value))
}

fn classify_eval(line: &str) -> Option<Statement> {
    let caps = EVAL_RE.captures(line)?;
    let expr = parse_value(&caps[1])?;
    // Name the tool being initialised: `$(starship init zsh)` → `starship`
    let inner = expr
        .trim_start_matches("$(")
        .trim_start_matches('`')
        .trim_start();
    let name = inner
        .split(|c: char| c.is_whitespace() || c == ')' || c == '`')
        .next()
        .unwrap_or_default();
    let name = if name.is_empty() { "eval" } else { name };
    Some(Statement::new(StatementKind::Eval, name, expr.clone()))
}

fn classify_setopt(line: &str) -> Option<Statement> {
    let caps = SETOPT_RE.captures(line)?;
    let value = format!("{}{}", &caps[1], &caps[2]);
    Some(Statement::new(
        StatementKind::Setopt,
        &caps[1],
        value.trim(),
    ))
}

fn classify_plugins(line: &str) -> Option<Statement> {
    let caps = PLUGINS_RE.captures(line)?;
    let list = caps[1].split(')').next().unwrap_or_default();
    let plugins: Vec<&str> = list.split_whitespace().collect();
    Some(Statement::new(
        StatementKind::Plugins,
        "plugins",
        plugins.join(" "),
    ))
}

fn classify_theme(line: &str) -> Option<Statement> {
    let caps = THEME_RE.captures(line)?;
    let theme = parse_value(&caps[1])?;
    Some(Statement::new(StatementKind::Theme, theme.clone(), theme))
}

fn classify_fpath(line: &str) -> Option<Statement> {
    let caps = FPATH_RE.captures(line)?;
    Some(Statement::new(StatementKind::Fpath, "fpath", caps[1].trim()))
}

fn classify_path(line: &str) -> Option<Statement> {
    let caps = PATH_RE.captures(line)?;
    Some(Statement::new(StatementKind::Path, "path", caps[1].trim()))
}

fn classify_autoload(line: &str) -> Option<Statement> {
    let caps = AUTOLOAD_RE.captures(line)?;
    let words = split_words(&caps[1])?;
    let name = words.iter().find(|w| !w.starts_with(['-', '+']))?;
    Some(Statement::new(
        StatementKind::Autoload,
        name.clone(),
        words.join(" "),
    ))
}

fn classify_source(line: &str) -> Option<Statement> {
    let caps = SOURCE_RE.captures(line)?;
    let (file, _) = parse_shell_word(caps[1].trim_start())?;
    if file.is_empty() {
        return None;
    }
    Some(Statement::new(
        StatementKind::Source,
        file,
        caps[1].trim(),
    ))
}

fn classify_keybinding(line: &str) -> Option<Statement> {
    let caps = KEYBINDING_RE.captures(line)?;
    let words = split_words(&caps[1])?;
    let mut iter = words.iter().enumerate();
    let mut key = None;
    while let Some((i, word)) = iter.next() {
        if word == "-M" || word == "-m" {
            // Keymap name argument
            iter.next();
        } else if !word.starts_with('-') {
            key = Some(i);
            break;
        }
    }
    let (name, value) = match key {
        Some(i) => (words[i].clone(), words[i + 1..].join(" ")),
        None => (words.join(" "), String::new()),
    };
    if name.is_empty() {
        return None;
    }
    Some(Statement::new(StatementKind::Keybinding, name, value))
}

fn classify_function(line: &str) -> Option<Statement> {
    let caps = FUNC_START_RE
        .captures(line)
        .or_else(|| FUNC_KEYWORD_RE.captures(line))?;
    Some(Statement::new(
        StatementKind::Function,
        &caps[1],
        line.trim(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> Option<Statement> {
        PatternRegistry::default().classify(line)
    }

    #[test]
    fn test_alias_quoting_variants() {
        let s = classify("alias ll='ls -la'").unwrap();
        assert_eq!(s, Statement::new(StatementKind::Alias, "ll", "ls -la"));

        let s = classify(r#"alias gs="git status""#).unwrap();
        assert_eq!(s.value, "git status");

        let s = classify("alias k=kubectl").unwrap();
        assert_eq!(s.value, "kubectl");

        let s = classify("  alias gp='git push' # push").unwrap();
        assert_eq!(s.name, "gp");
        assert_eq!(s.value, "git push");
    }

    #[test]
    fn test_unbalanced_alias_is_inert() {
        assert_eq!(classify("alias broken='echo"), None);
    }

    #[test]
    fn test_export() {
        let s = classify("export PATH=/usr/bin:$PATH").unwrap();
        assert_eq!(s, Statement::new(StatementKind::Export, "PATH", "/usr/bin:$PATH"));

        let s = classify(r#"export GOPATH="$HOME/go""#).unwrap();
        assert_eq!(s.value, "$HOME/go");
    }

    #[test]
    fn test_history_takes_precedence() {
        assert_eq!(
            classify("export HISTSIZE=10000").unwrap().kind,
            StatementKind::HistoryOption
        );
        assert_eq!(
            classify("setopt HIST_IGNORE_ALL_DUPS").unwrap().kind,
            StatementKind::HistoryOption
        );
        assert_eq!(
            classify("setopt AUTO_CD").unwrap().kind,
            StatementKind::Setopt
        );
    }

    #[test]
    fn test_eval_names_tool() {
        let s = classify(r#"eval "$(starship init zsh)""#).unwrap();
        assert_eq!(s.kind, StatementKind::Eval);
        assert_eq!(s.name, "starship");
        assert_eq!(s.value, "$(starship init zsh)");
    }

    #[test]
    fn test_plugins() {
        let s = classify("plugins=(git docker kubectl)").unwrap();
        assert_eq!(s.kind, StatementKind::Plugins);
        assert_eq!(s.value, "git docker kubectl");

        let s = classify("plugins=(").unwrap();
        assert_eq!(s.value, "");
    }

    #[test]
    fn test_misc_kinds() {
        let cases = [
            (r#"ZSH_THEME="robbyrussell""#, StatementKind::Theme, "robbyrussell"),
            ("fpath=(~/.zfunc $fpath)", StatementKind::Fpath, "fpath"),
            ("path=(~/bin $path)", StatementKind::Path, "path"),
            ("autoload -Uz add-zsh-hook", StatementKind::Autoload, "add-zsh-hook"),
            ("autoload -Uz compinit && compinit", StatementKind::CompletionInit, "compinit"),
            ("source ~/.aliases", StatementKind::Source, "~/.aliases"),
            (". \"$HOME/.cargo/env\"", StatementKind::Source, "$HOME/.cargo/env"),
            ("bindkey '^R' history-incremental-search-backward", StatementKind::Keybinding, "^R"),
            ("bindkey -M viins 'jk' vi-cmd-mode", StatementKind::Keybinding, "jk"),
            ("mkcd() {", StatementKind::Function, "mkcd"),
            ("function extract {", StatementKind::Function, "extract"),
        ];
        for (line, kind, name) in cases {
            let s = classify(line).unwrap_or_else(|| panic!("unclassified: {}", line));
            assert_eq!(s.kind, kind, "{}", line);
            assert_eq!(s.name, name, "{}", line);
        }
    }

    #[test]
    fn test_comments_and_noise() {
        assert_eq!(classify("# alias ll='ls -la'"), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("echo hello"), None);
        assert_eq!(classify("if [ -f ~/.local ]; then"), None);
    }

    #[test]
    fn test_overlong_lines_skipped() {
        let registry = PatternRegistry::new(20);
        assert!(registry.classify("alias ll='ls -la'").is_some());
        let long = format!("alias x='{}'", "a".repeat(30));
        assert_eq!(registry.classify(&long), None);
    }

    #[test]
    fn test_count_matches_extract() {
        let text = "\
alias ll='ls -la'
alias gs='git status'
export EDITOR=nvim
# export IGNORED=1
setopt AUTO_CD
plugins=(git)
mkcd() {
  mkdir -p \"$1\" && cd \"$1\"
}
alias broken='oops
";
        let registry = PatternRegistry::default();
        let counts = registry.count_entries(text);
        for kind in StatementKind::ALL {
            assert_eq!(
                counts.get(kind),
                registry.extract(text, kind).len(),
                "{}",
                kind
            );
        }
        assert_eq!(counts.get(StatementKind::Alias), 2);
        assert_eq!(counts.get(StatementKind::Export), 1);
        assert_eq!(counts.get(StatementKind::Function), 1);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_scan_line_numbers() {
        let registry = PatternRegistry::default();
        let scanned = registry.scan("# header\nalias a='b'\n\nexport X=1\n");
        let lines: Vec<usize> = scanned.iter().map(|(n, _)| *n).collect();
        assert_eq!(lines, vec![2, 4]);
        assert_eq!(
            registry.aliases("alias a='b'\n"),
            vec![("a".to_string(), "b".to_string())]
        );
        assert_eq!(
            registry.exports("export X=1\n"),
            vec![("X".to_string(), "1".to_string())]
        );
    }
}
