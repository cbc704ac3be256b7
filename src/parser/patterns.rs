//! # Statement Regex Patterns
//!
//! One anchored pattern per statement kind. Every pattern allows leading
//! whitespace before the keyword and captures the identifier in group 1.
//! Values are captured raw and unquoted by [`super::words`], since the
//! `regex` crate has no backreferences to pair quotes with.
//!
//! ## Adding New Patterns
//!
//! 1. Add pattern to `lazy_static!` block below
//! 2. Add a classifier in `registry.rs`
//! 3. Insert it into `CLASSIFIERS` at the right precedence

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `setopt HIST_IGNORE_DUPS`, `shopt -s histappend`
    ///
    /// Captures:
    /// - Group 1: option name containing `hist`
    /// - Group 2: remaining options
    pub static ref HISTORY_OPTION_RE: Regex = Regex::new(
        r"^\s*(?:setopt|unsetopt|shopt\s+-[su])\s+([A-Za-z_]*(?i:hist)[A-Za-z_]*)\b(.*)$"
    ).unwrap();

    /// `HISTSIZE=10000`, `export HISTFILE=~/.zsh_history`
    ///
    /// Captures:
    /// - Group 1: variable name
    /// - Group 2: raw value
    pub static ref HISTORY_VAR_RE: Regex = Regex::new(
        r"^\s*(?:export\s+)?(HISTSIZE|SAVEHIST|HISTFILE|HISTFILESIZE|HISTCONTROL|HISTIGNORE|HISTTIMEFORMAT)=(.*)$"
    ).unwrap();

    /// `autoload -Uz compinit && compinit`, `compinit -i`, `bashcompinit`
    ///
    /// Captures:
    /// - Group 1: `compinit` or `bashcompinit`
    pub static ref COMPLETION_INIT_RE: Regex = Regex::new(
        r"^\s*(?:autoload\s+(?:[-+][A-Za-z]+\s+)*)?(compinit|bashcompinit)\b"
    ).unwrap();

    /// `alias ll='ls -la'`, `alias -g G='| grep'`
    ///
    /// Captures:
    /// - Group 1: alias name (allows `.`, `~`, `-` and similar)
    /// - Group 2: raw value
    pub static ref ALIAS_RE: Regex = Regex::new(
        r"^\s*alias\s+(?:-[A-Za-z]+\s+)*([A-Za-z0-9_.:~@+-]+)=(.*)$"
    ).unwrap();

    /// Whole-string check for alias names handed to the writer
    pub static ref ALIAS_NAME_RE: Regex = Regex::new(
        r"^[A-Za-z0-9_.:~@+-]+$"
    ).unwrap();

    /// `export EDITOR=nvim`
    ///
    /// Captures:
    /// - Group 1: variable name (identifier characters only)
    /// - Group 2: raw value
    pub static ref EXPORT_RE: Regex = Regex::new(
        r"^\s*export\s+([A-Za-z_][A-Za-z0-9_]*)=(.*)$"
    ).unwrap();

    /// Whole-string check for variable names handed to the writer
    pub static ref EXPORT_NAME_RE: Regex = Regex::new(
        r"^[A-Za-z_][A-Za-z0-9_]*$"
    ).unwrap();

    /// `eval "$(starship init zsh)"`
    ///
    /// Captures:
    /// - Group 1: raw expression
    pub static ref EVAL_RE: Regex = Regex::new(
        r"^\s*eval\s+(.+)$"
    ).unwrap();

    /// `setopt AUTO_CD`, `unsetopt beep`, `shopt -s globstar`
    ///
    /// Captures:
    /// - Group 1: first option
    /// - Group 2: remaining options
    pub static ref SETOPT_RE: Regex = Regex::new(
        r"^\s*(?:setopt|unsetopt|shopt\s+-[su])\s+([A-Za-z_][A-Za-z0-9_]*)(.*)$"
    ).unwrap();

    /// `plugins=(git docker)` (opening line only for multi-line lists)
    ///
    /// Captures:
    /// - Group 1: list content on this line
    pub static ref PLUGINS_RE: Regex = Regex::new(
        r"^\s*plugins=\((.*)$"
    ).unwrap();

    /// `ZSH_THEME="robbyrussell"`
    ///
    /// Captures:
    /// - Group 1: raw value
    pub static ref THEME_RE: Regex = Regex::new(
        r"^\s*ZSH_THEME=(.*)$"
    ).unwrap();

    /// `fpath=(~/.zfunc $fpath)`, `fpath+=~/.zfunc`
    ///
    /// Captures:
    /// - Group 1: raw value
    pub static ref FPATH_RE: Regex = Regex::new(
        r"^\s*(?:export\s+)?(?:typeset\s+-U\s+)?(?:fpath|FPATH)\+?=(.*)$"
    ).unwrap();

    /// `path=(~/bin $path)`, `PATH=$HOME/bin:$PATH` (without `export`)
    ///
    /// Captures:
    /// - Group 1: raw value
    pub static ref PATH_RE: Regex = Regex::new(
        r"^\s*(?:typeset\s+-U\s+)?(?:path|PATH)\+?=(.*)$"
    ).unwrap();

    /// `autoload -Uz add-zsh-hook`
    ///
    /// Captures:
    /// - Group 1: arguments
    pub static ref AUTOLOAD_RE: Regex = Regex::new(
        r"^\s*autoload\s+(.+)$"
    ).unwrap();

    /// `source ~/.aliases` or `. ~/.profile`
    ///
    /// Captures:
    /// - Group 1: arguments
    pub static ref SOURCE_RE: Regex = Regex::new(
        r"^\s*(?:source|\.)\s+(.+)$"
    ).unwrap();

    /// `bindkey '^R' history-incremental-search-backward`, `bind -x ...`
    ///
    /// Captures:
    /// - Group 1: arguments
    pub static ref KEYBINDING_RE: Regex = Regex::new(
        r"^\s*(?:bindkey|bind)\s+(.+)$"
    ).unwrap();

    /// `name() {` or `function name() {`
    ///
    /// Captures:
    /// - Group 1: function name
    pub static ref FUNC_START_RE: Regex = Regex::new(
        r"^\s*(?:function\s+)?([A-Za-z_][A-Za-z0-9_.:-]*)\s*\(\s*\)"
    ).unwrap();

    /// `function name {`
    ///
    /// Captures:
    /// - Group 1: function name
    pub static ref FUNC_KEYWORD_RE: Regex = Regex::new(
        r"^\s*function\s+([A-Za-z_][A-Za-z0-9_.:-]*)\s*(?:\{|$)"
    ).unwrap();
}
