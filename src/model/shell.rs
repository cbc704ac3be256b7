//! Shell type detection and startup file paths

use std::env;
use std::path::{Path, PathBuf};

/// Interactive shells whose startup files the engine edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Zsh,
    Bash,
}

impl ShellType {
    /// Detect shell type from `$SHELL`, defaulting to zsh
    pub fn detect() -> Self {
        match env::var("SHELL") {
            Ok(shell) if shell.contains("bash") => ShellType::Bash,
            _ => ShellType::Zsh,
        }
    }

    /// Guess the shell from a startup file name
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_lowercase();
        if name.contains("zsh") {
            Some(ShellType::Zsh)
        } else if name.contains("bash") || name == ".profile" {
            Some(ShellType::Bash)
        } else {
            None
        }
    }

    /// Get the default startup file path for this shell
    pub fn default_config_path(&self) -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
        match self {
            ShellType::Zsh => home.join(".zshrc"),
            ShellType::Bash => home.join(".bashrc"),
        }
    }

    /// Shell name
    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Zsh => "zsh",
            ShellType::Bash => "bash",
        }
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
