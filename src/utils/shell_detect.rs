//! Shell detection utilities

use crate::model::ShellType;
use std::path::Path;

/// Get the appropriate shell type for the current context
///
/// Priority: specified > file name > `$SHELL` > zsh
pub fn get_shell_type(specified: Option<ShellType>, file_path: Option<&Path>) -> ShellType {
    if let Some(shell) = specified {
        return shell;
    }

    if let Some(shell) = file_path.and_then(ShellType::from_path) {
        return shell;
    }

    ShellType::detect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specified_wins() {
        assert_eq!(
            get_shell_type(Some(ShellType::Bash), Some(Path::new(".zshrc"))),
            ShellType::Bash
        );
    }

    #[test]
    fn test_file_name_detection() {
        assert_eq!(
            get_shell_type(None, Some(Path::new("/home/u/.bashrc"))),
            ShellType::Bash
        );
        assert_eq!(
            get_shell_type(None, Some(Path::new("/home/u/.zshrc"))),
            ShellType::Zsh
        );
    }
}
