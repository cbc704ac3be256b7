//! Path utilities

use std::path::{Path, PathBuf};

/// Expand tilde (~) in path to home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped.trim_start_matches('/'));
        }
    }
    PathBuf::from(path)
}

/// Normalize a path (expand tilde, resolve relative paths)
pub fn normalize_path(path: &str) -> PathBuf {
    let expanded = expand_tilde(path);
    if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(expanded)
    }
}

/// Encode a document path as a flat, reversible file stem.
///
/// ASCII alphanumerics, `-` and `.` are kept; every other byte (including
/// `_` itself) becomes `_XX` in uppercase hex, so distinct paths never share
/// a stem. `/home/u/.zshrc` → `_2Fhome_2Fu_2F.zshrc`
pub fn encode_for_filename(path: &Path) -> String {
    let raw = path.to_string_lossy();
    if raw.is_empty() {
        return "_".to_string();
    }
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'.' {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("_{:02X}", byte));
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        let path = expand_tilde("~/.zshrc");
        assert!(!path.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn test_normalize_absolute_path() {
        let path = normalize_path("/etc/zshrc");
        assert_eq!(path, PathBuf::from("/etc/zshrc"));
    }

    #[test]
    fn test_encode_for_filename() {
        assert_eq!(
            encode_for_filename(Path::new("/home/u/.zshrc")),
            "_2Fhome_2Fu_2F.zshrc"
        );
        assert_eq!(encode_for_filename(Path::new("/")), "_2F");
        assert_eq!(encode_for_filename(Path::new("")), "_");
    }

    #[test]
    fn test_encode_for_filename_keeps_paths_apart() {
        let pairs = [
            ("/home/u/.zshrc", "/home/u_/zshrc"),
            ("/a/b", "/a_b"),
            ("/a_2Fb", "/a/b"),
            ("home/rc", "/home/rc"),
        ];
        for (a, b) in pairs {
            assert_ne!(
                encode_for_filename(Path::new(a)),
                encode_for_filename(Path::new(b)),
                "{} vs {}",
                a,
                b
            );
        }
    }
}
