//! History log entries

use serde::{Deserialize, Serialize};

/// Snapshot of a document taken immediately before a mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Epoch milliseconds
    pub timestamp: i64,
    pub description: String,
    pub previous_content: String,
    pub file_path: String,
}

impl HistoryEntry {
    pub fn new(
        description: impl Into<String>,
        previous_content: impl Into<String>,
        file_path: impl Into<String>,
    ) -> Self {
        let now = time::OffsetDateTime::now_utc();
        Self {
            timestamp: (now.unix_timestamp_nanos() / 1_000_000) as i64,
            description: description.into(),
            previous_content: previous_content.into(),
            file_path: file_path.into(),
        }
    }

    /// Timestamp rendered as `YYYY-MM-DD HH:MM:SS` (UTC)
    pub fn formatted_time(&self) -> String {
        let nanos = i128::from(self.timestamp) * 1_000_000;
        match time::OffsetDateTime::from_unix_timestamp_nanos(nanos) {
            Ok(t) => format!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                t.year(),
                t.month() as u8,
                t.day(),
                t.hour(),
                t.minute(),
                t.second()
            ),
            Err(_) => self.timestamp.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_time() {
        let mut entry = HistoryEntry::new("Add 1 alias to 'Git'", "", "/tmp/.zshrc");
        entry.timestamp = 0;
        assert_eq!(entry.formatted_time(), "1970-01-01 00:00:00");
    }

    #[test]
    fn test_new_uses_current_time() {
        let entry = HistoryEntry::new("x", "y", "z");
        assert!(entry.timestamp > 1_600_000_000_000);
    }
}
