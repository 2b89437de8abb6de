//! Optional user-curated lexicon entries, persisted as JSON.
//!
//! `user-lexicon.json` lives in the platform config directory:
//!
//! | Platform | Path |
//! |----------|------|
//! | Windows  | `%APPDATA%\lecture-notes\user-lexicon.json` |
//! | macOS    | `~/Library/Application Support/lecture-notes/user-lexicon.json` |
//! | Linux    | `~/.config/lecture-notes/user-lexicon.json` |
//!
//! The file is read once at startup and merged *after* the built-in table,
//! so user entries see text the built-ins have already corrected.  Nothing
//! writes the file back — it is hand-maintained, not learned.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// A single user-defined correction entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEntry {
    /// The mis-transcribed form (as produced by STT).
    pub error: String,
    /// The desired corrected form.
    pub correction: String,
}

/// Load user entries from `path`, or an empty list when the file does not
/// exist or cannot be parsed (a broken user file must not stop the batch).
pub fn load_user_entries(path: &Path) -> Vec<UserEntry> {
    if !path.exists() {
        return Vec::new();
    }
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("cannot read {} ({e}); ignoring user lexicon", path.display());
            return Vec::new();
        }
    };
    match serde_json::from_str(&data) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("cannot parse {} ({e}); ignoring user lexicon", path.display());
            Vec::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_empty() {
        let dir = tempdir().expect("temp dir");
        let entries = load_user_entries(&dir.path().join("nope.json"));
        assert!(entries.is_empty());
    }

    #[test]
    fn loads_entries_from_json() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("user-lexicon.json");
        std::fs::write(
            &path,
            r#"[{"error": "kubernets", "correction": "Kubernetes"}]"#,
        )
        .expect("write");

        let entries = load_user_entries(&path);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].error, "kubernets");
        assert_eq!(entries[0].correction, "Kubernetes");
    }

    #[test]
    fn malformed_json_yields_empty() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("user-lexicon.json");
        std::fs::write(&path, "not json").expect("write");
        assert!(load_user_entries(&path).is_empty());
    }
}
