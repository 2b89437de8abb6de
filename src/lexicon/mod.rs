//! Static lexicon data for transcript cleanup.
//!
//! This module provides:
//! * [`CORRECTIONS`] — built-in misheard-term → corrected-term table.
//! * [`NOISE_PHRASES`] / [`NOISE_PATTERNS`] — markers for noise lines.
//! * [`TOPIC_KEYWORDS`] — words that mark a line as lecture material.
//! * [`Lexicon`] — the merged, immutable correction list handed to the
//!   normalizer (built-ins plus optional [`UserEntry`] extras).
//!
//! Everything here is loaded once at startup and never mutated afterwards;
//! all pipeline stages share it read-only.

pub mod corrections;
pub mod noise;
pub mod user;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use corrections::CORRECTIONS;
pub use noise::{NOISE_PATTERNS, NOISE_PHRASES, TOPIC_KEYWORDS};
pub use user::{load_user_entries, UserEntry};

use std::path::Path;

// ---------------------------------------------------------------------------
// Lexicon
// ---------------------------------------------------------------------------

/// The merged correction table: built-in entries in declaration order,
/// followed by any user entries.  Immutable after construction.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<(String, String)>,
}

impl Lexicon {
    /// Lexicon containing only the built-in [`CORRECTIONS`].
    pub fn builtin() -> Self {
        let entries = CORRECTIONS
            .iter()
            .map(|&(wrong, correct)| (wrong.to_string(), correct.to_string()))
            .collect();
        Self { entries }
    }

    /// Built-ins plus user entries from `path` (missing file → built-ins only).
    pub fn with_user_file(path: &Path) -> Self {
        let mut lexicon = Self::builtin();
        for entry in load_user_entries(path) {
            lexicon.entries.push((entry.error, entry.correction));
        }
        lexicon
    }

    /// All `(misheard, corrected)` pairs, in application order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
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
    fn builtin_preserves_declaration_order() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.len(), CORRECTIONS.len());
        assert_eq!(lexicon.entries()[0].0, "CSECSE");
        assert_eq!(lexicon.entries()[0].1, "CSE");
    }

    #[test]
    fn user_entries_append_after_builtins() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("user-lexicon.json");
        std::fs::write(
            &path,
            r#"[{"error": "paxo", "correction": "Paxos"}]"#,
        )
        .expect("write");

        let lexicon = Lexicon::with_user_file(&path);
        assert_eq!(lexicon.len(), CORRECTIONS.len() + 1);
        let last = lexicon.entries().last().expect("entry");
        assert_eq!(last.0, "paxo");
        assert_eq!(last.1, "Paxos");
    }

    #[test]
    fn missing_user_file_falls_back_to_builtins() {
        let dir = tempdir().expect("temp dir");
        let lexicon = Lexicon::with_user_file(&dir.path().join("absent.json"));
        assert_eq!(lexicon.len(), CORRECTIONS.len());
    }
}
