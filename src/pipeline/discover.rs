//! Input discovery — finding transcript files and their lecture indices.
//!
//! Transcript files follow the naming scheme the recording workflow
//! produces: `节次N_课堂语音转文字记录.txt` ("session N, classroom
//! speech-to-text record").  Discovery matches that scheme exactly; the
//! per-file processor itself accepts any text file, so stray files can
//! still be processed directly (e.g. from tests) — they just are not
//! picked up by the batch scan.

use std::io;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Full transcript file name, e.g. `节次3_课堂语音转文字记录.txt`.
    static ref TRANSCRIPT_FILE_RE: Regex =
        Regex::new(r"^节次\d+_课堂语音转文字记录\.txt$").expect("transcript file pattern");

    /// Lecture index marker inside a file stem.
    static ref LECTURE_INDEX_RE: Regex =
        Regex::new(r"节次(\d+)").expect("lecture index pattern");
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// List all transcript files in `dir`, sorted by file name.
///
/// A missing or non-directory `dir` yields an empty list — "no input found"
/// is an ordinary outcome for the batch, not an error.  Sorting is plain
/// lexicographic on the file name, so `节次10` sorts before `节次2`; the
/// order only affects log readability, never the output content.
pub fn discover_transcripts(dir: &Path) -> io::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| TRANSCRIPT_FILE_RE.is_match(name))
        })
        .collect();

    files.sort();
    Ok(files)
}

/// Extract the lecture index digits from a file stem, if present.
pub fn lecture_index(stem: &str) -> Option<&str> {
    LECTURE_INDEX_RE
        .captures(stem)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn finds_only_matching_files_sorted_by_name() {
        let dir = tempdir().expect("temp dir");
        for name in [
            "节次2_课堂语音转文字记录.txt",
            "节次10_课堂语音转文字记录.txt",
            "random_transcript.txt",
            "节次3_笔记.txt",
        ] {
            std::fs::write(dir.path().join(name), "x").expect("write");
        }

        let files = discover_transcripts(dir.path()).expect("discover");
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();

        // lexicographic: "10" sorts before "2"
        assert_eq!(
            names,
            vec![
                "节次10_课堂语音转文字记录.txt",
                "节次2_课堂语音转文字记录.txt",
            ]
        );
    }

    #[test]
    fn missing_directory_yields_empty() {
        let dir = tempdir().expect("temp dir");
        let files = discover_transcripts(&dir.path().join("absent")).expect("discover");
        assert!(files.is_empty());
    }

    #[test]
    fn extracts_lecture_index() {
        assert_eq!(lecture_index("节次3_课堂语音转文字记录"), Some("3"));
        assert_eq!(lecture_index("节次12_课堂语音转文字记录"), Some("12"));
        assert_eq!(lecture_index("random_transcript"), None);
    }
}
