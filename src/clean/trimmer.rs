//! Edge trimming — locating the content window of a transcript.
//!
//! Recordings start with greetings, apologies and microphone fumbling, and
//! end with sign-offs and small talk.  [`content_window`] scans forward for
//! the first substantive line and backward for the last one, and returns the
//! contiguous slice between them with the original lines untouched
//! (timestamps still present — the per-line pass strips them later).
//!
//! A line is *substantive* when, after timestamp removal and trimming, it is
//! non-empty, not noise, and either mentions a topic keyword or is longer
//! than [`MIN_KEYWORDLESS_CHARS`] characters.  The same test drives both
//! scans, with one shared keyword list ([`TOPIC_KEYWORDS`]).
//!
//! When no line in the transcript passes the test the window is empty —
//! a transcript of pure noise yields no notes rather than unfiltered noise.
//!
//! [`TOPIC_KEYWORDS`]: crate::lexicon::TOPIC_KEYWORDS

use lazy_static::lazy_static;
use regex::Regex;

use crate::lexicon::TOPIC_KEYWORDS;

use super::classifier::LineClassifier;

/// A keywordless line must exceed this many characters to count as
/// substantive for edge detection.
pub const MIN_KEYWORDLESS_CHARS: usize = 20;

lazy_static! {
    /// Leading `MM:SS` / `H:MM:SS` timestamp plus any following whitespace.
    static ref TIMESTAMP_RE: Regex =
        Regex::new(r"^\d+:\d+(:\d+)?\s*").expect("timestamp pattern");
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Strip a leading timestamp marker and surrounding whitespace from `line`.
pub fn strip_timestamp(line: &str) -> &str {
    match TIMESTAMP_RE.find(line) {
        Some(m) => line[m.end()..].trim(),
        None => line.trim(),
    }
}

/// Return the contiguous `[start, end)` window of `lines` between the first
/// and last substantive lines, inclusive.  Empty input — or input with no
/// substantive line at all — yields an empty slice.
pub fn content_window<'a>(lines: &'a [String], classifier: &LineClassifier) -> &'a [String] {
    let Some(start) = lines
        .iter()
        .position(|line| is_substantive(line, classifier))
    else {
        return &[];
    };

    // The backward scan cannot fail: the forward scan already found a match.
    let end = lines
        .iter()
        .rposition(|line| is_substantive(line, classifier))
        .map(|idx| idx + 1)
        .unwrap_or(lines.len());

    &lines[start..end]
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// The shared content test used by both edge scans.
fn is_substantive(line: &str, classifier: &LineClassifier) -> bool {
    let content = strip_timestamp(line);
    if content.is_empty() || classifier.is_noise(content) {
        return false;
    }
    TOPIC_KEYWORDS.iter().any(|kw| content.contains(kw))
        || content.chars().count() > MIN_KEYWORDLESS_CHARS
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
