//! Noise-versus-content decision for a single transcript line.
//!
//! [`LineClassifier::is_noise`] is the heart of the cleanup: everything else
//! (edge trimming, the per-line filter pass) is built on top of it.  The
//! policy is pure OR logic applied in a fixed order, so the first matching
//! rule decides:
//!
//! | # | Rule |
//! |---|------|
//! | 1 | line contains any [`NOISE_PHRASES`] entry |
//! | 2 | line is shorter than [`MIN_CONTENT_CHARS`] characters |
//! | 3 | a filler glyph (`嗯` / `啊`) occurs more than [`MAX_FILLER_REPEATS`] times |
//! | 4 | line matches any [`NOISE_PATTERNS`] regex |
//!
//! The classifier is pure and deterministic — same input, same answer — so
//! it can be called twice per line (once during edge trimming on raw text,
//! once after normalization) without the two passes disagreeing about
//! unchanged text.
//!
//! [`NOISE_PHRASES`]: crate::lexicon::NOISE_PHRASES
//! [`NOISE_PATTERNS`]: crate::lexicon::NOISE_PATTERNS

use crate::lexicon::{NOISE_PATTERNS, NOISE_PHRASES};

/// Lines shorter than this many characters are assumed to be noise —
/// substantive lecture sentences are longer.  Counted in `char`s, not
/// bytes: the transcripts are CJK text.
pub const MIN_CONTENT_CHARS: usize = 10;

/// More occurrences of a single filler glyph than this marks the line as a
/// filler run rather than speech.
pub const MAX_FILLER_REPEATS: usize = 3;

/// Filler glyphs counted by the repetition rule.
const FILLER_GLYPHS: [char; 2] = ['嗯', '啊'];

// ---------------------------------------------------------------------------
// LineClassifier
// ---------------------------------------------------------------------------

/// Decides whether one transcript line is noise or lecture content.
///
/// # Example
/// ```rust
/// use lecture_notes::clean::LineClassifier;
///
/// let classifier = LineClassifier::new();
/// assert!(classifier.is_noise("嗯嗯嗯"));
/// assert!(!classifier.is_noise("今天我们讲分布式系统的一致性模型"));
/// ```
pub struct LineClassifier;

impl LineClassifier {
    /// Create a classifier using the built-in noise lists.
    pub fn new() -> Self {
        Self
    }

    /// Returns `true` when `line` is judged non-substantive.
    pub fn is_noise(&self, line: &str) -> bool {
        // Rule 1: noise phrase substring
        if NOISE_PHRASES.iter().any(|phrase| line.contains(phrase)) {
            return true;
        }

        // Rule 2: too short to be a lecture sentence
        if line.chars().count() < MIN_CONTENT_CHARS {
            return true;
        }

        // Rule 3: filler glyph repeated past the threshold
        for glyph in FILLER_GLYPHS {
            if line.chars().filter(|&c| c == glyph).count() > MAX_FILLER_REPEATS {
                return true;
            }
        }

        // Rule 4: structural noise pattern
        NOISE_PATTERNS.iter().any(|pattern| pattern.is_match(line))
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
