//! Transcript cleanup — the decision logic of the notes pipeline.
//!
//! This module provides:
//! * [`LineClassifier`] — noise vs. content decision for one line.
//! * [`content_window`] / [`strip_timestamp`] — edge trimming.
//! * [`TextNormalizer`] — lexicon corrections + whitespace normalization.
//!
//! # Processing order
//!
//! ```text
//! raw lines
//!    │
//!    ▼
//! content_window()            drop framing noise at both edges
//!    │
//!    ▼  per line
//! strip_timestamp() → TextNormalizer::clean() → LineClassifier::is_noise()
//!    │                                                 │
//!    └────────── kept content lines ◀── false ─────────┘
//! ```
//!
//! All three stages are pure; the same [`LineClassifier`] instance serves
//! both the trimmer and the per-line filter pass.

pub mod classifier;
pub mod normalizer;
pub mod trimmer;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use classifier::{LineClassifier, MAX_FILLER_REPEATS, MIN_CONTENT_CHARS};
pub use normalizer::TextNormalizer;
pub use trimmer::{content_window, strip_timestamp, MIN_KEYWORDLESS_CHARS};
