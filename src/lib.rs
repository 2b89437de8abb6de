//! lecture-notes — turns raw speech-to-text lecture transcripts into
//! cleaned study notes.
//!
//! The transcription engine produces line-oriented text with `MM:SS`
//! timestamps, filler syllables, misheard technical jargon, and small talk
//! framing the actual lecture.  This crate trims the framing noise, drops
//! noise lines from the body, corrects the jargon with a curated lexicon,
//! and writes one note file per lecture.
//!
//! # Module map
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`lexicon`]  | static correction table, noise lists, topic keywords |
//! | [`clean`]    | line classification, edge trimming, normalization |
//! | [`pipeline`] | file discovery, per-file processing, note output |
//! | [`config`]   | input/output directories, TOML persistence |

pub mod clean;
pub mod config;
pub mod lexicon;
pub mod pipeline;
