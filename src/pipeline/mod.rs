//! File pipeline — discovery, per-file processing, and note output.
//!
//! This module wires the cleanup stages from [`crate::clean`] into a batch
//! over the input directory:
//!
//! ```text
//! input_dir/节次N_课堂语音转文字记录.txt
//!        │ discover_transcripts()
//!        ▼
//! NotesPipeline::process_file()    trim → normalize → classify
//!        │
//!        ▼
//! output_dir/节次N_笔记.txt        (LectureNote)
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use lecture_notes::config::AppConfig;
//! use lecture_notes::lexicon::Lexicon;
//! use lecture_notes::pipeline::NotesPipeline;
//!
//! let pipeline = NotesPipeline::new(AppConfig::default(), Lexicon::builtin());
//! let summary = pipeline.run().expect("batch setup failed");
//! println!("{} notes written", summary.written);
//! ```

pub mod discover;
pub mod note;
pub mod runner;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use discover::{discover_transcripts, lecture_index};
pub use note::LectureNote;
pub use runner::{NotesPipeline, PipelineError, ProcessOutcome, RunSummary};
