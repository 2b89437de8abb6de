//! Batch runner — drives the full transcript → note pipeline.
//!
//! # Pipeline flow
//!
//! ```text
//! discover_transcripts(input_dir)
//!   └─▶ per file: read lines
//!         └─▶ content_window()          drop framing noise at the edges
//!               └─▶ per line: strip_timestamp → clean → is_noise
//!                     ├─ all dropped → warn, no output file
//!                     └─ otherwise  → LectureNote::write_to(output_dir)
//! ```
//!
//! One bad transcript never aborts the batch: per-file errors are logged
//! with the file name and processing continues.  Only failure to create the
//! output directory is fatal.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::clean::{content_window, strip_timestamp, LineClassifier, TextNormalizer};
use crate::config::AppConfig;
use crate::lexicon::Lexicon;

use super::discover::discover_transcripts;
use super::note::LectureNote;

// ---------------------------------------------------------------------------
// PipelineError
// ---------------------------------------------------------------------------

/// Errors that can surface while processing transcripts.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The output directory could not be created — fatal for the batch.
    #[error("cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input directory could not be scanned.
    #[error("cannot scan input directory {path}: {source}")]
    Scan {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A transcript could not be read (I/O failure or non-UTF-8 bytes).
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A note file could not be written.
    #[error("cannot write note for {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

/// Result of processing a single transcript file.
#[derive(Debug)]
pub enum ProcessOutcome {
    /// A note file was written with this many content lines.
    Written { path: PathBuf, entries: usize },
    /// Trimming and filtering left nothing; no file was produced.
    Empty,
}

/// Counters reported after a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Transcript files discovered.
    pub found: usize,
    /// Note files written.
    pub written: usize,
    /// Transcripts skipped because no content survived.
    pub empty: usize,
    /// Transcripts that failed with a per-file error.
    pub failed: usize,
}

// ---------------------------------------------------------------------------
// NotesPipeline
// ---------------------------------------------------------------------------

/// Owns the classifier and normalizer and processes transcripts with them.
///
/// Construction loads nothing from disk; the [`Lexicon`] passed in is the
/// only shared state, and it is immutable — processing files in any order
/// (or, later, in parallel) cannot interfere.
pub struct NotesPipeline {
    config: AppConfig,
    classifier: LineClassifier,
    normalizer: TextNormalizer,
}

impl NotesPipeline {
    /// Build a pipeline over an already-loaded lexicon.
    pub fn new(config: AppConfig, lexicon: Lexicon) -> Self {
        Self {
            config,
            classifier: LineClassifier::new(),
            normalizer: TextNormalizer::new(lexicon),
        }
    }

    /// Process every transcript in the configured input directory.
    ///
    /// Per-file failures are logged and counted, never propagated; the only
    /// fatal errors are output-directory creation and input-directory scan
    /// failures.
    pub fn run(&self) -> Result<RunSummary, PipelineError> {
        std::fs::create_dir_all(&self.config.output_dir).map_err(|source| {
            PipelineError::OutputDir {
                path: self.config.output_dir.clone(),
                source,
            }
        })?;

        let files =
            discover_transcripts(&self.config.input_dir).map_err(|source| PipelineError::Scan {
                path: self.config.input_dir.clone(),
                source,
            })?;

        if files.is_empty() {
            log::info!(
                "no transcript files found in {}",
                self.config.input_dir.display()
            );
            return Ok(RunSummary::default());
        }

        log::info!("found {} transcript file(s)", files.len());

        let mut summary = RunSummary {
            found: files.len(),
            ..RunSummary::default()
        };

        for file in &files {
            log::info!("processing {}", file.display());
            match self.process_file(file, &self.config.output_dir) {
                Ok(ProcessOutcome::Written { path, entries }) => {
                    log::info!("wrote {} ({entries} entries)", path.display());
                    summary.written += 1;
                }
                Ok(ProcessOutcome::Empty) => {
                    log::warn!("{}: no usable content found, skipping", file.display());
                    summary.empty += 1;
                }
                Err(e) => {
                    log::error!("failed to process {}: {e}", file.display());
                    summary.failed += 1;
                }
            }
        }

        log::info!(
            "done: {} note(s) written to {}",
            summary.written,
            self.config.output_dir.display()
        );
        Ok(summary)
    }

    /// Process one transcript file into a note in `output_dir`.
    ///
    /// Returns [`ProcessOutcome::Empty`] — and writes nothing — when
    /// trimming and filtering leave no content lines.
    pub fn process_file(
        &self,
        input: &Path,
        output_dir: &Path,
    ) -> Result<ProcessOutcome, PipelineError> {
        let text = std::fs::read_to_string(input).map_err(|source| PipelineError::Read {
            path: input.to_path_buf(),
            source,
        })?;
        let lines: Vec<String> = text.lines().map(str::to_string).collect();

        let window = content_window(&lines, &self.classifier);

        let mut entries = Vec::new();
        for line in window {
            let content = strip_timestamp(line);
            if content.is_empty() {
                continue;
            }
            let cleaned = self.normalizer.clean(content);
            if cleaned.is_empty() || self.classifier.is_noise(&cleaned) {
                continue;
            }
            entries.push(cleaned);
        }

        if entries.is_empty() {
            return Ok(ProcessOutcome::Empty);
        }

        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("transcript");
        let note = LectureNote::new(stem, entries);
        let path = note
            .write_to(output_dir)
            .map_err(|source| PipelineError::Write {
                path: input.to_path_buf(),
                source,
            })?;

        Ok(ProcessOutcome::Written {
            path,
            entries: note.entry_count(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn pipeline(input_dir: &Path, output_dir: &Path) -> NotesPipeline {
        let config = AppConfig {
            input_dir: input_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
        };
        NotesPipeline::new(config, Lexicon::builtin())
    }

    #[test]
    fn end_to_end_trims_corrects_and_writes() {
        let dir = tempdir().expect("temp dir");
        let input_dir = dir.path().join("scripts");
        let output_dir = dir.path().join("notes");
        std::fs::create_dir_all(&input_dir).expect("mkdir");

        std::fs::write(
            input_dir.join("节次3_课堂语音转文字记录.txt"),
            "00:01 嗯嗯嗯\n\
             00:05 对不起 我们开始上课\n\
             00:10 今天讲 CSECSE 系统的 on deline 类型\n\
             00:15 谢谢大家再见\n",
        )
        .expect("write input");

        let summary = pipeline(&input_dir, &output_dir).run().expect("run");
        assert_eq!(summary.found, 1);
        assert_eq!(summary.written, 1);
        assert_eq!(summary.failed, 0);

        let body =
            std::fs::read_to_string(output_dir.join("节次3_笔记.txt")).expect("read note");
        assert_eq!(
            body,
            "# CSP课程第3节笔记\n\n今天讲 CSE 系统的 unsigned 类型\n\n"
        );
    }

    #[test]
    fn noise_only_transcript_writes_no_file() {
        let dir = tempdir().expect("temp dir");
        let input_dir = dir.path().join("scripts");
        let output_dir = dir.path().join("notes");
        std::fs::create_dir_all(&input_dir).expect("mkdir");

        std::fs::write(
            input_dir.join("节次7_课堂语音转文字记录.txt"),
            "00:01 嗯嗯嗯\n00:02 加油加油\n00:03 对不起\n",
        )
        .expect("write input");

        let summary = pipeline(&input_dir, &output_dir).run().expect("run");
        assert_eq!(summary.found, 1);
        assert_eq!(summary.written, 0);
        assert_eq!(summary.empty, 1);
        assert!(!output_dir.join("节次7_笔记.txt").exists());
    }

    #[test]
    fn stray_file_name_falls_back_to_stem() {
        let dir = tempdir().expect("temp dir");
        let output_dir = dir.path().join("notes");
        std::fs::create_dir_all(&output_dir).expect("mkdir");

        let input = dir.path().join("random_transcript.txt");
        std::fs::write(&input, "00:05 计算机系统结构的课程大纲如下\n").expect("write input");

        let p = pipeline(dir.path(), &output_dir);
        let outcome = p.process_file(&input, &output_dir).expect("process");

        match outcome {
            ProcessOutcome::Written { path, entries } => {
                assert_eq!(entries, 1);
                assert!(path.ends_with("random_transcript_笔记.txt"));
            }
            ProcessOutcome::Empty => panic!("expected a written note"),
        }
    }

    #[test]
    fn empty_input_directory_is_not_an_error() {
        let dir = tempdir().expect("temp dir");
        let input_dir = dir.path().join("scripts");
        let output_dir = dir.path().join("notes");
        std::fs::create_dir_all(&input_dir).expect("mkdir");

        let summary = pipeline(&input_dir, &output_dir).run().expect("run");
        assert_eq!(summary, RunSummary::default());
        assert!(output_dir.is_dir()); // created during batch setup
    }

    #[test]
    fn unreadable_file_fails_per_file_not_batch() {
        let dir = tempdir().expect("temp dir");
        let input_dir = dir.path().join("scripts");
        let output_dir = dir.path().join("notes");
        std::fs::create_dir_all(&input_dir).expect("mkdir");

        // Non-UTF-8 bytes: read_to_string fails for this file only.
        std::fs::write(
            input_dir.join("节次1_课堂语音转文字记录.txt"),
            [0xff, 0xfe, 0x00],
        )
        .expect("write input");
        std::fs::write(
            input_dir.join("节次2_课堂语音转文字记录.txt"),
            "00:10 今天讲 CSECSE 系统的 on deline 类型\n",
        )
        .expect("write input");

        let summary = pipeline(&input_dir, &output_dir).run().expect("run");
        assert_eq!(summary.found, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.written, 1);
        assert!(output_dir.join("节次2_笔记.txt").exists());
    }
}
