//! Application entry point — lecture-notes batch.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Load the [`Lexicon`] (built-ins + optional user entries).
//! 4. Run the [`NotesPipeline`] over every transcript found.
//! 5. Log the batch summary and exit.
//!
//! A single malformed transcript is logged and skipped inside the pipeline;
//! only batch-setup failures (output directory creation, input scan) abort
//! the run.

use anyhow::Result;
use lecture_notes::{
    config::{AppConfig, AppPaths},
    lexicon::Lexicon,
    pipeline::NotesPipeline,
};

fn main() -> Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("lecture-notes starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Lexicon (immutable from here on)
    let paths = AppPaths::new();
    let lexicon = Lexicon::with_user_file(&paths.user_lexicon_file);
    log::info!("lexicon loaded ({} correction entries)", lexicon.len());

    // 4. Batch run
    let pipeline = NotesPipeline::new(config, lexicon);
    let summary = pipeline.run()?;

    // 5. Summary
    log::info!(
        "{} transcript(s) found: {} note(s) written, {} empty, {} failed",
        summary.found,
        summary.written,
        summary.empty,
        summary.failed,
    );
    Ok(())
}
