//! Configuration module for the lecture-notes batch.
//!
//! Provides `AppConfig` (input/output directories), `AppPaths` for
//! cross-platform config locations, and TOML persistence via
//! `AppConfig::load` / `AppConfig::save_to`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::AppConfig;
