//! Cross-platform application paths using the `dirs` crate.
//!
//! Layout (config dir):
//!   Windows: %APPDATA%\lecture-notes\
//!   macOS:   ~/Library/Application Support/lecture-notes/
//!   Linux:   ~/.config/lecture-notes/
//!
//! Holds `settings.toml` and the optional `user-lexicon.json`.

use std::path::PathBuf;

/// Holds all resolved application directory/file paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for `settings.toml` and `user-lexicon.json`.
    pub config_dir: PathBuf,
    /// Full path to `settings.toml`.
    pub settings_file: PathBuf,
    /// Full path to `user-lexicon.json`.
    pub user_lexicon_file: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "lecture-notes";

    /// Resolves all paths using the `dirs` crate.
    ///
    /// Falls back to the current directory if the platform cannot provide a
    /// standard path (should be extremely rare in practice).
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let settings_file = config_dir.join("settings.toml");
        let user_lexicon_file = config_dir.join("user-lexicon.json");

        Self {
            config_dir,
            settings_file,
            user_lexicon_file,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
