//! Cross-platform application paths using the `dirs` crate.
//!
//! Layout:
//!
//! Config dir (settings):
//!   Windows: %APPDATA%\voice-to-ui\
//!   macOS:   ~/Library/Application Support/voice-to-ui/
//!   Linux:   ~/.config/voice-to-ui/
//!
//! Data dir (exported code):
//!   Windows: %LOCALAPPDATA%\voice-to-ui\exports\
//!   macOS:   ~/Library/Application Support/voice-to-ui/exports/
//!   Linux:   ~/.local/share/voice-to-ui/exports/

use std::path::PathBuf;

/// Holds all resolved application directory/file paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for `settings.toml`.
    pub config_dir: PathBuf,
    /// Full path to `settings.toml`.
    pub settings_file: PathBuf,
    /// Default directory for exported code files.
    pub export_dir: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "voice-to-ui";

    /// Resolves all paths using the `dirs` crate.
    ///
    /// Falls back to the current directory if the platform cannot provide a
    /// standard path.
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let settings_file = config_dir.join("settings.toml");
        let export_dir = data_dir.join("exports");

        Self {
            config_dir,
            settings_file,
            export_dir,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
