//! Configuration module for voice-to-ui.
//!
//! Provides `AppConfig` (top-level settings), its sub-sections, `AppPaths`
//! for cross-platform directories, and TOML persistence via
//! `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, CodegenConfig, ExportConfig, PatternConfig, SessionConfig};

use thiserror::Error;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors raised while turning configuration data into runtime tables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A command pattern is not a valid regular expression.
    #[error("invalid `{category}` command pattern: {source}")]
    InvalidPattern {
        category: &'static str,
        #[source]
        source: regex::Error,
    },
}
