//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and handed to the session
//! at construction time.  Every section carries `#[serde(default)]` so a
//! partial `settings.toml` only overrides the keys it names; the preset table
//! is overlaid field by field on the built-in presets.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::component::{PresetName, StylePresets};

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Behaviour of the command session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Preset used when a transcript names none of the preset keywords.
    pub default_preset: PresetName,
    /// Ignore a transcript identical to the previous one when it arrives
    /// within `repeat_window_ms`.  Speech providers sometimes deliver the same
    /// final result twice in quick succession.
    pub skip_repeated_transcripts: bool,
    /// Window for the repeat check.  A repeat after the window is processed
    /// again, so "delete it" said twice deletes two records.
    pub repeat_window_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_preset: PresetName::Modern,
            skip_repeated_transcripts: true,
            repeat_window_ms: 1500,
        }
    }
}

// ---------------------------------------------------------------------------
// CodegenConfig
// ---------------------------------------------------------------------------

/// Settings for both code generators.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Name of the generated React function component.
    pub component_name: String,
    /// Escape quotes and markup characters in field values before they are
    /// interpolated.  Off by default: values are emitted verbatim.
    pub escape_values: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            component_name: "MyComponent".into(),
            escape_values: false,
        }
    }
}

// ---------------------------------------------------------------------------
// ExportConfig
// ---------------------------------------------------------------------------

/// Settings for clipboard / file export of the code artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File name used for downloads.
    pub file_name: String,
    /// MIME type reported alongside exported files.
    pub mime_type: String,
    /// Target directory; `None` means [`AppPaths::export_dir`].
    pub output_dir: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: "MyComponent.jsx".into(),
            mime_type: "text/plain".into(),
            output_dir: None,
        }
    }
}

impl ExportConfig {
    /// Directory exports are written to.
    pub fn resolved_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| AppPaths::new().export_dir)
    }
}

// ---------------------------------------------------------------------------
// PatternConfig
// ---------------------------------------------------------------------------

/// Regular-expression sources for each command category.
///
/// Patterns are compiled case-insensitively by
/// [`CommandPatterns::compile`](crate::command::CommandPatterns::compile).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub create: String,
    pub modify: String,
    pub delete: String,
    pub style: String,
    pub color: String,
    pub size: String,
    pub position: String,
    pub state: String,
    pub animation: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            create: "create|add|make|generate".into(),
            modify: "change|update|set|modify".into(),
            delete: "delete|remove|clear".into(),
            style: "modern|minimal|clean|glass|gradient|dark|light".into(),
            color: "red|blue|green|purple|teal|indigo|gray|white|black".into(),
            size: "small|medium|large|huge|tiny".into(),
            position: "top|bottom|left|right|center".into(),
            state: "hover|focus|active|disabled".into(),
            animation: "animate|transition|fade|slide|bounce".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use voice_to_ui::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub codegen: CodegenConfig,
    pub export: ExportConfig,
    /// Command pattern table.
    pub patterns: PatternConfig,
    /// Style preset table.
    pub presets: StylePresets,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
