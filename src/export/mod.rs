//! Code export: clipboard copy and file download of a generated artifact.
//!
//! # Overview
//!
//! The session keeps the most recent code artifact; an export request hands
//! it to an [`Exporter`] together with an [`ExportTarget`]:
//!
//! * [`ExportTarget::Clipboard`]: the component module as-is.
//! * [`ExportTarget::FullApp`]: the module embedded in an `App.jsx` listing
//!   (see [`full_app_code`]), copied to the clipboard.
//! * [`ExportTarget::File`]: the module written to
//!   `<output_dir>/<file_name>` (default `MyComponent.jsx`, `text/plain`).
//!
//! # Usage
//!
//! ```no_run
//! use voice_to_ui::export::{ExportTarget, Exporter};
//! use voice_to_ui::config::AppConfig;
//!
//! let config = AppConfig::default();
//! let exporter = Exporter::from_config(&config.export, &config.codegen);
//! let receipt = exporter.export(ExportTarget::File, "export default X;").expect("export failed");
//! println!("{receipt}");
//! ```

pub mod clipboard;
pub mod file;

pub use clipboard::set_clipboard;
pub use file::write_artifact;

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{CodegenConfig, ExportConfig};

// ---------------------------------------------------------------------------
// ExportError
// ---------------------------------------------------------------------------

/// All errors that can surface while exporting an artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Could not open the system clipboard.
    #[error("cannot access clipboard: {0}")]
    ClipboardAccess(String),

    /// Could not write text to the system clipboard.
    #[error("cannot set clipboard text: {0}")]
    ClipboardSet(String),

    /// Could not create the output directory or write the file.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// There is no generated code yet.
    #[error("nothing to export yet")]
    NothingToExport,
}

// ---------------------------------------------------------------------------
// ExportTarget / ExportReceipt
// ---------------------------------------------------------------------------

/// Where an artifact should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportTarget {
    Clipboard,
    FullApp,
    File,
}

impl ExportTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportTarget::Clipboard => "clipboard",
            ExportTarget::FullApp => "full app",
            ExportTarget::File => "file",
        }
    }
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportReceipt {
    Copied { full_app: bool },
    Written { path: PathBuf, mime_type: String },
}

impl fmt::Display for ExportReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportReceipt::Copied { full_app: false } => write!(f, "Code copied to clipboard"),
            ExportReceipt::Copied { full_app: true } => {
                write!(f, "Full app code copied to clipboard")
            }
            ExportReceipt::Written { path, mime_type } => {
                write!(f, "Code downloaded to {} ({mime_type})", path.display())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Exporter
// ---------------------------------------------------------------------------

/// Export settings resolved from [`ExportConfig`].
///
/// Cheap to clone; the orchestrator moves a clone into `spawn_blocking`
/// because clipboard access blocks.
#[derive(Debug, Clone)]
pub struct Exporter {
    pub file_name: String,
    pub mime_type: String,
    pub output_dir: PathBuf,
    /// Identifier of the generated component, as declared by the generators.
    pub component_name: String,
}

impl Exporter {
    pub fn from_config(export: &ExportConfig, codegen: &CodegenConfig) -> Self {
        Self {
            file_name: export.file_name.clone(),
            mime_type: export.mime_type.clone(),
            output_dir: export.resolved_dir(),
            component_name: codegen.component_name.clone(),
        }
    }

    /// Export `code` to `target`.
    ///
    /// # Errors
    ///
    /// [`ExportError::NothingToExport`] for blank code, otherwise the first
    /// clipboard or I/O failure.
    pub fn export(&self, target: ExportTarget, code: &str) -> Result<ExportReceipt, ExportError> {
        if code.trim().is_empty() {
            return Err(ExportError::NothingToExport);
        }

        match target {
            ExportTarget::Clipboard => {
                set_clipboard(code)?;
                Ok(ExportReceipt::Copied { full_app: false })
            }
            ExportTarget::FullApp => {
                set_clipboard(&full_app_code(&self.component_name, &self.file_name, code))?;
                Ok(ExportReceipt::Copied { full_app: true })
            }
            ExportTarget::File => {
                let path = write_artifact(&self.output_dir, &self.file_name, code)?;
                Ok(ExportReceipt::Written {
                    path,
                    mime_type: self.mime_type.clone(),
                })
            }
        }
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::from_config(&ExportConfig::default(), &CodegenConfig::default())
    }
}

// ---------------------------------------------------------------------------
// full_app_code
// ---------------------------------------------------------------------------

/// Embed a component module in a minimal `App.jsx` listing.
///
/// `component_name` is the identifier the module exports; `file_name` is the
/// module's file, imported without its extension.
pub fn full_app_code(component_name: &str, file_name: &str, code: &str) -> String {
    let module = file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name);
    format!(
        "// App.jsx
import React from 'react';
import {component_name} from './{module}';

function App() {{
  return (
    <div className=\"min-h-screen p-8 bg-background\">
      <h1 className=\"text-2xl font-bold mb-6\">My App</h1>
      <{component_name} />
    </div>
  );
}}

export default App;

// {file_name}
{code}
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_name_follows_codegen_settings() {
        let codegen = CodegenConfig {
            component_name: "Landing".into(),
            ..CodegenConfig::default()
        };
        let exporter = Exporter::from_config(&ExportConfig::default(), &codegen);
        assert_eq!(exporter.component_name, "Landing");
        assert_eq!(exporter.file_name, "MyComponent.jsx");
        assert_eq!(Exporter::default().component_name, "MyComponent");
    }

    #[test]
    fn full_app_imports_renamed_component_from_its_file() {
        let out = full_app_code("Landing", "MyComponent.jsx", "const Landing = () => null;");
        assert!(out.contains("import Landing from './MyComponent';"));
        assert!(out.contains("      <Landing />\n"));
        assert!(out.contains("// MyComponent.jsx\nconst Landing = () => null;"));
    }

    #[test]
    fn full_app_wraps_component() {
        let out = full_app_code("MyComponent", "MyComponent.jsx", "export default MyComponent;");
        assert!(out.starts_with("// App.jsx\n"));
        assert!(out.contains("import MyComponent from './MyComponent';"));
        assert!(out.contains("      <MyComponent />\n"));
        assert!(out.contains("// MyComponent.jsx\nexport default MyComponent;"));
    }

    #[test]
    fn blank_code_is_rejected() {
        let err = Exporter::default()
            .export(ExportTarget::File, "  \n")
            .unwrap_err();
        assert!(matches!(err, ExportError::NothingToExport));
    }

    #[test]
    fn file_export_reports_path_and_mime_type() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter {
            output_dir: dir.path().to_path_buf(),
            ..Exporter::default()
        };

        let receipt = exporter.export(ExportTarget::File, "code").unwrap();
        let expected = dir.path().join("MyComponent.jsx");
        assert_eq!(
            receipt,
            ExportReceipt::Written {
                path: expected.clone(),
                mime_type: "text/plain".into(),
            }
        );
        assert_eq!(std::fs::read_to_string(expected).unwrap(), "code");
        assert!(receipt.to_string().contains("text/plain"));
    }

    #[test]
    fn target_labels() {
        assert_eq!(ExportTarget::Clipboard.as_str(), "clipboard");
        assert_eq!(ExportTarget::FullApp.as_str(), "full app");
        assert_eq!(ExportTarget::File.as_str(), "file");
    }
}
