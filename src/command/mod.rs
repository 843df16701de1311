//! Command interpretation.
//!
//! This module provides:
//! * [`CommandPatterns`]: the compiled, case-insensitive pattern table.
//! * [`CommandClassifier`]: picks the primary [`Action`] and extracts
//!   preset / colour / size tokens into a [`Classification`].
//! * [`CreateHandler`]: turns a create command into a new record.
//! * [`ModifyHandler`]: applies modification phrases to the last record.
//!
//! Deletion needs no parsing and lives with the session.
//!
//! # Quick start
//!
//! ```rust
//! use voice_to_ui::command::{Action, CommandClassifier, CommandPatterns, CreateHandler};
//! use voice_to_ui::component::{ComponentKind, PresetName, StylePresets};
//! use voice_to_ui::config::PatternConfig;
//!
//! let patterns = CommandPatterns::compile(&PatternConfig::default()).unwrap();
//! let classifier = CommandClassifier::new(patterns, PresetName::Modern);
//! let creator = CreateHandler::new(StylePresets::default());
//!
//! let classification = classifier.classify("add an email input");
//! assert_eq!(classification.action, Some(Action::Create));
//!
//! let record = creator.build(&classification, "x1".into());
//! assert_eq!(record.kind(), ComponentKind::Input);
//! ```

pub mod classifier;
pub mod create;
pub mod modify;
pub mod patterns;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use classifier::{Action, Classification, CommandClassifier, DEFAULT_SIZE};
pub use create::CreateHandler;
pub use modify::ModifyHandler;
pub use patterns::{Category, CommandPatterns};
