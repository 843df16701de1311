//! Command session for voice-to-UI.
//!
//! This module wires classification, the component list and both code
//! generators into one stateful unit, and exposes the async event loop the
//! binary drives.
//!
//! # Architecture
//!
//! ```text
//! SessionCommand (mpsc)
//!        │
//!        ▼
//! SessionOrchestrator::run()  ← async tokio task
//!        │
//!        ├─ Transcript  → Session::process → create / modify / delete
//!        ├─ DeleteById  → Session::delete_by_id
//!        └─ Export      → spawn_blocking(Exporter::export)
//!        │
//!        ▼
//! SessionUpdate (mpsc) ──▶ consumer (preview, console, …)
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use voice_to_ui::config::AppConfig;
//! use voice_to_ui::session::{Advisory, Session};
//!
//! let mut session = Session::from_config(&AppConfig::default()).unwrap();
//!
//! session.process("add a password input");
//! session.process("change label to Secret");
//! assert_eq!(session.components().len(), 1);
//!
//! let outcome = session.process("please do something");
//! assert_eq!(outcome.advisory, Some(Advisory::UnrecognizedCommand));
//! ```

pub mod engine;
pub mod runner;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use engine::Session;
pub use runner::SessionOrchestrator;
pub use state::{Advisory, Change, Outcome, SessionCommand, SessionUpdate};
