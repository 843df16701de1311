//! Session messages: inbound commands, outbound updates, advisories.

use std::fmt;

use thiserror::Error;

use crate::codegen::TemplateOutput;
use crate::command::Classification;
use crate::component::ComponentRecord;
use crate::export::{ExportReceipt, ExportTarget};

// ---------------------------------------------------------------------------
// Advisory
// ---------------------------------------------------------------------------

/// Soft, user-visible outcome of a command that left the list unchanged.
///
/// Never fatal; the session keeps accepting commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Advisory {
    #[error("Could not understand the command. Try being more specific.")]
    UnrecognizedCommand,

    #[error("No components to modify")]
    NothingToModify,

    #[error("Could not modify component")]
    NothingModified,

    #[error("No components to delete")]
    NothingToDelete,
}

// ---------------------------------------------------------------------------
// Change / Outcome
// ---------------------------------------------------------------------------

/// A committed change to the component list, by record id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Created(String),
    Modified(String),
    Deleted(String),
}

impl Change {
    pub fn id(&self) -> &str {
        match self {
            Change::Created(id) | Change::Modified(id) | Change::Deleted(id) => id,
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Created(id) => write!(f, "created {id}"),
            Change::Modified(id) => write!(f, "modified {id}"),
            Change::Deleted(id) => write!(f, "deleted {id}"),
        }
    }
}

/// Everything one transcript produced.
///
/// A skipped transcript (blank, or a repeat of the previous one) has no
/// classification and nothing else set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub classification: Option<Classification>,
    pub change: Option<Change>,
    pub advisory: Option<Advisory>,
    pub template: Option<TemplateOutput>,
}

impl Outcome {
    pub fn is_skipped(&self) -> bool {
        self.classification.is_none()
    }
}

// ---------------------------------------------------------------------------
// SessionCommand / SessionUpdate
// ---------------------------------------------------------------------------

/// Inbound event for the [`SessionOrchestrator`](super::SessionOrchestrator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// A finalised utterance from the speech provider.
    Transcript(String),
    /// Remove the record with this exact id.
    DeleteById(String),
    /// Export the latest code artifact.
    Export(ExportTarget),
    /// Report the current component records.
    ListComponents,
}

/// Outbound event emitted by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    /// The component list changed; `code` is the regenerated flat module.
    ComponentsChanged { code: String, count: usize },
    /// Template lookup result for a create or unrecognised transcript.
    TemplateResolved { code: String, component_type: String },
    Advisory(Advisory),
    /// Design vocabulary mentioned in the transcript.
    KeywordsDetected(Vec<String>),
    Exported(ExportReceipt),
    /// Snapshot answering [`SessionCommand::ListComponents`].
    Components(Vec<ComponentRecord>),
    ExportFailed(String),
    /// Transcripts are rejected until a user signs in.
    SignInRequired,
}
