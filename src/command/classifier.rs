//! Rule-based transcript classifier.
//!
//! [`CommandClassifier::classify`] picks exactly one primary [`Action`] in the
//! fixed priority order create → modify → delete, and independently extracts
//! the style preset, colour and size tokens the handlers consume.  There is
//! no scoring: the first rule that matches wins.

use crate::component::PresetName;

use super::patterns::{Category, CommandPatterns};

/// Size token reported when the transcript names no size.
pub const DEFAULT_SIZE: &str = "default";

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// Primary intent of a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Modify,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Modify => "modify",
            Action::Delete => "delete",
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Everything the classifier extracted from one transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Lowercased transcript the keyword rules run against.
    pub lowered: String,
    /// `None` when no action pattern matched.
    pub action: Option<Action>,
    pub preset: PresetName,
    pub color: Option<String>,
    pub size: String,
    pub style: Option<String>,
    pub position: Option<String>,
    pub state: Option<String>,
    pub animation: Option<String>,
}

impl Classification {
    pub fn is_recognized(&self) -> bool {
        self.action.is_some()
    }
}

// ---------------------------------------------------------------------------
// CommandClassifier
// ---------------------------------------------------------------------------

/// Deterministic classifier over an injected [`CommandPatterns`] table.
///
/// # Example
/// ```rust
/// use voice_to_ui::command::{Action, CommandClassifier, CommandPatterns};
/// use voice_to_ui::component::PresetName;
/// use voice_to_ui::config::PatternConfig;
///
/// let patterns = CommandPatterns::compile(&PatternConfig::default()).unwrap();
/// let classifier = CommandClassifier::new(patterns, PresetName::Modern);
///
/// let c = classifier.classify("Create a small red button");
/// assert_eq!(c.action, Some(Action::Create));
/// assert_eq!(c.color.as_deref(), Some("red"));
/// assert_eq!(c.size, "small");
/// ```
#[derive(Debug, Clone)]
pub struct CommandClassifier {
    patterns: CommandPatterns,
    default_preset: PresetName,
}

impl CommandClassifier {
    pub fn new(patterns: CommandPatterns, default_preset: PresetName) -> Self {
        Self {
            patterns,
            default_preset,
        }
    }

    pub fn patterns(&self) -> &CommandPatterns {
        &self.patterns
    }

    /// Classify a raw transcript.
    pub fn classify(&self, transcript: &str) -> Classification {
        let lowered = transcript.to_lowercase();
        let p = &self.patterns;

        let action = if p.is_match(Category::Create, &lowered) {
            Some(Action::Create)
        } else if p.is_match(Category::Modify, &lowered) {
            Some(Action::Modify)
        } else if p.is_match(Category::Delete, &lowered) {
            Some(Action::Delete)
        } else {
            None
        };

        let classification = Classification {
            action,
            preset: PresetName::find_in(&lowered).unwrap_or(self.default_preset),
            color: p.first_match(Category::Color, &lowered),
            size: p
                .first_match(Category::Size, &lowered)
                .unwrap_or_else(|| DEFAULT_SIZE.to_string()),
            style: p.first_match(Category::Style, &lowered),
            position: p.first_match(Category::Position, &lowered),
            state: p.first_match(Category::State, &lowered),
            animation: p.first_match(Category::Animation, &lowered),
            lowered,
        };

        log::debug!(
            "classified {:?}: action={:?} preset={} color={:?} size={}",
            transcript,
            classification.action.map(|a| a.as_str()),
            classification.preset.as_str(),
            classification.color,
            classification.size,
        );

        classification
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
