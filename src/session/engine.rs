//! Synchronous session engine.
//!
//! [`Session`] owns one [`ComponentList`] and applies one transcript at a
//! time: classify, dispatch to create / modify / delete, and report what
//! happened as an [`Outcome`].  Each call is atomic with respect to the list;
//! advisories never leave a partial edit behind.

use std::time::{Duration, Instant};

use crate::codegen::{FlatGenerator, TemplateGenerator, TemplateLibrary};
use crate::command::{Action, CommandClassifier, CommandPatterns, CreateHandler, ModifyHandler};
use crate::component::{ComponentList, IdGenerator, RandomIds};
use crate::config::{AppConfig, ConfigError};

use super::state::{Advisory, Change, Outcome};

/// Command session over a single component list.
///
/// # Example
/// ```rust
/// use voice_to_ui::config::AppConfig;
/// use voice_to_ui::component::SequentialIds;
/// use voice_to_ui::session::{Change, Session};
///
/// let mut session = Session::from_config(&AppConfig::default())
///     .unwrap()
///     .with_id_generator(SequentialIds::default());
///
/// let outcome = session.process("create a small red button");
/// assert_eq!(outcome.change, Some(Change::Created("c1".into())));
/// assert!(session.code().contains("variant=\"destructive\" size=\"sm\""));
/// ```
pub struct Session {
    classifier: CommandClassifier,
    creator: CreateHandler,
    modifier: ModifyHandler,
    flat: FlatGenerator,
    templates: TemplateGenerator,
    ids: Box<dyn IdGenerator>,
    components: ComponentList,
    skip_repeated: bool,
    repeat_window: Duration,
    last_transcript: Option<(String, Instant)>,
}

impl Session {
    /// Build a session from configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidPattern`] when a configured command pattern does
    /// not compile.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let patterns = CommandPatterns::compile(&config.patterns)?;
        Ok(Self {
            classifier: CommandClassifier::new(patterns, config.session.default_preset),
            creator: CreateHandler::new(config.presets.clone()),
            modifier: ModifyHandler::new(),
            flat: FlatGenerator::from_config(&config.codegen),
            templates: TemplateGenerator::new(
                TemplateLibrary::builtin(),
                config.codegen.component_name.clone(),
            ),
            ids: Box::new(RandomIds),
            components: ComponentList::new(),
            skip_repeated: config.session.skip_repeated_transcripts,
            repeat_window: Duration::from_millis(config.session.repeat_window_ms),
            last_transcript: None,
        })
    }

    /// Replace the id source (e.g. [`SequentialIds`](crate::component::SequentialIds)
    /// for reproducible output).
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Replace the template library.
    pub fn with_template_library(mut self, library: TemplateLibrary) -> Self {
        let name = self.flat.component_name().to_string();
        self.templates = TemplateGenerator::new(library, name);
        self
    }

    pub fn components(&self) -> &ComponentList {
        &self.components
    }

    /// Flat code for the current list.
    pub fn code(&self) -> String {
        self.flat.generate(&self.components)
    }

    /// Apply one transcript.
    pub fn process(&mut self, transcript: &str) -> Outcome {
        let transcript = transcript.trim();
        if transcript.is_empty() {
            return Outcome::default();
        }
        if self.is_duplicate_delivery(transcript) {
            log::debug!("session: skipping repeated transcript {transcript:?}");
            return Outcome::default();
        }
        self.last_transcript = Some((transcript.to_string(), Instant::now()));

        let classification = self.classifier.classify(transcript);
        let mut outcome = Outcome::default();

        match classification.action {
            Some(Action::Create) => {
                let id = self.components.allocate_id(self.ids.as_mut());
                let record = self.creator.build(&classification, id.clone());
                log::info!("session: created {} {id}", record.kind().as_str());
                self.components.append(record);
                outcome.change = Some(Change::Created(id));
                outcome.template = Some(self.templates.resolve(transcript));
            }
            Some(Action::Modify) => match self.components.last() {
                None => outcome.advisory = Some(Advisory::NothingToModify),
                Some(last) => match self.modifier.apply(last, transcript) {
                    Some(edited) => {
                        let id = edited.id.clone();
                        self.components.replace_last(edited);
                        log::info!("session: modified {id}");
                        outcome.change = Some(Change::Modified(id));
                    }
                    None => outcome.advisory = Some(Advisory::NothingModified),
                },
            },
            Some(Action::Delete) => match self.components.remove_last() {
                Some(removed) => {
                    log::info!("session: deleted {}", removed.id);
                    outcome.change = Some(Change::Deleted(removed.id));
                }
                None => outcome.advisory = Some(Advisory::NothingToDelete),
            },
            None => {
                outcome.advisory = Some(Advisory::UnrecognizedCommand);
                outcome.template = Some(self.templates.resolve(transcript));
            }
        }

        if let Some(advisory) = outcome.advisory {
            log::warn!("session: {advisory}");
        }
        outcome.classification = Some(classification);
        outcome
    }

    /// Same text as the previous transcript, inside the repeat window.
    fn is_duplicate_delivery(&self, transcript: &str) -> bool {
        match &self.last_transcript {
            Some((last, at)) if self.skip_repeated => {
                last == transcript && at.elapsed() < self.repeat_window
            }
            _ => false,
        }
    }

    /// Remove the record with `id`.  Returns `false` when no record has it.
    pub fn delete_by_id(&mut self, id: &str) -> bool {
        match self.components.remove_by_id(id) {
            Some(_) => {
                log::info!("session: deleted {id}");
                true
            }
            None => {
                log::debug!("session: no component with id {id:?}");
                false
            }
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("components", &self.components)
            .field("skip_repeated", &self.skip_repeated)
            .field("repeat_window", &self.repeat_window)
            .field("last_transcript", &self.last_transcript)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{
        ButtonSize, ButtonVariant, ComponentKind, ComponentProperties, SequentialIds,
    };

    fn session() -> Session {
        Session::from_config(&AppConfig::default())
            .unwrap()
            .with_id_generator(SequentialIds::default())
    }

    #[test]
    fn unrecognized_leaves_state_unchanged() {
        let mut s = session();
        s.process("create a card");
        let before = s.components().clone();

        let outcome = s.process("hello there");
        assert_eq!(outcome.advisory, Some(Advisory::UnrecognizedCommand));
        assert!(outcome.change.is_none());
        assert_eq!(s.components(), &before);
        assert_eq!(outcome.template.unwrap().component_type, "default");
    }

    #[test]
    fn creates_append_in_order_with_unique_ids() {
        let mut s = session();
        s.process("create a button");
        s.process("add an input");
        s.process("make a card");

        let kinds: Vec<_> = s.components().iter().map(|r| r.kind()).collect();
        assert_eq!(
            kinds,
            vec![ComponentKind::Button, ComponentKind::Input, ComponentKind::Card]
        );
        let ids: Vec<_> = s.components().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn create_also_resolves_template() {
        let mut s = session();
        let outcome = s.process("create a real estate listing");
        assert!(matches!(outcome.change, Some(Change::Created(_))));
        let template = outcome.template.unwrap();
        assert_eq!(template.component_type, "realestate");
        assert!(template.code.contains("Find Your Dream Home"));
    }

    #[test]
    fn small_red_button() {
        let mut s = session();
        s.process("create a small red button");
        match &s.components().last().unwrap().properties {
            ComponentProperties::Button(b) => {
                assert_eq!(b.size, ButtonSize::Sm);
                assert_eq!(b.variant, ButtonVariant::Destructive);
            }
            other => panic!("expected button, got {other:?}"),
        }
    }

    #[test]
    fn modify_targets_last_record_only() {
        let mut s = session();
        s.process("create a button");
        s.process("create a submit button");
        let outcome = s.process("change text to Hello");
        assert_eq!(outcome.change, Some(Change::Modified("c2".into())));

        let texts: Vec<_> = s
            .components()
            .iter()
            .map(|r| match &r.properties {
                ComponentProperties::Button(b) => b.text.clone(),
                other => panic!("expected button, got {other:?}"),
            })
            .collect();
        assert_eq!(texts, vec!["Button", "Hello"]);
    }

    #[test]
    fn modify_on_empty_list() {
        let mut s = session();
        let outcome = s.process("change text to Hello");
        assert_eq!(outcome.advisory, Some(Advisory::NothingToModify));
        assert!(s.components().is_empty());
    }

    #[test]
    fn kind_inappropriate_modify_is_advisory() {
        let mut s = session();
        s.process("create a card");
        let before = s.components().clone();
        let outcome = s.process("change placeholder to Search");
        assert_eq!(outcome.advisory, Some(Advisory::NothingModified));
        assert_eq!(s.components(), &before);
    }

    #[test]
    fn unqualified_delete_removes_last() {
        let mut s = session();
        s.process("create a button");
        s.process("create a card");
        let outcome = s.process("delete it");
        assert_eq!(outcome.change, Some(Change::Deleted("c2".into())));
        assert_eq!(s.components().len(), 1);
    }

    #[test]
    fn delete_on_empty_list() {
        let mut s = session();
        let outcome = s.process("remove the last one");
        assert_eq!(outcome.advisory, Some(Advisory::NothingToDelete));
        assert!(s.components().is_empty());
    }

    #[test]
    fn delete_by_id_removes_exactly_that_record() {
        let mut s = session();
        s.process("create a button");
        s.process("create an input");
        s.process("create a card");

        assert!(s.delete_by_id("c2"));
        let ids: Vec<_> = s.components().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c3"]);

        assert!(!s.delete_by_id("missing"));
        assert_eq!(s.components().len(), 2);
    }

    #[test]
    fn repeated_transcript_is_skipped() {
        let mut s = session();
        s.process("create a button");
        let outcome = s.process("  create a button ");
        assert!(outcome.is_skipped());
        assert_eq!(s.components().len(), 1);
    }

    #[test]
    fn repeats_allowed_when_skipping_disabled() {
        let mut config = AppConfig::default();
        config.session.skip_repeated_transcripts = false;
        let mut s = Session::from_config(&config)
            .unwrap()
            .with_id_generator(SequentialIds::default());

        s.process("create a button");
        s.process("create a button");
        assert_eq!(s.components().len(), 2);
    }

    #[test]
    fn repeat_after_window_is_processed_again() {
        let mut config = AppConfig::default();
        config.session.repeat_window_ms = 0;
        let mut s = Session::from_config(&config)
            .unwrap()
            .with_id_generator(SequentialIds::default());

        s.process("create a button");
        s.process("create a card");
        s.process("create an input");
        assert_eq!(s.process("delete it").change, Some(Change::Deleted("c3".into())));
        assert_eq!(s.process("delete it").change, Some(Change::Deleted("c2".into())));
        assert_eq!(s.components().len(), 1);
    }

    #[test]
    fn blank_transcript_is_skipped() {
        let mut s = session();
        assert!(s.process("   ").is_skipped());
    }

    #[test]
    fn code_tracks_list() {
        let mut s = session();
        s.process("create a submit button");
        s.process("change it to red");
        let code = s.code();
        assert!(code.contains("Submit"));
        assert!(code.contains("variant=\"destructive\""));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let mut config = AppConfig::default();
        config.patterns.create = "(".into();
        let err = Session::from_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { category: "create", .. }));
    }
}
