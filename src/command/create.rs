//! Create handler: builds a new component record from a classified
//! transcript.
//!
//! Kind selection is substring containment in fixed priority
//! (`button` → `input` → `card`); anything else yields a default button.
//! Explicit variant/size keywords always win over the preset defaults.

use crate::component::{
    ButtonProps, ButtonSize, ButtonVariant, CardProps, ComponentKind, ComponentProperties,
    ComponentRecord, InputProps, InputType, StylePreset, StylePresets,
};

use super::classifier::Classification;

/// Keyword → variant rules, applied in order (later rules win).
const VARIANT_KEYWORDS: &[(&str, ButtonVariant)] = &[
    ("blue", ButtonVariant::Default),
    ("red", ButtonVariant::Destructive),
    ("destructive", ButtonVariant::Destructive),
    ("outline", ButtonVariant::Outline),
    ("ghost", ButtonVariant::Ghost),
    ("link", ButtonVariant::Link),
    ("secondary", ButtonVariant::Secondary),
];

/// Keyword → size rules, applied in order (later rules win).
const SIZE_KEYWORDS: &[(&str, ButtonSize)] = &[("small", ButtonSize::Sm), ("large", ButtonSize::Lg)];

/// Builds new component records using an injected preset table.
#[derive(Debug, Clone, Default)]
pub struct CreateHandler {
    presets: StylePresets,
}

impl CreateHandler {
    pub fn new(presets: StylePresets) -> Self {
        Self { presets }
    }

    /// Build the record a create command describes, under the given `id`.
    ///
    /// Never fails: an unspecific command still produces a button.
    pub fn build(&self, classification: &Classification, id: String) -> ComponentRecord {
        let text = classification.lowered.as_str();
        let preset = self.presets.get(classification.preset);

        let properties = if text.contains("button") {
            ComponentProperties::Button(preset_button(text, preset))
        } else if text.contains("input") {
            ComponentProperties::Input(preset_input(text, preset))
        } else if text.contains("card") {
            ComponentProperties::Card(CardProps {
                class_name: preset.class_for(ComponentKind::Card).into(),
                ..CardProps::default()
            })
        } else {
            let mut button = ButtonProps::default();
            apply_button_keywords(text, &mut button);
            ComponentProperties::Button(button)
        };

        ComponentRecord::new(id, properties)
    }
}

fn preset_button(text: &str, preset: &StylePreset) -> ButtonProps {
    let mut button = ButtonProps {
        text: if text.contains("submit") { "Submit" } else { "Button" }.into(),
        variant: preset.button.variant,
        size: ButtonSize::Default,
        class_name: preset.button.class_name.clone(),
    };
    apply_button_keywords(text, &mut button);
    button
}

fn preset_input(text: &str, preset: &StylePreset) -> InputProps {
    let (input_type, placeholder, label) = if text.contains("email") {
        (InputType::Email, "Enter email", "Email")
    } else if text.contains("password") {
        (InputType::Password, "Enter password", "Password")
    } else {
        (InputType::Text, "Enter text", "Input")
    };

    InputProps {
        placeholder: placeholder.into(),
        input_type,
        label: label.into(),
        class_name: preset.class_for(ComponentKind::Input).into(),
    }
}

/// Apply explicit variant/size keywords found in `text`.
fn apply_button_keywords(text: &str, button: &mut ButtonProps) {
    for (keyword, variant) in VARIANT_KEYWORDS {
        if text.contains(keyword) {
            button.variant = *variant;
        }
    }
    for (keyword, size) in SIZE_KEYWORDS {
        if text.contains(keyword) {
            button.size = *size;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandClassifier, CommandPatterns};
    use crate::component::PresetName;
    use crate::config::PatternConfig;

    fn create(transcript: &str) -> ComponentRecord {
        let patterns = CommandPatterns::compile(&PatternConfig::default()).unwrap();
        let classification = CommandClassifier::new(patterns, PresetName::Modern).classify(transcript);
        CreateHandler::default().build(&classification, "id1".into())
    }

    fn button(record: ComponentRecord) -> ButtonProps {
        match record.properties {
            ComponentProperties::Button(b) => b,
            other => panic!("expected button, got {other:?}"),
        }
    }

    fn input(record: ComponentRecord) -> InputProps {
        match record.properties {
            ComponentProperties::Input(i) => i,
            other => panic!("expected input, got {other:?}"),
        }
    }

    #[test]
    fn small_red_button() {
        let b = button(create("create a small red button"));
        assert_eq!(b.size, ButtonSize::Sm);
        assert_eq!(b.variant, ButtonVariant::Destructive);
        assert_eq!(b.text, "Button");
    }

    #[test]
    fn plain_button_keeps_preset_variant_and_class() {
        let presets = StylePresets::default();
        let b = button(create("create a minimal button"));
        assert_eq!(b.variant, ButtonVariant::Outline);
        assert_eq!(b.class_name, presets.minimal.button.class_name);
        assert_eq!(b.size, ButtonSize::Default);
    }

    #[test]
    fn explicit_variant_beats_preset() {
        let b = button(create("create a glassmorphism ghost button"));
        assert_eq!(b.variant, ButtonVariant::Ghost);
    }

    #[test]
    fn submit_button_text() {
        let b = button(create("add a large submit button"));
        assert_eq!(b.text, "Submit");
        assert_eq!(b.size, ButtonSize::Lg);
    }

    #[test]
    fn button_keyword_wins_over_input_and_card() {
        let record = create("create a button inside a card next to an input");
        assert_eq!(record.kind(), ComponentKind::Button);
    }

    #[test]
    fn email_input_sets_type_placeholder_and_label_together() {
        let i = input(create("add an email input"));
        assert_eq!(i.input_type, InputType::Email);
        assert_eq!(i.placeholder, "Enter email");
        assert_eq!(i.label, "Email");
        assert_eq!(i.class_name, StylePresets::default().modern.input.class_name);
    }

    #[test]
    fn password_input() {
        let i = input(create("make a password input"));
        assert_eq!(i.input_type, InputType::Password);
        assert_eq!(i.placeholder, "Enter password");
        assert_eq!(i.label, "Password");
    }

    #[test]
    fn plain_input_defaults() {
        let i = input(create("generate an input"));
        assert_eq!(i.input_type, InputType::Text);
        assert_eq!(i.placeholder, "Enter text");
        assert_eq!(i.label, "Input");
    }

    #[test]
    fn card_uses_placeholder_text_and_preset_class() {
        let record = create("create a minimal card");
        match record.properties {
            ComponentProperties::Card(card) => {
                assert_eq!(card.title, "Card Title");
                assert_eq!(card.description.as_deref(), Some("Card Description"));
                assert_eq!(card.content.as_deref(), Some("Card Content"));
                assert_eq!(card.class_name, "border shadow-sm hover:shadow");
            }
            other => panic!("expected card, got {other:?}"),
        }
    }

    #[test]
    fn unspecific_create_falls_back_to_default_button() {
        let b = button(create("make something outline and large"));
        assert_eq!(b.variant, ButtonVariant::Outline);
        assert_eq!(b.size, ButtonSize::Lg);
        assert_eq!(b.class_name, "");
        assert_eq!(b.text, "Button");
    }
}
