//! Modify handler: edits the last component of the list.
//!
//! Free-text fields are addressed with `"<field> to <value>"` anchors; the
//! value is captured from the original-case transcript up to the next quote
//! or the end of the phrase.  Enumerated fields react to plain keywords.
//! Which rules apply depends on the record's kind; rules meant for another
//! kind are ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::component::{
    ButtonProps, ButtonSize, ButtonVariant, CardProps, ComponentProperties, ComponentRecord,
    InputProps, InputType,
};

/// Free-text fields reachable through a `"<field> to <value>"` anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Text,
    Placeholder,
    Label,
    Title,
    Description,
    Content,
}

impl Field {
    const ALL: [Field; 6] = [
        Field::Text,
        Field::Placeholder,
        Field::Label,
        Field::Title,
        Field::Description,
        Field::Content,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Field::Text => "text",
            Field::Placeholder => "placeholder",
            Field::Label => "label",
            Field::Title => "title",
            Field::Description => "description",
            Field::Content => "content",
        }
    }
}

/// Keyword → variant rules for buttons, applied in order (later rules win).
const VARIANT_KEYWORDS: &[(&str, ButtonVariant)] = &[
    ("blue", ButtonVariant::Default),
    ("primary", ButtonVariant::Default),
    ("red", ButtonVariant::Destructive),
    ("destructive", ButtonVariant::Destructive),
    ("outline", ButtonVariant::Outline),
    ("ghost", ButtonVariant::Ghost),
    ("link", ButtonVariant::Link),
    ("secondary", ButtonVariant::Secondary),
];

const SIZE_KEYWORDS: &[(&str, ButtonSize)] = &[
    ("small", ButtonSize::Sm),
    ("large", ButtonSize::Lg),
    ("default size", ButtonSize::Default),
];

const INPUT_TYPE_KEYWORDS: &[(&str, InputType)] = &[
    ("email", InputType::Email),
    ("password", InputType::Password),
    ("text", InputType::Text),
];

/// `"<field> to <value>"` anchors, indexed in `Field::ALL` order.
static ANCHORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    Field::ALL
        .iter()
        .map(|field| {
            Regex::new(&format!(r#"(?i){} to\s+["']?([^"']+)["']?"#, field.as_str())).unwrap()
        })
        .collect()
});

/// Applies modification phrases to a component record.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifyHandler;

impl ModifyHandler {
    pub fn new() -> Self {
        Self
    }

    /// Return an edited copy of `record`, or `None` when the transcript
    /// changes nothing that applies to this record's kind.
    pub fn apply(&self, record: &ComponentRecord, transcript: &str) -> Option<ComponentRecord> {
        let lowered = transcript.to_lowercase();
        let mut edited = record.clone();

        let changed = match &mut edited.properties {
            ComponentProperties::Button(button) => self.modify_button(button, transcript, &lowered),
            ComponentProperties::Input(input) => self.modify_input(input, transcript, &lowered),
            ComponentProperties::Card(card) => self.modify_card(card, transcript, &lowered),
        };

        changed.then_some(edited)
    }

    fn modify_button(&self, button: &mut ButtonProps, raw: &str, lowered: &str) -> bool {
        let mut changed = false;

        if let Some(text) = self.capture(Field::Text, raw, lowered) {
            button.text = text;
            changed = true;
        }
        for (keyword, variant) in VARIANT_KEYWORDS {
            if lowered.contains(keyword) {
                button.variant = *variant;
                changed = true;
            }
        }
        for (keyword, size) in SIZE_KEYWORDS {
            if lowered.contains(keyword) {
                button.size = *size;
                changed = true;
            }
        }

        changed
    }

    fn modify_input(&self, input: &mut InputProps, raw: &str, lowered: &str) -> bool {
        let mut changed = false;

        if let Some(placeholder) = self.capture(Field::Placeholder, raw, lowered) {
            input.placeholder = placeholder;
            changed = true;
        }
        if let Some(label) = self.capture(Field::Label, raw, lowered) {
            input.label = label;
            changed = true;
        }
        if lowered.contains("type to") {
            for (keyword, input_type) in INPUT_TYPE_KEYWORDS {
                if lowered.contains(keyword) {
                    input.input_type = *input_type;
                    changed = true;
                }
            }
        }

        changed
    }

    fn modify_card(&self, card: &mut CardProps, raw: &str, lowered: &str) -> bool {
        let mut changed = false;

        if let Some(title) = self.capture(Field::Title, raw, lowered) {
            card.title = title;
            changed = true;
        }
        if let Some(description) = self.capture(Field::Description, raw, lowered) {
            card.description = Some(description);
            changed = true;
        }
        if let Some(content) = self.capture(Field::Content, raw, lowered) {
            card.content = Some(content);
            changed = true;
        }

        changed
    }

    /// Value following `"<field> to"`, with surrounding quotes and trailing
    /// whitespace removed.
    fn capture(&self, field: Field, raw: &str, lowered: &str) -> Option<String> {
        if !lowered.contains(&format!("{} to", field.as_str())) {
            return None;
        }
        let value = ANCHORS[field as usize]
            .captures(raw)?
            .get(1)?
            .as_str()
            .trim_end();
        (!value.is_empty()).then(|| value.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> ComponentRecord {
        ComponentRecord::new("b1", ComponentProperties::Button(ButtonProps::default()))
    }

    fn input() -> ComponentRecord {
        ComponentRecord::new("i1", ComponentProperties::Input(InputProps::default()))
    }

    fn card() -> ComponentRecord {
        ComponentRecord::new("c1", ComponentProperties::Card(CardProps::default()))
    }

    fn as_button(record: &ComponentRecord) -> &ButtonProps {
        match &record.properties {
            ComponentProperties::Button(b) => b,
            other => panic!("expected button, got {other:?}"),
        }
    }

    #[test]
    fn change_text_keeps_original_case() {
        let edited = ModifyHandler::new()
            .apply(&button(), "change text to Hello")
            .expect("changed");
        assert_eq!(as_button(&edited).text, "Hello");
        assert_eq!(edited.id, "b1");
    }

    #[test]
    fn anchor_matches_in_any_case() {
        let edited = ModifyHandler::new()
            .apply(&button(), "Change TEXT To Hello")
            .expect("changed");
        assert_eq!(as_button(&edited).text, "Hello");
    }

    #[test]
    fn quoted_value_is_unwrapped() {
        let edited = ModifyHandler::new()
            .apply(&button(), r#"set the text to "Sign up now""#)
            .expect("changed");
        assert_eq!(as_button(&edited).text, "Sign up now");
    }

    #[test]
    fn several_button_edits_in_one_command() {
        let edited = ModifyHandler::new()
            .apply(&button(), "make it outline and large")
            .expect("changed");
        let b = as_button(&edited);
        assert_eq!(b.variant, ButtonVariant::Outline);
        assert_eq!(b.size, ButtonSize::Lg);
    }

    #[test]
    fn default_size_resets_size() {
        let mut start = button();
        if let ComponentProperties::Button(b) = &mut start.properties {
            b.size = ButtonSize::Lg;
        }
        let edited = ModifyHandler::new()
            .apply(&start, "change to default size")
            .expect("changed");
        assert_eq!(as_button(&edited).size, ButtonSize::Default);
    }

    #[test]
    fn primary_resets_variant() {
        let mut start = button();
        if let ComponentProperties::Button(b) = &mut start.properties {
            b.variant = ButtonVariant::Ghost;
        }
        let edited = ModifyHandler::new()
            .apply(&start, "update it to primary")
            .expect("changed");
        assert_eq!(as_button(&edited).variant, ButtonVariant::Default);
    }

    #[test]
    fn input_placeholder_label_and_type() {
        let edited = ModifyHandler::new()
            .apply(&input(), "change placeholder to you@example.com")
            .expect("changed");
        match &edited.properties {
            ComponentProperties::Input(i) => assert_eq!(i.placeholder, "you@example.com"),
            other => panic!("expected input, got {other:?}"),
        }

        let edited = ModifyHandler::new()
            .apply(&input(), "set type to password")
            .expect("changed");
        match &edited.properties {
            ComponentProperties::Input(i) => assert_eq!(i.input_type, InputType::Password),
            other => panic!("expected input, got {other:?}"),
        }

        let edited = ModifyHandler::new()
            .apply(&input(), "change label to Full Name")
            .expect("changed");
        match &edited.properties {
            ComponentProperties::Input(i) => assert_eq!(i.label, "Full Name"),
            other => panic!("expected input, got {other:?}"),
        }
    }

    #[test]
    fn input_type_keywords_need_type_anchor() {
        assert!(ModifyHandler::new().apply(&input(), "change it to password").is_none());
    }

    #[test]
    fn card_fields() {
        let edited = ModifyHandler::new()
            .apply(&card(), "change title to Pricing")
            .expect("changed");
        match &edited.properties {
            ComponentProperties::Card(c) => {
                assert_eq!(c.title, "Pricing");
                assert_eq!(c.description.as_deref(), Some("Card Description"));
            }
            other => panic!("expected card, got {other:?}"),
        }

        let edited = ModifyHandler::new()
            .apply(&card(), "update content to Hello world")
            .expect("changed");
        match &edited.properties {
            ComponentProperties::Card(c) => assert_eq!(c.content.as_deref(), Some("Hello world")),
            other => panic!("expected card, got {other:?}"),
        }
    }

    #[test]
    fn wrong_kind_phrase_changes_nothing() {
        let handler = ModifyHandler::new();
        assert!(handler.apply(&card(), "change text to Hello").is_none());
        assert!(handler.apply(&button(), "change placeholder to Search").is_none());
        assert!(handler.apply(&input(), "change title to Welcome").is_none());
    }

    #[test]
    fn original_record_is_untouched() {
        let original = button();
        let _ = ModifyHandler::new().apply(&original, "change text to Other");
        assert_eq!(as_button(&original).text, "Button");
    }
}
