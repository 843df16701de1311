//! Component record types.
//!
//! A [`ComponentRecord`] pairs an opaque id with a [`ComponentProperties`]
//! value.  The component kind is *derived* from the properties variant, so a
//! record whose kind tag disagrees with its property shape cannot be built.
//!
//! Serialised form mirrors the record shape consumers expect:
//!
//! ```json
//! { "id": "a1b2c3d4e", "type": "button",
//!   "properties": { "text": "Button", "variant": "default", "size": "default", "className": "" } }
//! ```

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ComponentKind
// ---------------------------------------------------------------------------

/// The closed set of directly-manipulable component kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Button,
    Input,
    Card,
}

impl ComponentKind {
    /// Lowercase label used in notifications and serialised output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Button => "button",
            ComponentKind::Input => "input",
            ComponentKind::Card => "card",
        }
    }
}

// ---------------------------------------------------------------------------
// Enumerated property values
// ---------------------------------------------------------------------------

/// Visual variant of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Link => "link",
        }
    }
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Default
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Default,
    Sm,
    Lg,
}

impl ButtonSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Default => "default",
            ButtonSize::Sm => "sm",
            ButtonSize::Lg => "lg",
        }
    }
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Default
    }
}

/// HTML input type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Email,
    Password,
    Number,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
            InputType::Number => "number",
        }
    }
}

impl Default for InputType {
    fn default() -> Self {
        Self::Text
    }
}

// ---------------------------------------------------------------------------
// Property records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonProps {
    pub text: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub class_name: String,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            text: "Button".into(),
            variant: ButtonVariant::Default,
            size: ButtonSize::Default,
            class_name: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputProps {
    pub placeholder: String,
    #[serde(rename = "type")]
    pub input_type: InputType,
    pub label: String,
    pub class_name: String,
}

impl Default for InputProps {
    fn default() -> Self {
        Self {
            placeholder: "Enter text".into(),
            input_type: InputType::Text,
            label: "Input".into(),
            class_name: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardProps {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub class_name: String,
}

impl Default for CardProps {
    fn default() -> Self {
        Self {
            title: "Card Title".into(),
            description: Some("Card Description".into()),
            content: Some("Card Content".into()),
            class_name: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// ComponentProperties
// ---------------------------------------------------------------------------

/// Kind-discriminated property set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "properties", rename_all = "lowercase")]
pub enum ComponentProperties {
    Button(ButtonProps),
    Input(InputProps),
    Card(CardProps),
}

impl ComponentProperties {
    pub fn kind(&self) -> ComponentKind {
        match self {
            ComponentProperties::Button(_) => ComponentKind::Button,
            ComponentProperties::Input(_) => ComponentKind::Input,
            ComponentProperties::Card(_) => ComponentKind::Card,
        }
    }
}

// ---------------------------------------------------------------------------
// ComponentRecord
// ---------------------------------------------------------------------------

/// One entry of the component list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Opaque id, stable for the lifetime of the record.
    pub id: String,
    #[serde(flatten)]
    pub properties: ComponentProperties,
}

impl ComponentRecord {
    pub fn new(id: impl Into<String>, properties: ComponentProperties) -> Self {
        Self {
            id: id.into(),
            properties,
        }
    }

    pub fn kind(&self) -> ComponentKind {
        self.properties.kind()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
