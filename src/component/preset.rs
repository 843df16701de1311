//! Style presets applied when a component is created.
//!
//! A preset bundles the default button variant and the Tailwind class
//! strings for each component kind.  The three presets are plain data held
//! in [`StylePresets`]; they are loaded from `settings.toml` (falling back to
//! the built-in values) and never change for the lifetime of a session.

use serde::{Deserialize, Serialize};

use super::types::{ButtonVariant, ComponentKind};

// ---------------------------------------------------------------------------
// PresetName
// ---------------------------------------------------------------------------

/// Names of the available style presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetName {
    Modern,
    Minimal,
    Glassmorphism,
}

impl PresetName {
    /// Lookup order used by [`PresetName::find_in`].
    pub const ALL: [PresetName; 3] = [
        PresetName::Modern,
        PresetName::Minimal,
        PresetName::Glassmorphism,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PresetName::Modern => "modern",
            PresetName::Minimal => "minimal",
            PresetName::Glassmorphism => "glassmorphism",
        }
    }

    /// First preset (in [`PresetName::ALL`] order) whose name occurs in the
    /// already-lowercased `text`.
    ///
    /// ```
    /// use voice_to_ui::component::PresetName;
    ///
    /// assert_eq!(PresetName::find_in("a minimal card"), Some(PresetName::Minimal));
    /// assert_eq!(PresetName::find_in("a card"), None);
    /// ```
    pub fn find_in(text: &str) -> Option<PresetName> {
        Self::ALL.into_iter().find(|p| text.contains(p.as_str()))
    }
}

impl Default for PresetName {
    fn default() -> Self {
        Self::Modern
    }
}

// ---------------------------------------------------------------------------
// Preset records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonPreset {
    pub variant: ButtonVariant,
    pub class_name: String,
}

/// Class-only preset used by inputs and cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassPreset {
    pub class_name: String,
}

/// One named style bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePreset {
    pub button: ButtonPreset,
    pub card: ClassPreset,
    pub input: ClassPreset,
}

impl StylePreset {
    fn new(variant: ButtonVariant, button: &str, card: &str, input: &str) -> Self {
        Self {
            button: ButtonPreset {
                variant,
                class_name: button.into(),
            },
            card: ClassPreset {
                class_name: card.into(),
            },
            input: ClassPreset {
                class_name: input.into(),
            },
        }
    }

    /// Class string this preset assigns to a component of `kind`.
    pub fn class_for(&self, kind: ComponentKind) -> &str {
        match kind {
            ComponentKind::Button => &self.button.class_name,
            ComponentKind::Input => &self.input.class_name,
            ComponentKind::Card => &self.card.class_name,
        }
    }
}

// ---------------------------------------------------------------------------
// StylePresets
// ---------------------------------------------------------------------------

/// The full preset table.
///
/// Deserialised as overrides on top of [`StylePresets::default`]: any preset,
/// sub-table or field missing from a settings file keeps its built-in value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PresetOverrides")]
pub struct StylePresets {
    pub modern: StylePreset,
    pub minimal: StylePreset,
    pub glassmorphism: StylePreset,
}

impl StylePresets {
    pub fn get(&self, name: PresetName) -> &StylePreset {
        match name {
            PresetName::Modern => &self.modern,
            PresetName::Minimal => &self.minimal,
            PresetName::Glassmorphism => &self.glassmorphism,
        }
    }
}

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ButtonOverride {
    variant: Option<ButtonVariant>,
    class_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ClassOverride {
    class_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PresetOverride {
    button: ButtonOverride,
    card: ClassOverride,
    input: ClassOverride,
}

impl PresetOverride {
    fn apply(self, preset: &mut StylePreset) {
        if let Some(variant) = self.button.variant {
            preset.button.variant = variant;
        }
        if let Some(class_name) = self.button.class_name {
            preset.button.class_name = class_name;
        }
        if let Some(class_name) = self.card.class_name {
            preset.card.class_name = class_name;
        }
        if let Some(class_name) = self.input.class_name {
            preset.input.class_name = class_name;
        }
    }
}

/// Partial preset table as written in `settings.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PresetOverrides {
    modern: PresetOverride,
    minimal: PresetOverride,
    glassmorphism: PresetOverride,
}

impl From<PresetOverrides> for StylePresets {
    fn from(overrides: PresetOverrides) -> Self {
        let mut presets = StylePresets::default();
        overrides.modern.apply(&mut presets.modern);
        overrides.minimal.apply(&mut presets.minimal);
        overrides.glassmorphism.apply(&mut presets.glassmorphism);
        presets
    }
}

impl Default for StylePresets {
    fn default() -> Self {
        Self {
            modern: StylePreset::new(
                ButtonVariant::Default,
                "bg-gradient-to-r from-purple-500 to-indigo-500 hover:from-purple-600 hover:to-indigo-600",
                "backdrop-blur-sm bg-white/10 border-none shadow-lg",
                "border-2 focus:ring-2 ring-purple-500/20",
            ),
            minimal: StylePreset::new(
                ButtonVariant::Outline,
                "hover:bg-secondary/80",
                "border shadow-sm hover:shadow",
                "border focus:ring-1 ring-primary/20",
            ),
            glassmorphism: StylePreset::new(
                ButtonVariant::Secondary,
                "backdrop-blur-md bg-white/10 border-white/20",
                "backdrop-blur-lg bg-white/10 border-white/20",
                "backdrop-blur-md bg-white/5 border-white/20",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_in_uses_table_order_not_text_position() {
        // "minimal" appears first in the text, but "modern" is checked first.
        assert_eq!(
            PresetName::find_in("minimal yet modern button"),
            Some(PresetName::Modern)
        );
    }

    #[test]
    fn builtin_button_variants() {
        let presets = StylePresets::default();
        assert_eq!(presets.get(PresetName::Modern).button.variant, ButtonVariant::Default);
        assert_eq!(presets.get(PresetName::Minimal).button.variant, ButtonVariant::Outline);
        assert_eq!(
            presets.get(PresetName::Glassmorphism).button.variant,
            ButtonVariant::Secondary
        );
    }

    #[test]
    fn partial_table_keeps_builtin_fields() {
        let presets: StylePresets = toml::from_str(
            r#"
[minimal.button]
variant = "ghost"
"#,
        )
        .unwrap();

        let builtin = StylePresets::default();
        assert_eq!(presets.minimal.button.variant, ButtonVariant::Ghost);
        assert_eq!(presets.minimal.button.class_name, builtin.minimal.button.class_name);
        assert_eq!(presets.minimal.card, builtin.minimal.card);
        assert_eq!(presets.minimal.input, builtin.minimal.input);
        assert_eq!(presets.modern, builtin.modern);
        assert_eq!(presets.glassmorphism, builtin.glassmorphism);
    }

    #[test]
    fn class_for_selects_by_kind() {
        let presets = StylePresets::default();
        let minimal = presets.get(PresetName::Minimal);
        assert_eq!(minimal.class_for(ComponentKind::Card), "border shadow-sm hover:shadow");
        assert_eq!(
            minimal.class_for(ComponentKind::Input),
            "border focus:ring-1 ring-primary/20"
        );
    }
}
