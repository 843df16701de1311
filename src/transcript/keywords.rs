//! Design vocabulary detection.
//!
//! [`KeywordDetector`] reports which words of a transcript belong to the
//! built-in design vocabulary (colours, sizes, component names, styles,
//! positions, actions, properties).  Purely informational: the classifier
//! never consults it.

// ---------------------------------------------------------------------------
// Static vocabulary
// ---------------------------------------------------------------------------

struct KeywordCategory {
    name: &'static str,
    words: &'static [&'static str],
}

static CATEGORIES: &[KeywordCategory] = &[
    KeywordCategory {
        name: "colors",
        words: &[
            "red", "blue", "green", "purple", "teal", "dark", "light", "primary", "secondary",
            "accent",
        ],
    },
    KeywordCategory {
        name: "sizes",
        words: &["small", "medium", "large", "tiny", "huge", "bigger", "smaller"],
    },
    KeywordCategory {
        name: "components",
        words: &[
            "button", "card", "form", "input", "navbar", "menu", "modal", "sidebar", "header",
        ],
    },
    KeywordCategory {
        name: "styles",
        words: &[
            "rounded",
            "shadow",
            "gradient",
            "transparent",
            "solid",
            "outlined",
            "bordered",
        ],
    },
    KeywordCategory {
        name: "positions",
        words: &["top", "bottom", "left", "right", "center"],
    },
    KeywordCategory {
        name: "actions",
        words: &[
            "create", "make", "add", "generate", "show", "display", "update", "change",
        ],
    },
    KeywordCategory {
        name: "properties",
        words: &[
            "color",
            "size",
            "width",
            "height",
            "padding",
            "margin",
            "font",
            "background",
        ],
    },
];

// ---------------------------------------------------------------------------
// KeywordDetector
// ---------------------------------------------------------------------------

/// Whole-word matcher over the design vocabulary.
///
/// # Example
/// ```rust
/// use voice_to_ui::transcript::KeywordDetector;
///
/// let detector = KeywordDetector::new();
/// assert_eq!(
///     detector.detect("Create a large, rounded button"),
///     vec!["create", "large", "rounded", "button"],
/// );
/// ```
pub struct KeywordDetector;

impl KeywordDetector {
    pub fn new() -> Self {
        Self
    }

    /// Vocabulary words in `text`, in transcript order (repeats included).
    pub fn detect(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|word| {
                word.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .filter(|word| self.category_of(word).is_some())
            .collect()
    }

    /// Category name of a lowercase `word`, if it is in the vocabulary.
    pub fn category_of(&self, word: &str) -> Option<&'static str> {
        CATEGORIES
            .iter()
            .find(|category| category.words.contains(&word))
            .map(|category| category.name)
    }
}

impl Default for KeywordDetector {
    fn default() -> Self {
        Self::new()
    }
}
