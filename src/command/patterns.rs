//! Compiled command pattern table.
//!
//! Each semantic category of [`PatternConfig`] becomes one case-insensitive
//! [`Regex`].  Matching is plain leftmost-first search: no scoring, no word
//! boundaries, so `"credit"` still contains `"red"`.

use regex::Regex;

use crate::config::{ConfigError, PatternConfig};

/// Semantic categories understood by the classifier.
///
/// Declaration order matches [`Category::ALL`]; the discriminant doubles as
/// the index into the compiled table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Create,
    Modify,
    Delete,
    Style,
    Color,
    Size,
    Position,
    State,
    Animation,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Create,
        Category::Modify,
        Category::Delete,
        Category::Style,
        Category::Color,
        Category::Size,
        Category::Position,
        Category::State,
        Category::Animation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Create => "create",
            Category::Modify => "modify",
            Category::Delete => "delete",
            Category::Style => "style",
            Category::Color => "color",
            Category::Size => "size",
            Category::Position => "position",
            Category::State => "state",
            Category::Animation => "animation",
        }
    }

    fn source<'a>(&self, config: &'a PatternConfig) -> &'a str {
        match self {
            Category::Create => &config.create,
            Category::Modify => &config.modify,
            Category::Delete => &config.delete,
            Category::Style => &config.style,
            Category::Color => &config.color,
            Category::Size => &config.size,
            Category::Position => &config.position,
            Category::State => &config.state,
            Category::Animation => &config.animation,
        }
    }
}

/// Immutable, compiled command pattern table.
#[derive(Debug, Clone)]
pub struct CommandPatterns {
    regexes: Vec<Regex>,
}

impl CommandPatterns {
    /// Compile every category of `config` case-insensitively.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidPattern`] naming the first category whose source
    /// does not compile.
    pub fn compile(config: &PatternConfig) -> Result<Self, ConfigError> {
        let regexes = Category::ALL
            .iter()
            .map(|category| {
                Regex::new(&format!("(?i){}", category.source(config))).map_err(|source| {
                    ConfigError::InvalidPattern {
                        category: category.as_str(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { regexes })
    }

    fn regex(&self, category: Category) -> &Regex {
        &self.regexes[category as usize]
    }

    /// Whether `text` matches `category` anywhere.
    pub fn is_match(&self, category: Category, text: &str) -> bool {
        self.regex(category).is_match(text)
    }

    /// Leftmost match of `category` in `text`, lowercased.
    pub fn first_match(&self, category: Category, text: &str) -> Option<String> {
        self.regex(category)
            .find(text)
            .map(|m| m.as_str().to_lowercase())
    }
}
