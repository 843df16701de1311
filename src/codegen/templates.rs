//! Canned template library.
//!
//! Two tiers of static snippets, each guarded by a keyword [`MatchRule`]:
//!
//! * **primary** templates (`button`, `card`, `form`, `realestate`): JSX
//!   fragments that the [`TemplateGenerator`](super::TemplateGenerator) wraps
//!   in a component shell together with the template's import lines;
//! * **composite** demos (pricing card, testimonial, hero section, contact
//!   form, dashboard stats): complete modules emitted as-is, consulted only
//!   when no primary rule matched.
//!
//! The JSX bodies live under `templates/` and are embedded at compile time.

const BUTTON_IMPORT: &str = "import { Button } from '@/components/ui/button';";
const INPUT_IMPORT: &str = "import { Input } from '@/components/ui/input';";
const LABEL_IMPORT: &str = "import { Label } from '@/components/ui/label';";

// ---------------------------------------------------------------------------
// MatchRule
// ---------------------------------------------------------------------------

/// Keyword rule over a lowercased transcript.
///
/// Matches when *any* keyword of `any` is present, or when `all` is non-empty
/// and *every* keyword of `all` is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRule {
    pub any: &'static [&'static str],
    pub all: &'static [&'static str],
}

impl MatchRule {
    pub const fn any(keywords: &'static [&'static str]) -> Self {
        Self {
            any: keywords,
            all: &[],
        }
    }

    pub const fn all(keywords: &'static [&'static str]) -> Self {
        Self {
            any: &[],
            all: keywords,
        }
    }

    pub fn matches(&self, lowered: &str) -> bool {
        self.any.iter().any(|k| lowered.contains(k))
            || (!self.all.is_empty() && self.all.iter().all(|k| lowered.contains(k)))
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// A primary template: JSX fragment plus the imports it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryTemplate {
    /// Component-type label reported to consumers (`"button"`, …).
    pub key: &'static str,
    pub rule: MatchRule,
    pub snippet: &'static str,
    pub imports: &'static [&'static str],
}

/// A composite demo: a complete, self-contained module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeTemplate {
    /// Human-readable label reported to consumers (`"Pricing Card"`, …).
    pub label: &'static str,
    pub rule: MatchRule,
    pub module: &'static str,
}

// ---------------------------------------------------------------------------
// TemplateLibrary
// ---------------------------------------------------------------------------

/// Immutable template table, checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLibrary {
    primary: Vec<PrimaryTemplate>,
    composites: Vec<CompositeTemplate>,
    /// Key of the primary template used when nothing matches.
    fallback: &'static str,
}

impl TemplateLibrary {
    /// The built-in button / card / form / real-estate templates and the
    /// five composite demos.
    pub fn builtin() -> Self {
        let primary = vec![
            PrimaryTemplate {
                key: "button",
                rule: MatchRule::any(&["button"]),
                snippet: include_str!("../../templates/button.jsx"),
                imports: &[BUTTON_IMPORT],
            },
            PrimaryTemplate {
                key: "card",
                rule: MatchRule::any(&["card"]),
                snippet: include_str!("../../templates/card.jsx"),
                imports: &[
                    "import { Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle } from '@/components/ui/card';",
                    BUTTON_IMPORT,
                ],
            },
            PrimaryTemplate {
                key: "form",
                rule: MatchRule::any(&["form", "login"]),
                snippet: include_str!("../../templates/form.jsx"),
                imports: &[BUTTON_IMPORT, INPUT_IMPORT, LABEL_IMPORT],
            },
            PrimaryTemplate {
                key: "realestate",
                rule: MatchRule::any(&["real estate", "property", "housing"]),
                snippet: include_str!("../../templates/realestate.jsx"),
                imports: &[
                    BUTTON_IMPORT,
                    "import { Card, CardContent, CardFooter } from '@/components/ui/card';",
                    LABEL_IMPORT,
                    "import { Select, SelectContent, SelectItem, SelectTrigger, SelectValue } from '@/components/ui/select';",
                ],
            },
        ];

        let composites = vec![
            CompositeTemplate {
                label: "Pricing Card",
                rule: MatchRule::any(&["pricing", "price"]),
                module: include_str!("../../templates/composites/pricing_card.jsx"),
            },
            CompositeTemplate {
                label: "Testimonial",
                rule: MatchRule::any(&["testimonial"]),
                module: include_str!("../../templates/composites/testimonial.jsx"),
            },
            CompositeTemplate {
                label: "Hero Section",
                rule: MatchRule {
                    any: &["hero"],
                    all: &["header", "section"],
                },
                module: include_str!("../../templates/composites/hero_section.jsx"),
            },
            CompositeTemplate {
                label: "Contact Form",
                rule: MatchRule::all(&["contact", "form"]),
                module: include_str!("../../templates/composites/contact_form.jsx"),
            },
            CompositeTemplate {
                label: "Dashboard Stats",
                rule: MatchRule::any(&["dashboard", "stats"]),
                module: include_str!("../../templates/composites/dashboard_stats.jsx"),
            },
        ];

        Self {
            primary,
            composites,
            fallback: "button",
        }
    }

    /// First primary template whose rule matches.
    pub fn match_primary(&self, lowered: &str) -> Option<&PrimaryTemplate> {
        self.primary.iter().find(|t| t.rule.matches(lowered))
    }

    /// First composite whose rule matches.
    pub fn match_composite(&self, lowered: &str) -> Option<&CompositeTemplate> {
        self.composites.iter().find(|t| t.rule.matches(lowered))
    }

    /// Primary template by key.
    pub fn primary(&self, key: &str) -> Option<&PrimaryTemplate> {
        self.primary.iter().find(|t| t.key == key)
    }

    /// Composite by label, case-insensitively.
    pub fn composite(&self, label: &str) -> Option<&CompositeTemplate> {
        self.composites
            .iter()
            .find(|t| t.label.eq_ignore_ascii_case(label))
    }

    /// Template used when no rule matches.
    pub fn fallback(&self) -> Option<&PrimaryTemplate> {
        self.primary(self.fallback)
    }

    pub fn composites(&self) -> &[CompositeTemplate] {
        &self.composites
    }
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}
