//! JSX code generation.
//!
//! Two generators that never share output:
//! * [`FlatGenerator`]: renders the current component list.
//! * [`TemplateGenerator`]: maps a transcript to a canned template from the
//!   [`TemplateLibrary`].
//!
//! # Quick start
//!
//! ```rust
//! use voice_to_ui::codegen::{FlatGenerator, TemplateGenerator};
//! use voice_to_ui::component::{ButtonProps, ComponentList, ComponentProperties, ComponentRecord};
//!
//! let mut list = ComponentList::default();
//! list.append(ComponentRecord::new("a1", ComponentProperties::Button(ButtonProps::default())));
//! let code = FlatGenerator::default().generate(&list);
//! assert!(code.contains("<Button variant=\"default\" size=\"default\">Button</Button>"));
//!
//! let template = TemplateGenerator::default().resolve("build a login form");
//! assert_eq!(template.component_type, "form");
//! ```

pub mod flat;
pub mod template;
pub mod templates;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use flat::{escape_jsx, FlatGenerator};
pub use template::{TemplateGenerator, TemplateOutput, DEFAULT_COMPONENT_TYPE};
pub use templates::{CompositeTemplate, MatchRule, PrimaryTemplate, TemplateLibrary};
