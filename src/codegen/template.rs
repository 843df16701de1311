//! Template generator: transcript → canned `{code, component_type}` pair.
//!
//! Independent of the component list.  Lookup order:
//!
//! 1. primary templates (`button`, `card`, `form`, `realestate`), wrapped in
//!    the component shell with their import lines;
//! 2. composite demos, emitted verbatim;
//! 3. the button template, reported as component type `"default"`.

use serde::Serialize;

use super::templates::{PrimaryTemplate, TemplateLibrary};

/// Component type reported when no template rule matched.
pub const DEFAULT_COMPONENT_TYPE: &str = "default";

/// Result of a template lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateOutput {
    pub code: String,
    pub component_type: String,
}

/// Resolves transcripts against an injected [`TemplateLibrary`].
#[derive(Debug, Clone)]
pub struct TemplateGenerator {
    library: TemplateLibrary,
    component_name: String,
}

impl TemplateGenerator {
    pub fn new(library: TemplateLibrary, component_name: impl Into<String>) -> Self {
        Self {
            library,
            component_name: component_name.into(),
        }
    }

    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    /// Resolve `transcript` to a template.
    pub fn resolve(&self, transcript: &str) -> TemplateOutput {
        let lowered = transcript.to_lowercase();

        if let Some(template) = self.library.match_primary(&lowered) {
            return TemplateOutput {
                code: self.wrap(template),
                component_type: template.key.to_string(),
            };
        }

        if let Some(composite) = self.library.match_composite(&lowered) {
            return TemplateOutput {
                code: composite.module.to_string(),
                component_type: composite.label.to_string(),
            };
        }

        let code = self
            .library
            .fallback()
            .map(|template| self.wrap(template))
            .unwrap_or_default();
        TemplateOutput {
            code,
            component_type: DEFAULT_COMPONENT_TYPE.to_string(),
        }
    }

    /// Wrap a primary snippet in the component shell.
    fn wrap(&self, template: &PrimaryTemplate) -> String {
        let name = &self.component_name;
        let mut code = String::from("import React from 'react';\n");
        for line in template.imports {
            code.push_str(line);
            code.push('\n');
        }
        code.push('\n');
        code.push_str(&format!("const {name} = () => {{\n"));
        code.push_str("  return (\n");
        code.push_str("    <div className=\"w-full space-y-4\">\n");
        for line in template.snippet.lines() {
            if line.trim().is_empty() {
                code.push('\n');
            } else {
                code.push_str("    ");
                code.push_str(line);
                code.push('\n');
            }
        }
        code.push_str("    </div>\n");
        code.push_str("  );\n");
        code.push_str("};\n\n");
        code.push_str(&format!("export default {name};\n"));
        code
    }
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::new(TemplateLibrary::builtin(), "MyComponent")
    }
}
