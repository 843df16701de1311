//! Flat generator: serialises the component list into one JSX module.

use std::borrow::Cow;

use crate::component::{ComponentList, ComponentProperties, ComponentRecord};
use crate::config::CodegenConfig;

const PREAMBLE: &str = "\
import React from 'react';
import { Button } from '@/components/ui/button';
import { Input } from '@/components/ui/input';
import { Label } from '@/components/ui/label';
import { Card, CardHeader, CardTitle, CardDescription, CardContent, CardFooter } from '@/components/ui/card';
";

/// Renders a [`ComponentList`] in list order.
#[derive(Debug, Clone)]
pub struct FlatGenerator {
    component_name: String,
    escape_values: bool,
}

impl FlatGenerator {
    pub fn new(component_name: impl Into<String>, escape_values: bool) -> Self {
        Self {
            component_name: component_name.into(),
            escape_values,
        }
    }

    pub fn from_config(config: &CodegenConfig) -> Self {
        Self::new(config.component_name.clone(), config.escape_values)
    }

    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    /// Generate the module source for `components`.
    ///
    /// An empty list still produces a valid module with an empty wrapper.
    pub fn generate(&self, components: &ComponentList) -> String {
        let name = &self.component_name;
        let mut code = String::from(PREAMBLE);
        code.push('\n');
        code.push_str(&format!("const {name} = () => {{\n"));
        code.push_str("  return (\n");
        code.push_str("    <div className=\"space-y-4\">\n");

        for record in components {
            self.render(&mut code, record);
        }

        code.push_str("    </div>\n");
        code.push_str("  );\n");
        code.push_str("};\n\n");
        code.push_str(&format!("export default {name};"));
        code
    }

    fn render(&self, code: &mut String, record: &ComponentRecord) {
        match &record.properties {
            ComponentProperties::Button(button) => {
                code.push_str(&format!(
                    "      <Button variant=\"{}\" size=\"{}\">{}</Button>\n",
                    button.variant.as_str(),
                    button.size.as_str(),
                    self.value(&button.text),
                ));
            }
            ComponentProperties::Input(input) => {
                let id = self.value(&record.id);
                code.push_str("      <div className=\"space-y-2\">\n");
                code.push_str(&format!(
                    "        <Label htmlFor=\"{id}\">{}</Label>\n",
                    self.value(&input.label),
                ));
                code.push_str(&format!(
                    "        <Input id=\"{id}\" type=\"{}\" placeholder=\"{}\" />\n",
                    input.input_type.as_str(),
                    self.value(&input.placeholder),
                ));
                code.push_str("      </div>\n");
            }
            ComponentProperties::Card(card) => {
                let description = card.description.as_deref().unwrap_or_default();
                let content = card.content.as_deref().unwrap_or_default();
                code.push_str("      <Card>\n");
                code.push_str("        <CardHeader>\n");
                code.push_str(&format!(
                    "          <CardTitle>{}</CardTitle>\n",
                    self.value(&card.title)
                ));
                code.push_str(&format!(
                    "          <CardDescription>{}</CardDescription>\n",
                    self.value(description),
                ));
                code.push_str("        </CardHeader>\n");
                code.push_str("        <CardContent>\n");
                code.push_str(&format!("          <p>{}</p>\n", self.value(content)));
                code.push_str("        </CardContent>\n");
                code.push_str("      </Card>\n");
            }
        }
    }

    fn value<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.escape_values {
            escape_jsx(raw)
        } else {
            Cow::Borrowed(raw)
        }
    }
}

impl Default for FlatGenerator {
    fn default() -> Self {
        Self::from_config(&CodegenConfig::default())
    }
}

/// Escape characters that would break JSX text or a double-quoted attribute.
pub fn escape_jsx(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '{', '}']) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len() + 8);
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
