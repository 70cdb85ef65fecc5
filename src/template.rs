//! Template-valued configuration fields.
//!
//! A briefing item field in the config is either a plain literal or a
//! Jinja-style template expression to be rendered per request. Classification
//! happens once at deserialization time; rendering happens on every request.

use anyhow::{Context, Result};
use minijinja::Environment;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A configured value: a literal passed through as-is, or a deferred
/// template expression resolved at request time.
#[derive(Debug, Clone)]
pub enum ItemValue {
    Literal(Value),
    Template(String),
}

impl ItemValue {
    /// Resolve to a concrete JSON value.
    ///
    /// Literals keep their original representation (non-string literals stay
    /// non-string). Templates always render to a plain string with no type
    /// coercion of the result.
    pub fn resolve(&self, env: &Environment) -> Result<Value> {
        match self {
            ItemValue::Literal(value) => Ok(value.clone()),
            ItemValue::Template(source) => {
                let rendered = env
                    .render_str(source, minijinja::context! {})
                    .context("failed to render briefing item template")?;
                Ok(Value::String(rendered))
            }
        }
    }
}

impl<'de> Deserialize<'de> for ItemValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) if is_template(&s) => ItemValue::Template(s),
            other => ItemValue::Literal(other),
        })
    }
}

/// A string counts as a template when it carries Jinja expression or
/// statement markers.
fn is_template(s: &str) -> bool {
    s.contains("{{") || s.contains("{%")
}
