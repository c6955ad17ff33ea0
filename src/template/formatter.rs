use crate::document::Value;
use crate::error::Result;
use crate::template::resolver::{Item, resolve};

/// Render an option value as it should appear after its keyword.
///
/// Booleans become `yes`/`no` and strings go through item substitution.
/// Every other value is rendered literally with [`Value::canonical_text`],
/// even when its text happens to contain braces.
pub fn format_value(value: &Value, item: Item<'_>) -> Result<String> {
	match value {
		Value::String(template) => resolve(template, item),
		other => Ok(other.canonical_text()),
	}
}
