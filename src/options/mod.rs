//! OpenSSH keyword table and option line compilation.
//!
//! This module handles:
//! - Case-insensitive keyword lookup and canonical spelling
//! - Dropping deprecated and ignored keywords with a warning
//! - Lowering the `ViaProxy` macro to a `ProxyCommand`

pub mod table;

use crate::diagnostics::{DiagnosticSink, Warning};
use crate::document::Value;
use crate::error::{EdgarError, Result};
use crate::template::{Item, format_value};

pub use table::{OPTIONS, OptionEntry, lookup};

/// Keyword emitted in place of the `ViaProxy` macro.
pub const PROXY_COMMAND: &str = "ProxyCommand";

/// Command the `ViaProxy` value is appended to.
pub const JUMP_COMMAND: &str = "ssh -W %h:%p";

/// What the compiler does with a recognized keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
	/// Emitted under its canonical spelling.
	Active,

	/// Obsolete; dropped with a warning.
	Deprecated,

	/// Superseded or unsupported; dropped with a warning.
	Ignored,

	/// `ViaProxy`, lowered to a `ProxyCommand` jump.
	Macro,
}

/// Map an option name to its canonical keyword.
pub fn canonicalize(name: &str) -> Result<(&'static str, Disposition)> {
	lookup(name)
		.map(|entry| (entry.keyword, entry.disposition))
		.ok_or_else(|| EdgarError::InvalidKeyword {
			option: name.to_string(),
		})
}

/// Compile one `name: value` pair into a config line.
///
/// Returns `Ok(None)` for deprecated and ignored keywords after reporting
/// them to `sink`.
pub fn compile_option(
	name: &str,
	value: &Value,
	item: Item<'_>,
	sink: &mut dyn DiagnosticSink,
) -> Result<Option<String>> {
	let (keyword, disposition) = canonicalize(name)?;

	let warning = match disposition {
		Disposition::Active => {
			let value = format_value(value, item)?;
			return Ok(Some(format!("{keyword} {value}")));
		}
		Disposition::Macro => {
			let value = format_value(value, item)?;
			return Ok(Some(format!("{PROXY_COMMAND} {JUMP_COMMAND} {value}")));
		}
		Disposition::Deprecated => Warning::Deprecated {
			option: keyword.to_string(),
		},
		Disposition::Ignored => Warning::Ignored {
			option: keyword.to_string(),
		},
	};

	tracing::warn!(option = name, "{warning}");
	sink.warn(warning);
	Ok(None)
}
