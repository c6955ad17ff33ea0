use crate::document::Value;
use std::path::{Path, PathBuf};

/// Serialization format of a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
	Yaml,
	Toml,
}

impl SourceFormat {
	/// `.toml` files are TOML; everything else, `~/.edgarrc` included, is YAML.
	pub fn from_path(path: &Path) -> Self {
		match path.extension().and_then(|ext| ext.to_str()) {
			Some(ext) if ext.eq_ignore_ascii_case("toml") => SourceFormat::Toml,
			_ => SourceFormat::Yaml,
		}
	}
}

/// A parsed source document with its path for messages and the output header.
#[derive(Debug, Clone)]
pub struct LoadedSource {
	/// The declaration tree.
	pub document: Value,

	/// The path this document was loaded from.
	pub path: PathBuf,
}
