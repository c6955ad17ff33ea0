use crate::config::types::{LoadedSource, SourceFormat};
use crate::document::{Mapping, Value};
use crate::error::{EdgarError, Result};
use std::path::Path;

/// Parse a source file from the given path.
pub fn parse_source_file(path: &Path) -> Result<LoadedSource> {
	let content = std::fs::read_to_string(path).map_err(|source| EdgarError::SourceReadError {
		path: path.to_path_buf(),
		source,
	})?;

	let document = parse_source_str(&content, SourceFormat::from_path(path), path)?;
	Ok(LoadedSource {
		document,
		path: path.to_path_buf(),
	})
}

/// Parse a source document from a string (useful for testing).
///
/// An empty YAML document is an empty mapping, which compiles to nothing
/// but a bare `Host *` block.
pub fn parse_source_str(content: &str, format: SourceFormat, path: &Path) -> Result<Value> {
	if content.trim().is_empty() {
		return Ok(Value::Mapping(Mapping::new()));
	}

	let document = match format {
		SourceFormat::Yaml => {
			serde_yaml::from_str::<Value>(content).map_err(|source| EdgarError::YamlParseError {
				path: path.to_path_buf(),
				source,
			})?
		}
		SourceFormat::Toml => {
			toml::from_str::<Value>(content).map_err(|source| EdgarError::TomlParseError {
				path: path.to_path_buf(),
				source,
			})?
		}
	};

	Ok(match document {
		Value::Null => Value::Mapping(Mapping::new()),
		other => other,
	})
}
