use std::path::PathBuf;

/// Library-level structured errors for edgar.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum EdgarError {
	#[error("No source document found, tried: {}", format_candidates(.candidates))]
	SourceNotFound { candidates: Vec<PathBuf> },

	#[error("Failed to read source document: {path}")]
	SourceReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse YAML source document: {path}")]
	YamlParseError {
		path: PathBuf,
		#[source]
		source: serde_yaml::Error,
	},

	#[error("Failed to parse TOML source document: {path}")]
	TomlParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("{option} is not a valid option")]
	InvalidKeyword { option: String },

	#[error("Malformed template {template:?}: {reason}")]
	MalformedTemplate { template: String, reason: String },

	#[error("Invalid `{directive}` directive: {reason}")]
	InvalidDirective { directive: String, reason: String },

	#[error("Invalid loop in `with_items`: {reason}")]
	InvalidLoop { reason: String },

	#[error("Failed to write output file: {path}")]
	OutputWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

fn format_candidates(candidates: &[PathBuf]) -> String {
	candidates
		.iter()
		.map(|p| p.display().to_string())
		.collect::<Vec<_>>()
		.join(", ")
}

/// Result type alias using EdgarError.
pub type Result<T> = std::result::Result<T, EdgarError>;
