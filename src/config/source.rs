use crate::error::{EdgarError, Result};
use std::path::{Path, PathBuf};

/// Default source locations, relative to the home directory, in lookup order.
pub const DEFAULT_SOURCES: &[&str] = &[".config/edgar.yml", ".config/edgar.toml", ".edgarrc"];

/// Candidate source paths in lookup order.
///
/// An explicit path comes first; a leading `~/` in it is expanded.
pub fn source_candidates(explicit: Option<&Path>) -> Result<Vec<PathBuf>> {
	let home_dir = dirs::home_dir().ok_or(EdgarError::HomeDirectoryNotFound)?;
	let mut candidates = Vec::new();

	if let Some(path) = explicit {
		candidates.push(expand_home(path, &home_dir));
	}
	candidates.extend(DEFAULT_SOURCES.iter().map(|rel| home_dir.join(rel)));

	Ok(candidates)
}

/// Find the first existing source document.
pub fn discover_source(explicit: Option<&Path>) -> Result<PathBuf> {
	let candidates = source_candidates(explicit)?;
	first_existing(candidates)
}

fn first_existing(candidates: Vec<PathBuf>) -> Result<PathBuf> {
	if let Some(path) = candidates.iter().find(|path| path.is_file()).cloned() {
		tracing::debug!(path = %path.display(), "using source document");
		return Ok(path);
	}
	Err(EdgarError::SourceNotFound { candidates })
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: &Path, home_dir: &Path) -> PathBuf {
	match path.strip_prefix("~") {
		Ok(rest) => home_dir.join(rest),
		Err(_) => path.to_path_buf(),
	}
}
