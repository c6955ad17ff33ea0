//! Writing the compiled OpenSSH config.
//!
//! This module handles:
//! - The generated-file header
//! - Creating `~/.ssh` when needed and writing the config file

use crate::error::{EdgarError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::{Path, PathBuf};

/// Path written by `edgar store` when no output is given.
pub fn default_output_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(EdgarError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(".ssh").join("config"))
}

/// Prepend the generated-file header to a compiled config.
///
/// The result always ends with a single newline.
pub fn render_with_header(body: &str, source: &Path, generated_at: DateTime<Utc>) -> String {
	let mut out = format!(
		"# Generated by edgar on {date}\n\
		 #\n\
		 # Be aware that any manual change to it may be overwritten.\n\
		 # Source: {source}\n\n",
		date = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
		source = source.display(),
	);
	out.push_str(body.trim());
	out.push('\n');
	out
}

/// Write `content` to `path`, creating the parent directory if missing.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
	let to_error = |source| EdgarError::OutputWriteError {
		path: path.to_path_buf(),
		source,
	};

	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
		&& !parent.exists()
	{
		tracing::debug!(dir = %parent.display(), "creating output directory");
		std::fs::create_dir_all(parent).map_err(to_error)?;
	}

	std::fs::write(path, content).map_err(to_error)
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	#[test]
	fn test_render_with_header() {
		let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
		let out = render_with_header("Host *\n  Compression yes", Path::new("/home/u/.edgarrc"), at);
		assert_eq!(
			out,
			"# Generated by edgar on 2024-05-01T12:30:00Z\n\
			 #\n\
			 # Be aware that any manual change to it may be overwritten.\n\
			 # Source: /home/u/.edgarrc\n\
			 \n\
			 Host *\n  Compression yes\n"
		);
	}

	#[test]
	fn test_write_output_creates_directory() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join(".ssh").join("config");

		write_output(&path, "Host *\n").unwrap();
		assert_eq!(std::fs::read_to_string(&path).unwrap(), "Host *\n");
	}

	#[test]
	fn test_write_output_overwrites() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("config");
		std::fs::write(&path, "old").unwrap();

		write_output(&path, "new").unwrap();
		assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
	}

	#[test]
	fn test_default_output_path() {
		let path = default_output_path().unwrap();
		assert!(path.ends_with(".ssh/config"));
	}
}
