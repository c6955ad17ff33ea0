//! Source document loading for edgar.
//!
//! This module handles:
//! - Locating the source document (`~/.config/edgar.yml`, `~/.edgarrc`, ...)
//! - YAML and TOML parsing into the generic declaration tree

pub mod parser;
pub mod source;
pub mod types;

pub use parser::{parse_source_file, parse_source_str};
pub use source::{DEFAULT_SOURCES, discover_source, expand_home, source_candidates};
pub use types::{LoadedSource, SourceFormat};

use crate::error::Result;
use std::path::Path;

/// Convenience function to locate and parse the source document.
pub fn load_source(explicit: Option<&Path>) -> Result<LoadedSource> {
	let path = discover_source(explicit)?;
	parse_source_file(&path)
}
