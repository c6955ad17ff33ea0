//! Edgar - compile a hierarchical description of SSH hosts into an OpenSSH
//! client config.
//!
//! This library provides the core functionality for edgar, including:
//! - Locating and parsing the YAML/TOML source document
//! - Walking nested `Host`/`Match` declarations with name prefixing and
//!   `with_items` loops
//! - Validating and canonicalizing OpenSSH keywords
//! - Rendering the flattened, deterministic config text
//!
//! # Example
//!
//! ```
//! use edgar_cli::compile_to_string;
//! use edgar_cli::diagnostics::Warning;
//! use edgar_cli::document::Value;
//!
//! let root: Value = serde_yaml::from_str(
//!     "- Host: name\n  HostName: 127.0.0.1\n",
//! )
//! .unwrap();
//!
//! let mut warnings: Vec<Warning> = Vec::new();
//! let config = compile_to_string(&root, &mut warnings).unwrap();
//! assert_eq!(config, "Host name\n  HostName 127.0.0.1");
//! ```

pub mod compiler;
pub mod config;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod options;
pub mod output;
pub mod template;

pub use compiler::{ConfigStore, compile};
pub use diagnostics::{DiagnosticSink, StderrSink, Warning};
pub use document::Value;
pub use error::{EdgarError, Result};

/// Compile a declaration tree straight to OpenSSH config text.
pub fn compile_to_string(root: &Value, sink: &mut dyn DiagnosticSink) -> Result<String> {
	compile(root, sink).map(|store| store.render())
}
