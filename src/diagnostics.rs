//! Non-fatal compile diagnostics.
//!
//! Warnings never change the compile result. They are handed to a
//! [`DiagnosticSink`] chosen by the caller: the CLI prints them on stderr,
//! library users and tests usually collect them in a `Vec<Warning>`.

use std::fmt;

/// A recoverable problem found while compiling an option line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
	/// The keyword is obsolete; OpenSSH ignores it and may reject it later.
	Deprecated { option: String },

	/// The keyword is recognized but has no effect in current OpenSSH builds.
	Ignored { option: String },
}

impl Warning {
	pub fn option(&self) -> &str {
		match self {
			Warning::Deprecated { option } | Warning::Ignored { option } => option,
		}
	}
}

impl fmt::Display for Warning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Warning::Deprecated { option } => write!(
				f,
				"{option} is deprecated and will be ignored by OpenSSH, you should remove it \
				 now from your configuration as it may break in a future version."
			),
			Warning::Ignored { option } => write!(
				f,
				"{option} is not supported anymore by OpenSSH and will be ignored, you \
				 should remove it from your configuration."
			),
		}
	}
}

/// Destination for compile warnings.
pub trait DiagnosticSink {
	fn warn(&mut self, warning: Warning);
}

impl DiagnosticSink for Vec<Warning> {
	fn warn(&mut self, warning: Warning) {
		self.push(warning);
	}
}

/// Writes one `warning: ...` line per diagnostic to stderr.
#[derive(Debug, Default)]
pub struct StderrSink {
	count: usize,
}

impl StderrSink {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of warnings written so far.
	pub fn count(&self) -> usize {
		self.count
	}
}

impl DiagnosticSink for StderrSink {
	fn warn(&mut self, warning: Warning) {
		self.count += 1;
		eprintln!("warning: {warning}");
	}
}
