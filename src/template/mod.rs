//! Item templating for block names and option values.
//!
//! This module handles:
//! - Resolving `{item}`, `{key}` and `{item.key}` placeholders
//! - Rendering option values into their OpenSSH textual form

pub mod formatter;
pub mod resolver;

pub use formatter::format_value;
pub use resolver::{Item, resolve};
