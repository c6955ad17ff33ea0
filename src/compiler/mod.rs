//! Declaration tree compiler.
//!
//! This module handles:
//! - Splitting declaration nodes into directives, options and children
//! - Name prefixing and `with_items` loop expansion
//! - Accumulating compiled blocks in first-seen order

pub mod directives;
pub mod store;

pub use directives::{BlockKind, Child, Declaration, Directives, LoopSpec};
pub use store::{CompiledBlock, ConfigStore};

use crate::diagnostics::DiagnosticSink;
use crate::document::Value;
use crate::error::{EdgarError, Result};
use crate::options::{compile_option, lookup};
use crate::template::{Item, resolve};
use std::borrow::Cow;
use std::collections::BTreeSet;

/// Name of the implicit block every option outside a `Host`/`Match` lands in.
pub const WILDCARD: &str = "*";

/// Compile a declaration tree into a [`ConfigStore`].
///
/// The root is either a single node or a sequence of sibling nodes. The
/// first invalid keyword or template aborts the whole compile.
pub fn compile(root: &Value, sink: &mut dyn DiagnosticSink) -> Result<ConfigStore> {
	let mut compiler = Compiler::new(sink);
	compiler.compile_root(root)?;
	Ok(compiler.finish())
}

/// Depth-first walker owning the store for one compile.
pub struct Compiler<'s> {
	store: ConfigStore,
	sink: &'s mut dyn DiagnosticSink,
}

impl<'s> Compiler<'s> {
	pub fn new(sink: &'s mut dyn DiagnosticSink) -> Self {
		Self {
			store: ConfigStore::new(),
			sink,
		}
	}

	pub fn compile_root(&mut self, root: &Value) -> Result<()> {
		match root {
			Value::Null => Ok(()),
			Value::Mapping(node) => self.compile_node(&Declaration::classify(node)?, "", &[]),
			Value::Sequence(nodes) => {
				for node in nodes {
					let decl = match node {
						Value::Mapping(mapping) => Declaration::classify(mapping)?,
						Value::String(name) => Declaration::named(name),
						other => {
							return Err(EdgarError::InvalidDirective {
								directive: "root".to_string(),
								reason: format!(
									"entries must be mappings or names, got {}",
									other.type_name()
								),
							});
						}
					};
					self.compile_node(&decl, "", &[])?;
				}
				Ok(())
			}
			other => Err(EdgarError::InvalidDirective {
				directive: "root".to_string(),
				reason: format!("expected a mapping or a list, got {}", other.type_name()),
			}),
		}
	}

	pub fn finish(self) -> ConfigStore {
		self.store
	}

	fn compile_node(
		&mut self,
		decl: &Declaration<'_>,
		prefix: &str,
		inherited: &[(&str, &Value)],
	) -> Result<()> {
		tracing::trace!(pattern = ?decl.pattern, prefix, "compiling node");

		let options = merge_inherited(inherited, &decl.options);
		let elements: Vec<Cow<'_, Value>> = match &decl.directives.with_items {
			Some(spec) => spec.elements(),
			None => Vec::new(),
		};
		let items: Vec<Item<'_>> = if decl.directives.with_items.is_some() {
			elements.iter().map(|e| Item::from_value(e)).collect()
		} else {
			vec![Item::Absent]
		};

		for item in items {
			let name = match decl.pattern.as_deref() {
				None => WILDCARD.to_string(),
				Some(WILDCARD) if decl.kind == BlockKind::Host => WILDCARD.to_string(),
				Some(pattern) => resolve(&format!("{prefix}{pattern}"), item)?,
			};

			let mut lines = BTreeSet::new();
			for (key, value) in &options {
				if let Some(line) = compile_option(key, value, item, &mut *self.sink)? {
					lines.insert(line);
				}
			}

			if decl.directives.hide {
				tracing::debug!(name = %name, "hidden block, skipping its own lines");
			} else {
				tracing::debug!(name = %name, kind = %decl.kind, lines = lines.len(), "emitting block");
				self.store.push(&name, decl.kind, lines);
			}

			if decl.children.is_empty() {
				continue;
			}

			let is_wildcard = name == WILDCARD;
			let child_prefix = if !is_wildcard && decl.directives.prefix {
				name.as_str()
			} else {
				""
			};
			let child_inherited: &[(&str, &Value)] = if !is_wildcard && decl.directives.inherit {
				&options
			} else {
				&[]
			};

			for child in &decl.children {
				let child_decl = match child {
					Child::Node(mapping) => Declaration::classify(mapping)?,
					Child::Name(pattern) => Declaration::named(pattern),
				};
				self.compile_node(&child_decl, child_prefix, child_inherited)?;
			}
		}

		Ok(())
	}
}

/// Canonical keyword used to decide whether a child overrides a default.
fn override_key(name: &str) -> String {
	lookup(name)
		.map(|entry| entry.keyword.to_string())
		.unwrap_or_else(|| name.to_ascii_lowercase())
}

/// Inherited defaults not overridden by `own`, followed by `own`.
fn merge_inherited<'v>(
	inherited: &[(&'v str, &'v Value)],
	own: &[(&'v str, &'v Value)],
) -> Vec<(&'v str, &'v Value)> {
	if inherited.is_empty() {
		return own.to_vec();
	}
	let overridden: BTreeSet<String> = own.iter().map(|(k, _)| override_key(k)).collect();
	inherited
		.iter()
		.filter(|(k, _)| !overridden.contains(&override_key(k)))
		.chain(own.iter())
		.copied()
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::diagnostics::Warning;

	fn compile_yaml(src: &str) -> Result<String> {
		let root: Value = serde_yaml::from_str(src).unwrap();
		let mut warnings: Vec<Warning> = Vec::new();
		compile(&root, &mut warnings).map(|store| store.render())
	}

	#[test]
	fn test_root_without_host_is_wildcard() {
		assert_eq!(compile_yaml("Compression: true\n").unwrap(), "Host *\n  Compression yes");
	}

	#[test]
	fn test_prefix_is_concatenated() {
		let out = compile_yaml(
			"- Host: name\n  subhosts:\n  - Host: q\n    HostName: node-1\n",
		)
		.unwrap();
		assert_eq!(out, "Host name\n\nHost nameq\n  HostName node-1");
	}

	#[test]
	fn test_wildcard_children_get_empty_prefix() {
		let out = compile_yaml(
			"prefix: true\nUser: root\nsubhosts:\n- Host: a\n  Port: 22\n",
		)
		.unwrap();
		assert_eq!(out, "Host *\n  User root\n\nHost a\n  Port 22");
	}

	#[test]
	fn test_explicit_wildcard_is_never_prefixed() {
		let out = compile_yaml(
			"- Host: name\n  hide: true\n  subhosts:\n  - Host: \"*\"\n    Port: 22\n",
		)
		.unwrap();
		assert_eq!(out, "Host *\n  Port 22");
	}

	#[test]
	fn test_child_item_fills_parent_placeholders() {
		let out = compile_yaml(
			"- Host: \"web{item}\"\n  hide: yes\n  subhosts:\n  - Host: \"-{item}\"\n    with_items: [1]\n    Port: 22\n",
		)
		.unwrap();
		assert_eq!(out, "Host web1-1\n  Port 22");
	}

	#[test]
	fn test_explicit_wildcard_child_is_not_prefixed() {
		let out = compile_yaml(
			"- Host: \"web{item}\"\n  subhosts:\n  - Host: \"*\"\n    with_items: [1]\n    Port: 22\n",
		)
		.unwrap();
		assert_eq!(out, "Host web{item}\n\nHost *\n  Port 22");
	}

	#[test]
	fn test_invalid_keyword_in_hidden_node_still_fails() {
		let result = compile_yaml("- Host: name\n  hide: yes\n  NotAnOption: 1\n");
		assert!(matches!(result, Err(EdgarError::InvalidKeyword { .. })));
	}

	#[test]
	fn test_empty_loop_emits_nothing() {
		let out = compile_yaml("- Host: \"e{item}\"\n  with_items: []\n  Port: 22\n").unwrap();
		assert_eq!(out, "");
	}

	#[test]
	fn test_merge_inherited_overrides_by_keyword() {
		let parent_host = Value::from("127.0.0.1");
		let parent_user = Value::from("edgar");
		let child_host = Value::from("node-1");
		let merged = merge_inherited(
			&[("HostName", &parent_host), ("User", &parent_user)],
			&[("hostname", &child_host)],
		);
		assert_eq!(merged, vec![("User", &parent_user), ("hostname", &child_host)]);
	}

	#[test]
	fn test_root_scalar_is_rejected() {
		assert!(matches!(
			compile_yaml("42"),
			Err(EdgarError::InvalidDirective { .. })
		));
	}

	#[test]
	fn test_null_root_is_empty() {
		assert_eq!(compile_yaml("~").unwrap(), "");
	}
}
