use crate::compiler::directives::BlockKind;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// A named `Host`/`Match` block and its option lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledBlock {
	pub name: String,
	pub kind: BlockKind,

	/// Full `Keyword value` lines; identical lines collapse, lines with the
	/// same keyword and different values do not.
	pub lines: BTreeSet<String>,
}

impl CompiledBlock {
	pub fn header(&self) -> String {
		format!("{} {}", self.kind, self.name)
	}
}

/// Compiled blocks in the order their names were first produced.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
	blocks: Vec<CompiledBlock>,
	index: HashMap<String, usize>,
}

impl ConfigStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add lines under `name`, merging into an existing block of that name.
	///
	/// A merged block keeps its original position and kind.
	pub fn push(&mut self, name: &str, kind: BlockKind, lines: impl IntoIterator<Item = String>) {
		match self.index.get(name) {
			Some(&position) => {
				let block = &mut self.blocks[position];
				if block.kind != kind {
					tracing::debug!(name, kept = %block.kind, dropped = %kind, "block kind mismatch on merge");
				}
				block.lines.extend(lines);
			}
			None => {
				self.index.insert(name.to_string(), self.blocks.len());
				self.blocks.push(CompiledBlock {
					name: name.to_string(),
					kind,
					lines: lines.into_iter().collect(),
				});
			}
		}
	}

	pub fn get(&self, name: &str) -> Option<&CompiledBlock> {
		self.index.get(name).map(|&position| &self.blocks[position])
	}

	pub fn blocks(&self) -> &[CompiledBlock] {
		&self.blocks
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.blocks.iter().map(|b| b.name.as_str())
	}

	pub fn len(&self) -> usize {
		self.blocks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.blocks.is_empty()
	}

	/// Render the store as an OpenSSH client config.
	pub fn render(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for ConfigStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let document = self
			.blocks
			.iter()
			.map(|block| {
				std::iter::once(block.header())
					.chain(block.lines.iter().map(|line| format!("  {line}")))
					.collect::<Vec<_>>()
					.join("\n")
			})
			.collect::<Vec<_>>()
			.join("\n\n");
		f.write_str(document.trim())
	}
}
