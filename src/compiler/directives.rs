use crate::document::{Mapping, Value};
use crate::error::{EdgarError, Result};
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

/// Upper bound on the number of iterations a range loop may produce.
pub const MAX_RANGE_ITEMS: i128 = 65_536;

static LEGACY_RANGE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\s*range\(\s*(-?\d+)\s*(?:,\s*(-?\d+)\s*(?:,\s*(-?\d+)\s*)?)?\)\s*$")
		.expect("valid range regex")
});

/// Header keyword of a compiled block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockKind {
	#[default]
	Host,
	Match,
}

impl BlockKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			BlockKind::Host => "Host",
			BlockKind::Match => "Match",
		}
	}
}

impl fmt::Display for BlockKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// How a node iterates over `with_items`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopSpec<'a> {
	/// Literal list of items.
	Items(&'a [Value]),

	/// Integer sequence `start, start + step, ...` stopping before `stop`.
	Range { start: i64, stop: i64, step: i64 },
}

impl<'a> LoopSpec<'a> {
	pub fn parse(value: &'a Value) -> Result<Option<Self>> {
		match value {
			Value::Null => Ok(None),
			Value::Sequence(items) => Ok(Some(LoopSpec::Items(items))),
			Value::Mapping(mapping) => Self::from_mapping(mapping).map(Some),
			Value::String(expr) => Self::from_legacy_expression(expr).map(Some),
			other => Err(invalid_loop(format!(
				"expected a list, a range mapping or a `range(...)` string, got {}",
				other.type_name()
			))),
		}
	}

	/// `{start: 0, stop: 4, step: 2}`; only `stop` is required.
	fn from_mapping(mapping: &Mapping) -> Result<Self> {
		let mut start = 0;
		let mut stop = None;
		let mut step = 1;

		for (key, value) in mapping.iter() {
			let Value::Integer(n) = value else {
				return Err(invalid_loop(format!(
					"`{key}` must be an integer, got {}",
					value.type_name()
				)));
			};
			match key {
				"start" => start = *n,
				"stop" => stop = Some(*n),
				"step" => step = *n,
				other => return Err(invalid_loop(format!("unknown range field `{other}`"))),
			}
		}

		let stop = stop.ok_or_else(|| invalid_loop("range mapping requires `stop`"))?;
		Self::range(start, stop, step)
	}

	/// `range(stop)`, `range(start, stop)` or `range(start, stop, step)`.
	///
	/// The string is matched against this grammar, never evaluated.
	fn from_legacy_expression(expr: &str) -> Result<Self> {
		let caps = LEGACY_RANGE
			.captures(expr)
			.ok_or_else(|| invalid_loop(format!("unsupported loop expression {expr:?}")))?;

		let numbers = caps
			.iter()
			.skip(1)
			.flatten()
			.map(|m| {
				m.as_str()
					.parse::<i64>()
					.map_err(|_| invalid_loop(format!("range bound {} is out of range", m.as_str())))
			})
			.collect::<Result<Vec<_>>>()?;

		match numbers.as_slice() {
			[stop] => Self::range(0, *stop, 1),
			[start, stop] => Self::range(*start, *stop, 1),
			[start, stop, step] => Self::range(*start, *stop, *step),
			_ => Err(invalid_loop(format!("unsupported loop expression {expr:?}"))),
		}
	}

	fn range(start: i64, stop: i64, step: i64) -> Result<Self> {
		if step == 0 {
			return Err(invalid_loop("range step must not be zero"));
		}
		let spec = LoopSpec::Range { start, stop, step };
		if spec.len() > MAX_RANGE_ITEMS as usize {
			return Err(invalid_loop(format!(
				"range produces more than {MAX_RANGE_ITEMS} items"
			)));
		}
		Ok(spec)
	}

	/// Number of iterations.
	pub fn len(&self) -> usize {
		match *self {
			LoopSpec::Items(items) => items.len(),
			LoopSpec::Range { start, stop, step } => {
				let (start, stop, step) = (start as i128, stop as i128, step as i128);
				let span = if step > 0 { stop - start } else { start - stop };
				let step = step.abs();
				if span <= 0 {
					0
				} else {
					((span + step - 1) / step).min(MAX_RANGE_ITEMS + 1) as usize
				}
			}
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Loop elements in iteration order.
	pub fn elements(&self) -> Vec<Cow<'a, Value>> {
		match *self {
			LoopSpec::Items(items) => items.iter().map(Cow::Borrowed).collect(),
			LoopSpec::Range { start, step, .. } => (0..self.len() as i128)
				.map_while(|i| i64::try_from(start as i128 + i * step as i128).ok())
				.map(|n| Cow::Owned(Value::Integer(n)))
				.collect(),
		}
	}
}

fn invalid_loop(reason: impl Into<String>) -> EdgarError {
	EdgarError::InvalidLoop {
		reason: reason.into(),
	}
}

fn invalid_directive(directive: &str, reason: impl Into<String>) -> EdgarError {
	EdgarError::InvalidDirective {
		directive: directive.to_string(),
		reason: reason.into(),
	}
}

/// Control fields of a declaration node.
#[derive(Debug, Clone, PartialEq)]
pub struct Directives<'a> {
	/// Suppress this node's own lines; children still compile.
	pub hide: bool,

	/// Children are named `<this name><their pattern>`.
	pub prefix: bool,

	/// Children receive this node's options as defaults.
	pub inherit: bool,

	pub with_items: Option<LoopSpec<'a>>,
}

impl Default for Directives<'_> {
	fn default() -> Self {
		Self {
			hide: false,
			prefix: true,
			inherit: false,
			with_items: None,
		}
	}
}

/// One entry of `subhosts`.
#[derive(Debug, Clone, PartialEq)]
pub enum Child<'a> {
	Node(&'a Mapping),

	/// A bare string, shorthand for `{Host: <name>}`.
	Name(String),
}

/// A declaration node split into its typed parts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Declaration<'a> {
	pub kind: BlockKind,

	/// `None` for the implicit wildcard block.
	pub pattern: Option<String>,

	pub directives: Directives<'a>,

	/// Option payload in source order, not yet validated.
	pub options: Vec<(&'a str, &'a Value)>,

	pub children: Vec<Child<'a>>,
}

impl<'a> Declaration<'a> {
	/// Split a node mapping into directives, pattern, options and children.
	pub fn classify(node: &'a Mapping) -> Result<Self> {
		let mut decl = Declaration::default();
		let mut children_key: Option<&str> = None;

		for (key, value) in node.iter() {
			match key {
				"hide" => decl.directives.hide = parse_flag(key, value, false)?,
				"prefix" => decl.directives.prefix = parse_flag(key, value, true)?,
				"inherit" => decl.directives.inherit = parse_flag(key, value, false)?,
				"with_items" => decl.directives.with_items = LoopSpec::parse(value)?,
				"subhosts" | "hosts" => {
					if let Some(previous) = children_key {
						return Err(invalid_directive(
							key,
							format!("cannot be combined with `{previous}`"),
						));
					}
					children_key = Some(key);
					decl.children = parse_children(key, value)?;
				}
				_ if key.eq_ignore_ascii_case("host") || key.eq_ignore_ascii_case("match") => {
					if decl.pattern.is_some() {
						return Err(invalid_directive(
							key,
							"a node declares exactly one `Host` or `Match` pattern",
						));
					}
					decl.kind = if key.eq_ignore_ascii_case("host") {
						BlockKind::Host
					} else {
						BlockKind::Match
					};
					decl.pattern = Some(parse_pattern(key, value)?);
				}
				_ => decl.options.push((key, value)),
			}
		}

		Ok(decl)
	}

	/// Declaration for a bare-string child.
	pub fn named(pattern: &str) -> Self {
		Declaration {
			pattern: Some(pattern.to_string()),
			..Default::default()
		}
	}
}

/// Booleans, with the YAML 1.1 spellings YAML 1.2 parsers leave as strings.
fn parse_flag(key: &str, value: &Value, default: bool) -> Result<bool> {
	match value {
		Value::Null => Ok(default),
		Value::Bool(b) => Ok(*b),
		Value::String(s) => match s.to_ascii_lowercase().as_str() {
			"yes" | "true" | "on" => Ok(true),
			"no" | "false" | "off" => Ok(false),
			_ => Err(invalid_directive(key, format!("expected a boolean, got {s:?}"))),
		},
		other => Err(invalid_directive(
			key,
			format!("expected a boolean, got {}", other.type_name()),
		)),
	}
}

/// A pattern list is written space separated, as OpenSSH expects.
fn parse_pattern(key: &str, value: &Value) -> Result<String> {
	match value {
		Value::Sequence(patterns) => {
			let parts = patterns
				.iter()
				.map(|p| parse_pattern(key, p))
				.collect::<Result<Vec<_>>>()?;
			Ok(parts.join(" "))
		}
		Value::Mapping(_) | Value::Null => Err(invalid_directive(
			key,
			format!("expected a pattern, got {}", value.type_name()),
		)),
		scalar => Ok(scalar.canonical_text()),
	}
}

fn parse_children<'a>(key: &str, value: &'a Value) -> Result<Vec<Child<'a>>> {
	match value {
		Value::Null => Ok(Vec::new()),
		Value::Sequence(items) => items
			.iter()
			.map(|item| match item {
				Value::Mapping(mapping) => Ok(Child::Node(mapping)),
				Value::String(name) => Ok(Child::Name(name.clone())),
				other => Err(invalid_directive(
					key,
					format!("entries must be mappings or names, got {}", other.type_name()),
				)),
			})
			.collect(),
		other => Err(invalid_directive(
			key,
			format!("expected a list, got {}", other.type_name()),
		)),
	}
}
