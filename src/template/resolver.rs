use crate::document::{Mapping, Value};
use crate::error::{EdgarError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// `{{` and `}}` are escaped braces, `{name}` is a placeholder, any other
/// brace is unbalanced.
static TOKEN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\{\{|\}\}|\{([^{}]*)\}|[{}]").expect("valid token regex"));

/// The value bound to the current loop iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Item<'a> {
	/// The node has no `with_items` loop.
	Absent,

	/// A scalar (or any non-mapping) loop element, reachable as `{item}`.
	Scalar(&'a Value),

	/// A mapping loop element, reachable as `{key}` or `{item.key}`.
	Mapping(&'a Mapping),
}

impl<'a> Item<'a> {
	pub fn from_value(value: &'a Value) -> Self {
		match value {
			Value::Mapping(mapping) => Item::Mapping(mapping),
			other => Item::Scalar(other),
		}
	}
}

#[derive(Debug, PartialEq)]
enum Segment<'t> {
	Literal(&'t str),
	Placeholder(&'t str),
}

fn malformed(template: &str, reason: impl Into<String>) -> EdgarError {
	EdgarError::MalformedTemplate {
		template: template.to_string(),
		reason: reason.into(),
	}
}

/// Split a template into literal runs and placeholder names.
fn parse(template: &str) -> Result<Vec<Segment<'_>>> {
	let mut segments = Vec::new();
	let mut last = 0;

	for caps in TOKEN.captures_iter(template) {
		let Some(whole) = caps.get(0) else {
			continue;
		};
		if whole.start() > last {
			segments.push(Segment::Literal(&template[last..whole.start()]));
		}
		last = whole.end();

		match (whole.as_str(), caps.get(1)) {
			("{{", _) => segments.push(Segment::Literal("{")),
			("}}", _) => segments.push(Segment::Literal("}")),
			(_, Some(name)) => segments.push(Segment::Placeholder(name.as_str())),
			(brace, None) => {
				return Err(malformed(
					template,
					format!("unbalanced `{brace}` at byte {}", whole.start()),
				));
			}
		}
	}

	if last < template.len() {
		segments.push(Segment::Literal(&template[last..]));
	}
	Ok(segments)
}

/// Render parsed segments, asking `lookup` for each placeholder.
///
/// Returns the first placeholder name `lookup` cannot answer.
fn render<'t, F>(segments: &[Segment<'t>], lookup: F) -> std::result::Result<String, &'t str>
where
	F: Fn(&str) -> Option<String>,
{
	let mut out = String::new();
	for segment in segments {
		match *segment {
			Segment::Literal(text) => out.push_str(text),
			Segment::Placeholder(name) => out.push_str(&lookup(name).ok_or(name)?),
		}
	}
	Ok(out)
}

/// Substitute the loop item into `template`.
///
/// Without an item the template is returned untouched, placeholders
/// included. A scalar item only answers `{item}`. A mapping item is first
/// tried with its keys as placeholder names (`{key}`), then through the
/// dotted accessor (`{item.key}`, with `{item}` standing for the whole
/// mapping). A placeholder neither mode can answer is an error.
pub fn resolve(template: &str, item: Item<'_>) -> Result<String> {
	let unknown = |name: &str| malformed(template, format!("unknown placeholder `{{{name}}}`"));

	match item {
		Item::Absent => Ok(template.to_string()),
		Item::Scalar(value) => {
			let segments = parse(template)?;
			render(&segments, |name| {
				(name == "item").then(|| value.canonical_text())
			})
			.map_err(unknown)
		}
		Item::Mapping(mapping) => {
			let segments = parse(template)?;
			render(&segments, |name| mapping.get(name).map(Value::canonical_text))
				.or_else(|_| {
					render(&segments, |name| match name.strip_prefix("item.") {
						Some(key) => mapping.get(key).map(Value::canonical_text),
						None if name == "item" => Some(mapping.canonical_text()),
						None => None,
					})
				})
				.map_err(unknown)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn mapping() -> Mapping {
		[("test", Value::from("amet")), ("bibendum", Value::from("fringilla"))]
			.into_iter()
			.collect()
	}

	#[test]
	fn test_absent_item_returns_template() {
		assert_eq!(resolve("Lorem ipsum", Item::Absent).unwrap(), "Lorem ipsum");
		assert_eq!(resolve("Lorem {item}", Item::Absent).unwrap(), "Lorem {item}");
		assert_eq!(resolve("Lorem {test}", Item::Absent).unwrap(), "Lorem {test}");
		assert_eq!(resolve("Lorem {", Item::Absent).unwrap(), "Lorem {");
	}

	#[test]
	fn test_scalar_item() {
		let value = Value::from("test");
		let item = Item::from_value(&value);
		assert_eq!(resolve("Lorem ipsum", item).unwrap(), "Lorem ipsum");
		assert_eq!(resolve("Lorem {item}", item).unwrap(), "Lorem test");
		assert_eq!(resolve("{item}-{item}", item).unwrap(), "test-test");
	}

	#[test]
	fn test_scalar_item_unknown_placeholder() {
		let value = Value::from("test");
		let result = resolve("Lorem {test}", Item::from_value(&value));
		match result.unwrap_err() {
			EdgarError::MalformedTemplate { template, reason } => {
				assert_eq!(template, "Lorem {test}");
				assert!(reason.contains("{test}"));
			}
			other => panic!("Expected MalformedTemplate error, got {other:?}"),
		}
	}

	#[test]
	fn test_numeric_and_bool_items() {
		let number = Value::Integer(42);
		assert_eq!(resolve("test{item}", Item::from_value(&number)).unwrap(), "test42");
		let flag = Value::Bool(true);
		assert_eq!(resolve("Lorem {item}", Item::from_value(&flag)).unwrap(), "Lorem yes");
	}

	#[test]
	fn test_mapping_item_flat_keys() {
		let m = mapping();
		let item = Item::Mapping(&m);
		assert_eq!(resolve("Lorem ipsum", item).unwrap(), "Lorem ipsum");
		assert_eq!(resolve("Lorem {test}", item).unwrap(), "Lorem amet");
		assert_eq!(
			resolve("Lorem {test} netus {bibendum}", item).unwrap(),
			"Lorem amet netus fringilla"
		);
	}

	#[test]
	fn test_mapping_item_dotted_keys() {
		let m = mapping();
		let item = Item::Mapping(&m);
		assert_eq!(resolve("Lorem {item.test}", item).unwrap(), "Lorem amet");
		assert_eq!(
			resolve("Lorem {item.test} netus {item.bibendum}", item).unwrap(),
			"Lorem amet netus fringilla"
		);
	}

	#[test]
	fn test_mapping_item_whole() {
		let m = mapping();
		assert_eq!(
			resolve("Lorem {item}", Item::Mapping(&m)).unwrap(),
			"Lorem test=amet bibendum=fringilla"
		);
	}

	#[test]
	fn test_mapping_item_mixed_modes_fail() {
		let m = mapping();
		assert!(resolve("{test} {item.bibendum}", Item::Mapping(&m)).is_err());
		assert!(resolve("{item.missing}", Item::Mapping(&m)).is_err());
		assert!(resolve("{missing}", Item::Mapping(&m)).is_err());
	}

	#[test]
	fn test_escaped_braces() {
		let value = Value::from("x");
		assert_eq!(
			resolve("{{literal}} {item}", Item::from_value(&value)).unwrap(),
			"{literal} x"
		);
	}

	#[test]
	fn test_unbalanced_brace() {
		let value = Value::from("x");
		assert!(matches!(
			resolve("oops {item", Item::from_value(&value)),
			Err(EdgarError::MalformedTemplate { .. })
		));
		assert!(resolve("oops }", Item::from_value(&value)).is_err());
	}

	#[test]
	fn test_parse_segments() {
		assert_eq!(
			parse("a{b}c").unwrap(),
			vec![
				Segment::Literal("a"),
				Segment::Placeholder("b"),
				Segment::Literal("c")
			]
		);
	}
}
