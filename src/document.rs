//! Generic, already-deserialized document tree.
//!
//! The compiler never looks at YAML or TOML directly: both formats
//! deserialize into [`Value`] through serde, and everything downstream walks
//! this tree.

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::fmt;

/// A node of the declaration tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
	#[default]
	Null,
	Bool(bool),
	Integer(i64),
	Float(f64),
	String(String),
	Sequence(Vec<Value>),
	Mapping(Mapping),
}

/// Insertion-ordered mapping with string keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping {
	entries: Vec<(String, Value)>,
}

impl Mapping {
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a key, replacing the value in place if the key already exists.
	pub fn insert(&mut self, key: impl Into<String>, value: Value) {
		let key = key.into();
		match self.entries.iter_mut().find(|(k, _)| *k == key) {
			Some((_, slot)) => *slot = value,
			None => self.entries.push((key, value)),
		}
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	/// Case-insensitive lookup, first match in source order.
	pub fn get_ignore_case(&self, key: &str) -> Option<&Value> {
		self.entries
			.iter()
			.find(|(k, _)| k.eq_ignore_ascii_case(key))
			.map(|(_, v)| v)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// `KEY=value` pairs separated by spaces, the syntax `SetEnv` expects.
	pub fn canonical_text(&self) -> String {
		self.iter()
			.map(|(k, v)| format!("{k}={}", v.canonical_text()))
			.collect::<Vec<_>>()
			.join(" ")
	}
}

impl<K: Into<String>> FromIterator<(K, Value)> for Mapping {
	fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
		let mut mapping = Mapping::new();
		for (k, v) in iter {
			mapping.insert(k, v);
		}
		mapping
	}
}

impl Value {
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_mapping(&self) -> Option<&Mapping> {
		match self {
			Value::Mapping(m) => Some(m),
			_ => None,
		}
	}

	/// Short type name used in error messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Bool(_) => "boolean",
			Value::Integer(_) => "integer",
			Value::Float(_) => "float",
			Value::String(_) => "string",
			Value::Sequence(_) => "sequence",
			Value::Mapping(_) => "mapping",
		}
	}

	/// Canonical textual form of a value, as it appears in an OpenSSH config.
	///
	/// Sequences use OpenSSH's comma-separated list syntax.
	pub fn canonical_text(&self) -> String {
		match self {
			Value::Null => "none".to_string(),
			Value::Bool(true) => "yes".to_string(),
			Value::Bool(false) => "no".to_string(),
			Value::Integer(i) => i.to_string(),
			Value::Float(f) => format!("{f:?}"),
			Value::String(s) => s.clone(),
			Value::Sequence(items) => items
				.iter()
				.map(Value::canonical_text)
				.collect::<Vec<_>>()
				.join(","),
			Value::Mapping(mapping) => mapping.canonical_text(),
		}
	}
}

impl From<&str> for Value {
	fn from(s: &str) -> Self {
		Value::String(s.to_string())
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Value::String(s)
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Value::Bool(b)
	}
}

impl From<i64> for Value {
	fn from(i: i64) -> Self {
		Value::Integer(i)
	}
}

impl From<Mapping> for Value {
	fn from(m: Mapping) -> Self {
		Value::Mapping(m)
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(items: Vec<T>) -> Self {
		Value::Sequence(items.into_iter().map(Into::into).collect())
	}
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
	type Value = Value;

	fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str("a scalar, a sequence or a mapping")
	}

	fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
		Ok(Value::Bool(v))
	}

	fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
		Ok(Value::Integer(v))
	}

	fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
		// Out-of-range integers keep their digits rather than losing precision.
		Ok(i64::try_from(v)
			.map(Value::Integer)
			.unwrap_or_else(|_| Value::String(v.to_string())))
	}

	fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
		Ok(Value::Float(v))
	}

	fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
		Ok(Value::String(v.to_string()))
	}

	fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
		Ok(Value::String(v))
	}

	fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
		Ok(Value::Null)
	}

	fn visit_none<E: de::Error>(self) -> Result<Value, E> {
		Ok(Value::Null)
	}

	fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
		Value::deserialize(deserializer)
	}

	fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
		let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
		while let Some(item) = seq.next_element::<Value>()? {
			items.push(item);
		}
		Ok(Value::Sequence(items))
	}

	fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
		let mut mapping = Mapping::new();
		while let Some((key, value)) = map.next_entry::<Value, Value>()? {
			mapping.insert(key.canonical_text(), value);
		}
		Ok(Value::Mapping(mapping))
	}
}

impl<'de> Deserialize<'de> for Value {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_any(ValueVisitor)
	}
}
