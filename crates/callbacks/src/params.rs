use std::collections::BTreeMap;
use std::fmt;

/// Value of a named call-time parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
	Str(String),
	Int(i64),
	Bool(bool),
}

impl ParamValue {
	pub fn as_str(&self) -> Option<&str> {
		match self {
			ParamValue::Str(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_int(&self) -> Option<i64> {
		match self {
			ParamValue::Int(i) => Some(*i),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			ParamValue::Bool(b) => Some(*b),
			_ => None,
		}
	}
}

impl fmt::Display for ParamValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ParamValue::Str(s) => f.write_str(s),
			ParamValue::Int(i) => write!(f, "{i}"),
			ParamValue::Bool(b) => write!(f, "{b}"),
		}
	}
}

impl From<&str> for ParamValue {
	fn from(s: &str) -> Self {
		ParamValue::Str(s.to_string())
	}
}

impl From<String> for ParamValue {
	fn from(s: String) -> Self {
		ParamValue::Str(s)
	}
}

impl From<i64> for ParamValue {
	fn from(i: i64) -> Self {
		ParamValue::Int(i)
	}
}

impl From<bool> for ParamValue {
	fn from(b: bool) -> Self {
		ParamValue::Bool(b)
	}
}

static EMPTY: CallParams = CallParams::new();

/// Named parameters supplied with a single invocation.
///
/// Simple callbacks ignore them; parametrized callbacks read the names they
/// understand and ignore the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallParams {
	inner: BTreeMap<String, ParamValue>,
}

impl CallParams {
	pub const fn new() -> Self {
		Self {
			inner: BTreeMap::new(),
		}
	}

	/// Shared empty parameter set
	pub fn empty() -> &'static CallParams {
		&EMPTY
	}

	pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
		self.inner.insert(name.into(), value.into());
		self
	}

	pub fn get(&self, name: &str) -> Option<&ParamValue> {
		self.inner.get(name)
	}

	pub fn get_str(&self, name: &str) -> Option<&str> {
		self.get(name).and_then(ParamValue::as_str)
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
		self.inner.iter().map(|(k, v)| (k.as_str(), v))
	}
}

impl<K, V> FromIterator<(K, V)> for CallParams
where
	K: Into<String>,
	V: Into<ParamValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			inner: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builder_and_getters() {
		let params = CallParams::new()
			.with("unit", "milliseconds")
			.with("count", 3i64)
			.with("withscores", true);

		assert_eq!(params.len(), 3);
		assert_eq!(params.get_str("unit"), Some("milliseconds"));
		assert_eq!(params.get("count").and_then(ParamValue::as_int), Some(3));
		assert_eq!(params.get("withscores").and_then(ParamValue::as_bool), Some(true));
		assert_eq!(params.get_str("count"), None);
		assert!(params.get("missing").is_none());
	}

	#[test]
	fn test_empty() {
		assert!(CallParams::empty().is_empty());
		assert_eq!(CallParams::empty(), &CallParams::default());
	}

	#[test]
	fn test_from_iter_and_iter_order() {
		let params: CallParams = vec![("b", 2i64), ("a", 1i64)].into_iter().collect();
		let names: Vec<&str> = params.iter().map(|(k, _)| k).collect();
		assert_eq!(names, vec!["a", "b"]);
	}

	#[test]
	fn test_display() {
		assert_eq!(ParamValue::from("seconds").to_string(), "seconds");
		assert_eq!(ParamValue::from(-1i64).to_string(), "-1");
		assert_eq!(ParamValue::from(false).to_string(), "false");
	}
}
