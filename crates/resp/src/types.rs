use std::collections::HashMap;
use std::collections::HashSet;
use std::hash::Hash;
use std::hash::Hasher;
use std::mem;

use bytes::Bytes;

/// A reply as handed over by the decoder.
///
/// RESP2 replies only ever use the first six variants. Under RESP3 the
/// server may also send the typed variants; a map or set sent to a RESP2
/// connection arrives as a flat `Array` instead.
#[derive(Debug, Clone, PartialEq)]
pub enum RespValue {
	/// `+OK`
	SimpleString(Bytes),
	/// `-ERR message`
	Error(Bytes),
	/// `:1000`
	Integer(i64),
	/// `$6 foobar`
	BulkString(Bytes),
	Array(Vec<RespValue>),
	/// Nil bulk string or nil array under RESP2, `_` under RESP3
	Null,

	Boolean(bool),
	Double(f64),
	/// Arbitrary precision integer kept as its decimal text
	BigNumber(Bytes),
	BulkError(Bytes),
	/// `=15 txt:Some string`
	VerbatimString { format: Bytes, data: Bytes },
	Map(HashMap<RespValue, RespValue>),
	Set(HashSet<RespValue>),
	/// Out-of-band message, shaped like an array
	Push(Vec<RespValue>),
}

impl RespValue {
	/// Shape name used in coercion errors
	pub fn type_name(&self) -> &'static str {
		match self {
			RespValue::SimpleString(_) => "simple string",
			RespValue::Error(_) => "error",
			RespValue::Integer(_) => "integer",
			RespValue::BulkString(_) => "bulk string",
			RespValue::Array(_) => "array",
			RespValue::Null => "null",
			RespValue::Boolean(_) => "boolean",
			RespValue::Double(_) => "double",
			RespValue::BigNumber(_) => "big number",
			RespValue::BulkError(_) => "bulk error",
			RespValue::VerbatimString { .. } => "verbatim string",
			RespValue::Map(_) => "map",
			RespValue::Set(_) => "set",
			RespValue::Push(_) => "push",
		}
	}

	pub fn is_error(&self) -> bool {
		matches!(self, RespValue::Error(_) | RespValue::BulkError(_))
	}

	/// Message of an error reply
	pub fn error_message(&self) -> Option<&Bytes> {
		match self {
			RespValue::Error(e) | RespValue::BulkError(e) => Some(e),
			_ => None,
		}
	}

	/// Bytes of a string-shaped reply.
	///
	/// Verbatim strings yield their data without the format prefix.
	pub fn payload(&self) -> Option<&Bytes> {
		match self {
			RespValue::SimpleString(b) | RespValue::BulkString(b) => Some(b),
			RespValue::VerbatimString { data, .. } => Some(data),
			_ => None,
		}
	}

	/// Elements of a sequence-shaped reply; set order is unspecified.
	pub fn into_vec(self) -> Option<Vec<RespValue>> {
		match self {
			RespValue::Array(items) | RespValue::Push(items) => Some(items),
			RespValue::Set(items) => Some(items.into_iter().collect()),
			_ => None,
		}
	}

	pub fn simple_string(s: impl Into<Bytes>) -> Self {
		RespValue::SimpleString(s.into())
	}

	pub fn bulk_string(s: impl Into<Bytes>) -> Self {
		RespValue::BulkString(s.into())
	}

	pub fn error(e: impl Into<Bytes>) -> Self {
		RespValue::Error(e.into())
	}

	pub fn array(items: impl IntoIterator<Item = RespValue>) -> Self {
		RespValue::Array(items.into_iter().collect())
	}

	pub fn map(pairs: impl IntoIterator<Item = (RespValue, RespValue)>) -> Self {
		RespValue::Map(pairs.into_iter().collect())
	}

	pub fn set(items: impl IntoIterator<Item = RespValue>) -> Self {
		RespValue::Set(items.into_iter().collect())
	}
}

// Replies are used as map keys and set members, so hashing must agree with
// the derived equality: same variant, same contents.
impl Hash for RespValue {
	fn hash<H: Hasher>(&self, state: &mut H) {
		mem::discriminant(self).hash(state);
		match self {
			RespValue::SimpleString(b)
			| RespValue::Error(b)
			| RespValue::BulkString(b)
			| RespValue::BigNumber(b)
			| RespValue::BulkError(b) => b.hash(state),
			RespValue::Integer(i) => i.hash(state),
			RespValue::Boolean(b) => b.hash(state),
			// 0.0 == -0.0
			RespValue::Double(d) => {
				let bits = if *d == 0.0 { 0 } else { d.to_bits() };
				bits.hash(state);
			}
			RespValue::VerbatimString { format, data } => {
				format.hash(state);
				data.hash(state);
			}
			RespValue::Array(items) | RespValue::Push(items) => items.hash(state),
			// Unordered, so only the size is stable
			RespValue::Map(m) => m.len().hash(state),
			RespValue::Set(s) => s.len().hash(state),
			RespValue::Null => {}
		}
	}
}

impl Eq for RespValue {}

impl From<&str> for RespValue {
	fn from(s: &str) -> Self {
		RespValue::BulkString(Bytes::copy_from_slice(s.as_bytes()))
	}
}

impl From<String> for RespValue {
	fn from(s: String) -> Self {
		RespValue::BulkString(Bytes::from(s))
	}
}

impl From<&[u8]> for RespValue {
	fn from(b: &[u8]) -> Self {
		RespValue::BulkString(Bytes::copy_from_slice(b))
	}
}

impl From<Vec<u8>> for RespValue {
	fn from(v: Vec<u8>) -> Self {
		RespValue::BulkString(Bytes::from(v))
	}
}

impl From<Bytes> for RespValue {
	fn from(b: Bytes) -> Self {
		RespValue::BulkString(b)
	}
}

impl From<i64> for RespValue {
	fn from(i: i64) -> Self {
		RespValue::Integer(i)
	}
}

impl From<f64> for RespValue {
	fn from(d: f64) -> Self {
		RespValue::Double(d)
	}
}

impl From<bool> for RespValue {
	fn from(b: bool) -> Self {
		RespValue::Boolean(b)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::hash_map::DefaultHasher;

	use super::*;

	fn hash_of(value: &RespValue) -> u64 {
		let mut hasher = DefaultHasher::new();
		value.hash(&mut hasher);
		hasher.finish()
	}

	#[test]
	fn test_error_message() {
		assert!(RespValue::error("ERR").is_error());
		assert_eq!(
			RespValue::BulkError(Bytes::from("SYNTAX invalid")).error_message(),
			Some(&Bytes::from("SYNTAX invalid"))
		);
		assert!(!RespValue::simple_string("OK").is_error());
		assert_eq!(RespValue::simple_string("OK").error_message(), None);
	}

	#[test]
	fn test_payload() {
		assert_eq!(
			RespValue::simple_string("PONG").payload(),
			Some(&Bytes::from("PONG"))
		);
		let verbatim = RespValue::VerbatimString {
			format: Bytes::from("txt"),
			data: Bytes::from("Some string"),
		};
		assert_eq!(verbatim.payload(), Some(&Bytes::from("Some string")));
		assert_eq!(RespValue::Integer(42).payload(), None);
	}

	#[test]
	fn test_type_name() {
		assert_eq!(RespValue::Null.type_name(), "null");
		assert_eq!(RespValue::Integer(1).type_name(), "integer");
		assert_eq!(RespValue::map(Vec::new()).type_name(), "map");
		assert_eq!(RespValue::set(Vec::new()).type_name(), "set");
	}

	#[test]
	fn test_variants_are_distinct() {
		assert_ne!(RespValue::simple_string("a"), RespValue::bulk_string("a"));
		assert_ne!(RespValue::Integer(1), RespValue::Double(1.0));
	}

	#[test]
	fn test_hash_agrees_with_eq() {
		assert_eq!(
			hash_of(&RespValue::Double(0.0)),
			hash_of(&RespValue::Double(-0.0))
		);
		assert_eq!(
			hash_of(&RespValue::array(vec![RespValue::from("x")])),
			hash_of(&RespValue::array(vec![RespValue::from("x")]))
		);

		let a = RespValue::set(vec![RespValue::from("a"), RespValue::from("b")]);
		let b = RespValue::set(vec![RespValue::from("b"), RespValue::from("a")]);
		assert_eq!(a, b);
		assert_eq!(hash_of(&a), hash_of(&b));
	}

	#[test]
	fn test_nested_keys() {
		let key = RespValue::array(vec![RespValue::Integer(1), RespValue::Integer(2)]);
		let m = RespValue::map(vec![(key.clone(), RespValue::Boolean(true))]);
		match m {
			RespValue::Map(m) => assert_eq!(m.get(&key), Some(&RespValue::Boolean(true))),
			other => panic!("expected map, got {other:?}"),
		}
	}

	#[test]
	fn test_into_vec() {
		let arr = RespValue::array(vec![RespValue::Integer(1), RespValue::Integer(2)]);
		assert_eq!(
			arr.into_vec(),
			Some(vec![RespValue::Integer(1), RespValue::Integer(2)])
		);

		let set = RespValue::set(vec![RespValue::Integer(1), RespValue::Integer(1)]);
		assert_eq!(set.into_vec().map(|v| v.len()), Some(1));

		assert!(RespValue::Null.into_vec().is_none());
	}
}
