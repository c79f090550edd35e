//! Callbacks for sequence, mapping and set shaped replies.

use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use resp::CoerceError;
use resp::RespValue;
use resp::coerce;

use crate::callback::SimpleCallback;
use crate::error::Result;

/// Ordered, fixed-length view of a sequence reply.
#[derive(Debug, Clone, Copy, Default)]
pub struct TupleCallback;

impl SimpleCallback for TupleCallback {
	type Output = Box<[RespValue]>;

	fn transform(&self, response: RespValue) -> Result<Box<[RespValue]>> {
		Ok(coerce::into_sequence(response)?.into_boxed_slice())
	}
}

/// Ordered list of the elements of a sequence reply.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCallback;

impl SimpleCallback for ListCallback {
	type Output = Vec<RespValue>;

	fn transform(&self, response: RespValue) -> Result<Vec<RespValue>> {
		Ok(coerce::into_sequence(response)?)
	}
}

type TransformFn = Arc<dyn Fn(RespValue) -> Result<HashMap<RespValue, RespValue>> + Send + Sync>;

/// Key/value mapping from a RESP3 map or a RESP2 array.
///
/// Without a transform function the conversion is generic:
/// - a map is returned as is;
/// - an array whose elements are all two-element arrays is read as pairs;
/// - any other array of even length is read as `key, value, key, value, ...`
///   where a repeated key keeps its last value.
///
/// The pair reading wins whenever it applies, under either protocol version:
/// `[[a, b], [c, d]]` becomes `{a: b, c: d}`, never `{[a, b]: [c, d]}`.
///
/// Commands whose arrays group entries differently supply their own
/// conversion through [`DictCallback::with_transform`], which then decides
/// alone for every protocol version.
#[derive(Clone, Default)]
pub struct DictCallback {
	transform_function: Option<TransformFn>,
}

impl DictCallback {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_transform<F>(f: F) -> Self
	where
		F: Fn(RespValue) -> Result<HashMap<RespValue, RespValue>> + Send + Sync + 'static,
	{
		Self {
			transform_function: Some(Arc::new(f)),
		}
	}
}

impl fmt::Debug for DictCallback {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DictCallback")
			.field("transform_function", &self.transform_function.is_some())
			.finish()
	}
}

impl SimpleCallback for DictCallback {
	type Output = HashMap<RespValue, RespValue>;

	fn transform(&self, response: RespValue) -> Result<HashMap<RespValue, RespValue>> {
		match &self.transform_function {
			Some(f) => f(response),
			None => pairs_to_map(response),
		}
	}
}

fn pairs_to_map(response: RespValue) -> Result<HashMap<RespValue, RespValue>> {
	let items = match response {
		RespValue::Map(m) => return Ok(m),
		RespValue::Array(items) => items,
		other => {
			return Err(CoerceError::UnexpectedType {
				expected: "map",
				found: other.type_name(),
			}
			.into());
		}
	};

	let nested = !items.is_empty()
		&& items
			.iter()
			.all(|item| matches!(item, RespValue::Array(pair) if pair.len() == 2));
	if nested {
		return Ok(items
			.into_iter()
			.filter_map(|item| {
				let mut pair = item.into_vec()?.into_iter();
				Some((pair.next()?, pair.next()?))
			})
			.collect());
	}

	if !items.len().is_multiple_of(2) {
		return Err(CoerceError::UnexpectedType {
			expected: "key/value pairs",
			found: "array of odd length",
		}
		.into());
	}

	let mut map = HashMap::with_capacity(items.len() / 2);
	let mut iter = items.into_iter();
	while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
		map.insert(key, value);
	}
	Ok(map)
}

pub(crate) fn to_set(response: RespValue) -> Result<HashSet<RespValue>> {
	match response {
		RespValue::Set(s) => Ok(s),
		RespValue::Null => Ok(HashSet::new()),
		RespValue::Map(m) => Ok(m.into_keys().collect()),
		RespValue::Array(items) | RespValue::Push(items) => Ok(items.into_iter().collect()),
		other => Err(CoerceError::UnexpectedType {
			expected: "set",
			found: other.type_name(),
		}
		.into()),
	}
}

/// Unordered, duplicate-free members of a set reply. Null yields an empty
/// set and a map yields its keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetCallback;

impl SimpleCallback for SetCallback {
	type Output = HashSet<RespValue>;

	fn transform(&self, response: RespValue) -> Result<HashSet<RespValue>> {
		to_set(response)
	}
}

/// Truthiness of every element of an array reply.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolsCallback;

impl SimpleCallback for BoolsCallback {
	type Output = Box<[bool]>;

	fn transform(&self, response: RespValue) -> Result<Box<[bool]>> {
		Ok(coerce::into_sequence(response)?
			.iter()
			.map(coerce::is_truthy)
			.collect())
	}
}
