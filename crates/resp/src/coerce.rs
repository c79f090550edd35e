//! Primitive coercions over decoded replies.
//!
//! These are the building blocks of every response callback: truthiness,
//! numeric conversion, sequence extraction and status checks. None of them
//! swallow a failure into a default value.

use crate::RespValue;
use crate::error::CoerceError;
use crate::utils::parse_double;
use crate::utils::parse_integer;

/// Truthiness of a reply.
///
/// Null, zero, empty strings and empty collections are false, everything
/// else is true. Error replies are never truthy.
pub fn is_truthy(value: &RespValue) -> bool {
	match value {
		RespValue::Null => false,
		RespValue::Boolean(b) => *b,
		RespValue::Integer(i) => *i != 0,
		RespValue::Double(d) => *d != 0.0,
		RespValue::BigNumber(n) => n.iter().any(|&b| b.is_ascii_digit() && b != b'0'),
		RespValue::SimpleString(s) | RespValue::BulkString(s) => !s.is_empty(),
		RespValue::VerbatimString { data, .. } => !data.is_empty(),
		RespValue::Array(a) | RespValue::Push(a) => !a.is_empty(),
		RespValue::Map(m) => !m.is_empty(),
		RespValue::Set(s) => !s.is_empty(),
		RespValue::Error(_) | RespValue::BulkError(_) => false,
	}
}

/// Whether a reply stands for "no value".
///
/// Unlike [`is_truthy`], numeric zero and `false` are present values.
pub fn is_absent(value: &RespValue) -> bool {
	match value {
		RespValue::Null => true,
		RespValue::SimpleString(s) | RespValue::BulkString(s) => s.is_empty(),
		RespValue::Array(a) | RespValue::Push(a) => a.is_empty(),
		RespValue::Map(m) => m.is_empty(),
		RespValue::Set(s) => s.is_empty(),
		_ => false,
	}
}

/// Convert a numeric-like reply to `f64`.
pub fn to_f64(value: &RespValue) -> Result<f64, CoerceError> {
	match value {
		RespValue::Double(d) => Ok(*d),
		RespValue::Integer(i) => Ok(*i as f64),
		RespValue::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
		RespValue::BigNumber(n) => parse_double(n),
		other => match other.payload() {
			Some(text) => parse_double(text),
			None => Err(CoerceError::unexpected("double", other)),
		},
	}
}

/// Convert an integer-like reply to `i64`.
///
/// Doubles are accepted only when they hold an integral value in range.
pub fn to_i64(value: &RespValue) -> Result<i64, CoerceError> {
	match value {
		RespValue::Integer(i) => Ok(*i),
		RespValue::Boolean(b) => Ok(i64::from(*b)),
		RespValue::Double(d) => {
			// `i64::MAX as f64` rounds up to 2^63
			if d.fract() == 0.0 && *d >= i64::MIN as f64 && *d < i64::MAX as f64 {
				Ok(*d as i64)
			} else {
				Err(CoerceError::InvalidInteger(d.to_string()))
			}
		}
		RespValue::BigNumber(n) => parse_integer(n),
		other => match other.payload() {
			Some(text) => parse_integer(text),
			None => Err(CoerceError::unexpected("integer", other)),
		},
	}
}

/// Take the elements of a sequence-shaped reply, preserving wire order.
pub fn into_sequence(value: RespValue) -> Result<Vec<RespValue>, CoerceError> {
	match value {
		RespValue::Array(a) | RespValue::Push(a) => Ok(a),
		RespValue::Set(s) => Ok(s.into_iter().collect()),
		other => Err(CoerceError::unexpected("array", &other)),
	}
}

/// Whether a reply is the status `OK`.
pub fn is_ok_status(value: &RespValue) -> bool {
	value.payload().is_some_and(|s| s.as_ref() == b"OK")
}

#[cfg(test)]
mod tests {
	use bytes::Bytes;
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(RespValue::Null, false)]
	#[case(RespValue::Integer(0), false)]
	#[case(RespValue::Integer(-1), true)]
	#[case(RespValue::Double(0.0), false)]
	#[case(RespValue::Double(0.5), true)]
	#[case(RespValue::Boolean(true), true)]
	#[case(RespValue::Boolean(false), false)]
	#[case(RespValue::bulk_string(""), false)]
	#[case(RespValue::bulk_string("0"), true)]
	#[case(RespValue::simple_string("OK"), true)]
	#[case(RespValue::BigNumber(Bytes::from("0")), false)]
	#[case(RespValue::BigNumber(Bytes::from("-12345678901234567890")), true)]
	#[case(RespValue::array(Vec::new()), false)]
	#[case(RespValue::array(vec![RespValue::Null]), true)]
	#[case(RespValue::error("ERR"), false)]
	fn test_is_truthy(#[case] value: RespValue, #[case] expected: bool) {
		assert_eq!(is_truthy(&value), expected);
	}

	#[rstest]
	#[case(RespValue::Null, true)]
	#[case(RespValue::bulk_string(""), true)]
	#[case(RespValue::set(Vec::new()), true)]
	#[case(RespValue::Integer(0), false)]
	#[case(RespValue::Boolean(false), false)]
	#[case(RespValue::bulk_string("x"), false)]
	fn test_is_absent(#[case] value: RespValue, #[case] expected: bool) {
		assert_eq!(is_absent(&value), expected);
	}

	#[test]
	fn test_to_f64() {
		assert_eq!(to_f64(&RespValue::Double(1.25)).unwrap(), 1.25);
		assert_eq!(to_f64(&RespValue::Integer(3)).unwrap(), 3.0);
		assert_eq!(to_f64(&RespValue::bulk_string("2.5")).unwrap(), 2.5);
		assert_eq!(to_f64(&RespValue::bulk_string("-inf")).unwrap(), f64::NEG_INFINITY);
		assert!(matches!(
			to_f64(&RespValue::bulk_string("abc")),
			Err(CoerceError::InvalidDouble(_))
		));
		assert_eq!(
			to_f64(&RespValue::Null),
			Err(CoerceError::UnexpectedType {
				expected: "double",
				found: "null",
			})
		);
	}

	#[test]
	fn test_to_i64() {
		assert_eq!(to_i64(&RespValue::Integer(5)).unwrap(), 5);
		assert_eq!(to_i64(&RespValue::bulk_string("42")).unwrap(), 42);
		assert_eq!(to_i64(&RespValue::Double(7.0)).unwrap(), 7);
		assert_eq!(to_i64(&RespValue::Boolean(true)).unwrap(), 1);
		assert!(to_i64(&RespValue::Double(7.5)).is_err());
		assert!(to_i64(&RespValue::bulk_string("4.2")).is_err());
		assert!(to_i64(&RespValue::array(Vec::new())).is_err());
	}

	#[test]
	fn test_to_i64_double_bounds() {
		assert_eq!(to_i64(&RespValue::Double(-9_223_372_036_854_775_808.0)).unwrap(), i64::MIN);
		assert!(matches!(
			to_i64(&RespValue::Double(9_223_372_036_854_775_808.0)),
			Err(CoerceError::InvalidInteger(_))
		));
		assert!(matches!(
			to_i64(&RespValue::Double(1e300)),
			Err(CoerceError::InvalidInteger(_))
		));
	}

	#[test]
	fn test_into_sequence() {
		let arr = RespValue::array(vec![RespValue::Integer(1), RespValue::Integer(2)]);
		assert_eq!(
			into_sequence(arr).unwrap(),
			vec![RespValue::Integer(1), RespValue::Integer(2)]
		);
		assert!(into_sequence(RespValue::Integer(1)).is_err());
	}

	#[test]
	fn test_is_ok_status() {
		assert!(is_ok_status(&RespValue::simple_string("OK")));
		assert!(is_ok_status(&RespValue::bulk_string("OK")));
		assert!(!is_ok_status(&RespValue::simple_string("QUEUED")));
		assert!(!is_ok_status(&RespValue::simple_string("ok")));
		assert!(!is_ok_status(&RespValue::Integer(1)));
	}
}
