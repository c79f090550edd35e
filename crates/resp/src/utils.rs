//! Number parsing shared by the coercions.

use crate::error::CoerceError;

/// Parse an integer from a byte slice
#[inline]
pub fn parse_integer(buf: &[u8]) -> Result<i64, CoerceError> {
	let s = std::str::from_utf8(buf).map_err(|e| CoerceError::InvalidInteger(e.to_string()))?;
	Ok(s.trim().parse::<i64>()?)
}

/// Parse a double from a byte slice
#[inline]
pub fn parse_double(buf: &[u8]) -> Result<f64, CoerceError> {
	let s = std::str::from_utf8(buf).map_err(|e| CoerceError::InvalidDouble(e.to_string()))?;
	let s = s.trim();

	// Handle special values
	match s {
		"inf" | "+inf" => Ok(f64::INFINITY),
		"-inf" => Ok(f64::NEG_INFINITY),
		_ => s
			.parse::<f64>()
			.map_err(|e| CoerceError::InvalidDouble(format!("{s:?}: {e}"))),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_integer() {
		assert_eq!(parse_integer(b"123").unwrap(), 123);
		assert_eq!(parse_integer(b"-456").unwrap(), -456);
		assert_eq!(parse_integer(b" 7 ").unwrap(), 7);
		assert!(parse_integer(b"abc").is_err());
		assert!(parse_integer(b"1.5").is_err());
		assert!(parse_integer(&[0xff, 0xfe]).is_err());
	}

	#[test]
	fn test_parse_double() {
		assert_eq!(parse_double(b"2.25").unwrap(), 2.25);
		assert_eq!(parse_double(b"-2.5").unwrap(), -2.5);
		assert_eq!(parse_double(b"10").unwrap(), 10.0);
		assert_eq!(parse_double(b"inf").unwrap(), f64::INFINITY);
		assert_eq!(parse_double(b"+inf").unwrap(), f64::INFINITY);
		assert_eq!(parse_double(b"-inf").unwrap(), f64::NEG_INFINITY);
		assert!(parse_double(b"nan").unwrap().is_nan());
		assert!(parse_double(b"not-a-number").is_err());
		assert!(parse_double(b"").is_err());
	}
}
