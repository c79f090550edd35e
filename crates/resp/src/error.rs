//! Error types for reply coercion.

use thiserror::Error;

/// Errors raised while converting a reply into a primitive type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoerceError {
	/// The reply shape cannot represent the requested type
	#[error("Expected {expected}, found {found}")]
	UnexpectedType {
		expected: &'static str,
		found: &'static str,
	},

	/// Invalid integer value
	#[error("Invalid integer: {0}")]
	InvalidInteger(String),

	/// Invalid double value
	#[error("Invalid double: {0}")]
	InvalidDouble(String),

	/// Bytes are not valid text in the configured encoding
	#[error("Invalid {encoding} text: {reason}")]
	InvalidText {
		encoding: &'static str,
		reason: String,
	},

	/// Unknown protocol version
	#[error("Unsupported protocol version: {0}")]
	UnsupportedVersion(i64),

	/// Unknown text encoding label
	#[error("Unknown text encoding: {0}")]
	UnknownEncoding(String),
}

impl CoerceError {
	pub(crate) fn unexpected(expected: &'static str, found: &crate::RespValue) -> Self {
		CoerceError::UnexpectedType {
			expected,
			found: found.type_name(),
		}
	}
}

impl From<std::num::ParseIntError> for CoerceError {
	fn from(e: std::num::ParseIntError) -> Self {
		CoerceError::InvalidInteger(e.to_string())
	}
}

impl From<std::num::ParseFloatError> for CoerceError {
	fn from(e: std::num::ParseFloatError) -> Self {
		CoerceError::InvalidDouble(e.to_string())
	}
}
