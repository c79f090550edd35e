use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::error::CoerceError;

/// Reply dialect negotiated with the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ProtocolVersion {
	/// RESP2: maps and sets arrive as flat arrays
	V2,
	/// RESP3: native map, set, boolean and double replies
	#[default]
	V3,
}

impl ProtocolVersion {
	pub fn is_resp3(self) -> bool {
		self == ProtocolVersion::V3
	}
}

impl TryFrom<i64> for ProtocolVersion {
	type Error = CoerceError;

	fn try_from(v: i64) -> Result<Self, Self::Error> {
		match v {
			2 => Ok(ProtocolVersion::V2),
			3 => Ok(ProtocolVersion::V3),
			other => Err(CoerceError::UnsupportedVersion(other)),
		}
	}
}

impl TryFrom<u8> for ProtocolVersion {
	type Error = CoerceError;

	fn try_from(v: u8) -> Result<Self, Self::Error> {
		ProtocolVersion::try_from(i64::from(v))
	}
}

impl From<ProtocolVersion> for i64 {
	fn from(v: ProtocolVersion) -> Self {
		match v {
			ProtocolVersion::V2 => 2,
			ProtocolVersion::V3 => 3,
		}
	}
}

impl fmt::Display for ProtocolVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RESP{}", i64::from(*self))
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(2, ProtocolVersion::V2)]
	#[case(3, ProtocolVersion::V3)]
	fn test_from_integer(#[case] raw: i64, #[case] expected: ProtocolVersion) {
		assert_eq!(ProtocolVersion::try_from(raw).unwrap(), expected);
		assert_eq!(i64::from(expected), raw);
	}

	#[rstest]
	#[case(0)]
	#[case(1)]
	#[case(4)]
	#[case(-3)]
	fn test_unsupported_version(#[case] raw: i64) {
		assert_eq!(
			ProtocolVersion::try_from(raw),
			Err(CoerceError::UnsupportedVersion(raw))
		);
	}

	#[test]
	fn test_default_and_display() {
		assert_eq!(ProtocolVersion::default(), ProtocolVersion::V3);
		assert!(ProtocolVersion::V3.is_resp3());
		assert!(!ProtocolVersion::V2.is_resp3());
		assert_eq!(ProtocolVersion::V2.to_string(), "RESP2");
	}
}
