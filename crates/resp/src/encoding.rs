use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::CoerceError;

/// Text encoding the client uses between `str` and wire bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TextEncoding {
	#[default]
	Utf8,
	/// ISO-8859-1: every byte maps to the code point of the same value
	Latin1,
}

impl TextEncoding {
	pub fn label(self) -> &'static str {
		match self {
			TextEncoding::Utf8 => "utf-8",
			TextEncoding::Latin1 => "latin-1",
		}
	}

	/// Decode wire bytes into text.
	pub fn decode(self, bytes: &[u8]) -> Result<Cow<'_, str>, CoerceError> {
		match self {
			TextEncoding::Utf8 => {
				std::str::from_utf8(bytes)
					.map(Cow::Borrowed)
					.map_err(|e| CoerceError::InvalidText {
						encoding: self.label(),
						reason: e.to_string(),
					})
			}
			TextEncoding::Latin1 => {
				if bytes.is_ascii() {
					// ASCII is identical in both encodings
					return Ok(Cow::Borrowed(
						std::str::from_utf8(bytes).unwrap_or_default(),
					));
				}
				Ok(Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()))
			}
		}
	}

	/// Encode text into wire bytes.
	pub fn encode(self, text: &str) -> Result<Cow<'_, [u8]>, CoerceError> {
		match self {
			TextEncoding::Utf8 => Ok(Cow::Borrowed(text.as_bytes())),
			TextEncoding::Latin1 => {
				if text.is_ascii() {
					return Ok(Cow::Borrowed(text.as_bytes()));
				}
				text.chars()
					.map(|c| {
						u8::try_from(u32::from(c)).map_err(|_| CoerceError::InvalidText {
							encoding: self.label(),
							reason: format!("character {c:?} is not representable"),
						})
					})
					.collect::<Result<Vec<u8>, _>>()
					.map(Cow::Owned)
			}
		}
	}
}

impl FromStr for TextEncoding {
	type Err = CoerceError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().replace('_', "-").as_str() {
			"utf-8" | "utf8" => Ok(TextEncoding::Utf8),
			"latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => Ok(TextEncoding::Latin1),
			_ => Err(CoerceError::UnknownEncoding(s.to_string())),
		}
	}
}

impl TryFrom<String> for TextEncoding {
	type Error = CoerceError;

	fn try_from(s: String) -> Result<Self, Self::Error> {
		s.parse()
	}
}

impl From<TextEncoding> for String {
	fn from(e: TextEncoding) -> Self {
		e.label().to_string()
	}
}

impl fmt::Display for TextEncoding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}
