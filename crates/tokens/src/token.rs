use std::borrow::Borrow;
use std::borrow::Cow;
use std::fmt;

use bytes::Bytes;
use resp::TextEncoding;

/// A keyword as the caller supplied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword<'a> {
	Text(&'a str),
	Bytes(&'a [u8]),
}

/// Anything that can be compared with a token: text, byte strings and the
/// tokens themselves.
pub trait TokenInput {
	fn keyword(&self) -> Keyword<'_>;
}

impl TokenInput for str {
	fn keyword(&self) -> Keyword<'_> {
		Keyword::Text(self)
	}
}

impl TokenInput for String {
	fn keyword(&self) -> Keyword<'_> {
		Keyword::Text(self)
	}
}

impl TokenInput for [u8] {
	fn keyword(&self) -> Keyword<'_> {
		Keyword::Bytes(self)
	}
}

impl<const N: usize> TokenInput for [u8; N] {
	fn keyword(&self) -> Keyword<'_> {
		Keyword::Bytes(self)
	}
}

impl TokenInput for Vec<u8> {
	fn keyword(&self) -> Keyword<'_> {
		Keyword::Bytes(self)
	}
}

impl TokenInput for Bytes {
	fn keyword(&self) -> Keyword<'_> {
		Keyword::Bytes(self)
	}
}

impl<T: TokenInput + ?Sized> TokenInput for &T {
	fn keyword(&self) -> Keyword<'_> {
		(**self).keyword()
	}
}

/// Upper-cased text of `input`.
///
/// Byte strings are decoded with `encoding` first; `None` when they are not
/// valid in it. Already-normalized ASCII is returned without allocating.
pub fn normalize<T: TokenInput + ?Sized>(
	input: &T,
	encoding: TextEncoding,
) -> Option<Cow<'_, str>> {
	let text = match input.keyword() {
		Keyword::Text(s) => Cow::Borrowed(s),
		Keyword::Bytes(b) => encoding.decode(b).ok()?,
	};
	if text.is_ascii() && !text.bytes().any(|b| b.is_ascii_lowercase()) {
		return Some(text);
	}
	Some(Cow::Owned(text.to_uppercase()))
}

/// A member of a keyword table.
///
/// Comparison ignores letter case and the text encoding of the other side:
/// `MAXLEN` equals `"maxlen"`, `"MaxLen"` and `b"MAXLEN"`.
pub trait Token: Copy + 'static {
	/// Canonical wire value
	fn as_str(self) -> &'static str;

	/// Symbolic name, e.g. `CHANGE` for the `CH` keyword
	fn name(self) -> &'static str;

	/// User commands that accept this keyword
	fn commands(self) -> &'static [&'static str];

	fn as_bytes(self) -> &'static [u8] {
		self.as_str().as_bytes()
	}

	fn matches_encoded<T: TokenInput + ?Sized>(self, input: &T, encoding: TextEncoding) -> bool {
		normalize(input, encoding).is_some_and(|n| n == self.as_str())
	}

	fn matches<T: TokenInput + ?Sized>(self, input: &T) -> bool {
		self.matches_encoded(input, TextEncoding::Utf8)
	}
}

/// Normalized keyword, usable as a hash map key next to tokens.
///
/// Hashes like the token it normalizes to, and borrows as `str` so an
/// index keyed by `TokenKey` can be queried with normalized text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenKey(Box<str>);

impl TokenKey {
	pub fn new<T: TokenInput + ?Sized>(input: &T) -> Option<Self> {
		Self::new_encoded(input, TextEncoding::Utf8)
	}

	pub fn new_encoded<T: TokenInput + ?Sized>(input: &T, encoding: TextEncoding) -> Option<Self> {
		normalize(input, encoding).map(|n| TokenKey(n.into()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl<T: Token> From<T> for TokenKey {
	fn from(token: T) -> Self {
		TokenKey(token.as_str().into())
	}
}

impl Borrow<str> for TokenKey {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for TokenKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Declares a closed keyword table.
///
/// Each entry is `NAME = "VALUE" => ["COMMAND", ...]`. The table becomes a
/// `Copy` type with one associated constant per entry; values are stored
/// upper-cased so normalized input compares byte for byte.
macro_rules! define_tokens {
	(@reverse_eq $table:ident: $($other:ty),*) => {
		$(
			impl PartialEq<$table> for $other {
				fn eq(&self, token: &$table) -> bool {
					$crate::Token::matches(*token, self)
				}
			}

			impl PartialEq<$table> for &$other {
				fn eq(&self, token: &$table) -> bool {
					$crate::Token::matches(*token, *self)
				}
			}
		)*
	};

	(
		$(#[$meta:meta])*
		$vis:vis struct $table:ident {
			$(
				$konst:ident = $value:literal => [$($cmd:literal),* $(,)?],
			)*
		}
	) => {
		$(#[$meta])*
		#[derive(Clone, Copy)]
		$vis struct $table {
			name: &'static str,
			value: &'static str,
			commands: &'static [&'static str],
		}

		impl $table {
			$(
				#[doc = concat!("`", $value, "`")]
				pub const $konst: Self = Self {
					name: stringify!($konst),
					value: $value,
					commands: &[$($cmd),*],
				};
			)*

			/// Every member in declaration order
			pub const ALL: &'static [Self] = &[$(Self::$konst),*];

			/// Resolve arbitrary input to its member.
			pub fn lookup<T: $crate::TokenInput + ?Sized>(input: &T) -> Option<Self> {
				Self::lookup_encoded(input, ::resp::TextEncoding::Utf8)
			}

			pub fn lookup_encoded<T: $crate::TokenInput + ?Sized>(
				input: &T,
				encoding: ::resp::TextEncoding,
			) -> Option<Self> {
				static INDEX: ::std::sync::OnceLock<
					::std::collections::HashMap<$crate::TokenKey, $table>,
				> = ::std::sync::OnceLock::new();

				let index = INDEX.get_or_init(|| {
					::log::debug!(
						"building {} index over {} keywords",
						stringify!($table),
						Self::ALL.len()
					);
					Self::ALL
						.iter()
						.map(|&token| ($crate::TokenKey::from(token), token))
						.collect()
				});
				let key = $crate::normalize(input, encoding)?;
				index.get(&*key).copied()
			}
		}

		impl $crate::Token for $table {
			fn as_str(self) -> &'static str {
				self.value
			}

			fn name(self) -> &'static str {
				self.name
			}

			fn commands(self) -> &'static [&'static str] {
				self.commands
			}
		}

		impl $crate::TokenInput for $table {
			fn keyword(&self) -> $crate::Keyword<'_> {
				$crate::Keyword::Text(self.value)
			}
		}

		impl<T: $crate::TokenInput + ?Sized> PartialEq<T> for $table {
			fn eq(&self, other: &T) -> bool {
				$crate::Token::matches(*self, other)
			}
		}

		impl Eq for $table {}

		impl ::std::hash::Hash for $table {
			fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
				::std::hash::Hash::hash(self.value, state);
			}
		}

		impl ::std::fmt::Debug for $table {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				write!(f, "{}::{}", stringify!($table), self.name)
			}
		}

		impl ::std::fmt::Display for $table {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str(self.value)
			}
		}

		impl AsRef<[u8]> for $table {
			fn as_ref(&self) -> &[u8] {
				self.value.as_bytes()
			}
		}

		impl From<$table> for ::bytes::Bytes {
			fn from(token: $table) -> Self {
				::bytes::Bytes::from_static(token.value.as_bytes())
			}
		}

		$crate::token::define_tokens!(@reverse_eq $table: str, String, [u8], Vec<u8>, ::bytes::Bytes);
	};
}

pub(crate) use define_tokens;

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use rstest::rstest;

	use super::*;

	define_tokens! {
		struct Sample {
			MAXLEN = "MAXLEN" => ["XADD", "XTRIM"],
			CHANGE = "CH" => ["ZADD"],
			EMPTY = "" => [],
		}
	}

	#[rstest]
	#[case("MAXLEN", "MAXLEN")]
	#[case("maxlen", "MAXLEN")]
	#[case("MaxLen", "MAXLEN")]
	#[case("std.p", "STD.P")]
	fn test_normalize_text(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(normalize(input, TextEncoding::Utf8).unwrap(), expected);
	}

	#[test]
	fn test_normalize_borrows_when_already_canonical() {
		assert!(matches!(
			normalize("WITHSCORES", TextEncoding::Utf8),
			Some(Cow::Borrowed(_))
		));
	}

	#[test]
	fn test_normalize_bytes() {
		assert_eq!(normalize(b"maxlen", TextEncoding::Utf8).unwrap(), "MAXLEN");
		// "é" encoded as Latin-1 is invalid UTF-8
		assert!(normalize(b"caf\xe9", TextEncoding::Utf8).is_none());
		assert_eq!(normalize(b"caf\xe9", TextEncoding::Latin1).unwrap(), "CAFÉ");
	}

	#[test]
	fn test_sample_table() {
		assert_eq!(Sample::ALL.len(), 3);
		assert_eq!(Sample::CHANGE.as_bytes(), b"CH");
		assert_eq!(Sample::CHANGE.name(), "CHANGE");
		assert_eq!(Sample::MAXLEN.commands(), &["XADD", "XTRIM"]);
		assert_eq!(format!("{:?}", Sample::CHANGE), "Sample::CHANGE");
		assert_eq!(Sample::CHANGE.to_string(), "CH");
	}

	#[test]
	fn test_eq_both_directions() {
		assert_eq!(Sample::CHANGE, "ch");
		assert_eq!("ch", Sample::CHANGE);
		assert_eq!(String::from("Ch"), Sample::CHANGE);
		assert_eq!(Bytes::from_static(b"cH"), Sample::CHANGE);
		assert_eq!(Sample::EMPTY, "");
		assert_ne!(Sample::CHANGE, Sample::MAXLEN);
	}

	#[test]
	fn test_lookup() {
		assert_eq!(Sample::lookup("maxlen"), Some(Sample::MAXLEN));
		assert_eq!(Sample::lookup(&b"Ch"[..]), Some(Sample::CHANGE));
		assert_eq!(Sample::lookup(""), Some(Sample::EMPTY));
		assert!(Sample::lookup("MAXLENX").is_none());
	}

	#[test]
	fn test_key_agrees_with_token() {
		let keys: HashSet<TokenKey> = Sample::ALL.iter().map(|&t| TokenKey::from(t)).collect();
		assert!(keys.contains(&TokenKey::new("maxLen").unwrap()));
		assert!(keys.contains("CH"));
		assert!(!keys.contains(&TokenKey::new("CHX").unwrap()));
	}

	#[test]
	fn test_into_bytes() {
		let arg: Bytes = Sample::MAXLEN.into();
		assert_eq!(arg, Bytes::from_static(b"MAXLEN"));
	}
}
