//! # Tokens - protocol keywords
//!
//! The closed vocabulary of keywords a command may put on the wire.
//! [`PureToken`] holds bare keywords (`WITHSCORES`, `NX`), [`PrefixToken`]
//! holds keywords that introduce a value (`LIMIT`, `MATCH`). Both compare
//! against text or bytes regardless of letter case and of the client's
//! [`TextEncoding`](resp::TextEncoding).
//!
//! ## Example
//!
//! ```rust
//! use bytes::Bytes;
//! use tokens::PureToken;
//! use tokens::Token;
//!
//! assert_eq!(PureToken::MAXLEN, "maxlen");
//! assert!(PureToken::CHANGE.matches(b"ch"));
//! assert_eq!(PureToken::lookup("WithScores"), Some(PureToken::WITHSCORES));
//!
//! let arg: Bytes = PureToken::CHANGE.into();
//! assert_eq!(arg, "CH");
//! ```

mod prefix;
mod pure;
mod token;

pub use prefix::PrefixToken;
pub use pure::PureToken;
pub use token::Keyword;
pub use token::Token;
pub use token::TokenInput;
pub use token::TokenKey;
pub use token::normalize;
