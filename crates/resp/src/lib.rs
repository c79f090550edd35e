//! # RESP - decoded reply values
//!
//! The value model shared by the response layer of the client: a decoded
//! RESP2/RESP3 reply ([`RespValue`]), the negotiated [`ProtocolVersion`],
//! the client's [`TextEncoding`], and the primitive coercions every
//! response callback builds on.
//!
//! Turning socket bytes into a [`RespValue`] is the decoder's job and lives
//! outside this crate.
//!
//! ## Example
//!
//! ```rust
//! use resp::RespValue;
//!
//! let reply = RespValue::bulk_string("3.5");
//! assert_eq!(resp::coerce::to_f64(&reply).unwrap(), 3.5);
//! assert!(resp::coerce::is_truthy(&reply));
//! ```

pub mod coerce;
mod encoding;
mod error;
mod types;
mod utils;
mod version;

pub use encoding::TextEncoding;
pub use error::CoerceError;
pub use types::RespValue;
pub use version::ProtocolVersion;
