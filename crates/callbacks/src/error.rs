//! Error types for response callbacks.

use bytes::Bytes;
use resp::CoerceError;
use thiserror::Error;

/// Boxed error produced by a `raise_on_error` factory.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, CallbackError>;

/// Failure of a callback invocation.
#[derive(Error, Debug)]
pub enum CallbackError {
	/// The server answered with an error reply
	#[error("{}", String::from_utf8_lossy(.0))]
	Reply(Bytes),

	/// A well-formed reply signalled failure and the callback was
	/// configured to raise
	#[error("{0}")]
	Raised(#[source] BoxError),

	/// The reply cannot be converted to the requested type
	#[error("Coercion failed: {0}")]
	Coercion(#[from] CoerceError),

	/// A call-time parameter has an unusable value
	#[error("Invalid value {value:?} for parameter '{name}'")]
	InvalidParameter { name: String, value: String },

	/// The reply is outside the range of the target type
	#[error("Value out of range: {0}")]
	OutOfRange(String),
}

impl CallbackError {
	/// Wrap a caller-defined error as a semantic failure.
	pub fn raised<E>(err: E) -> Self
	where
		E: std::error::Error + Send + Sync + 'static,
	{
		CallbackError::Raised(Box::new(err))
	}

	/// The caller-defined error behind a semantic failure, if it has type `E`.
	pub fn downcast_raised<E>(&self) -> Option<&E>
	where
		E: std::error::Error + 'static,
	{
		match self {
			CallbackError::Raised(err) => err.downcast_ref::<E>(),
			_ => None,
		}
	}

	pub fn is_reply(&self) -> bool {
		matches!(self, CallbackError::Reply(_))
	}

	pub fn is_coercion(&self) -> bool {
		matches!(self, CallbackError::Coercion(_))
	}
}
