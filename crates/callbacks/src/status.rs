use std::fmt;
use std::sync::Arc;

use resp::RespValue;
use resp::coerce;

use crate::callback::SimpleCallback;
use crate::error::BoxError;
use crate::error::CallbackError;
use crate::error::Result;

type ErrorFactory = Arc<dyn Fn(RespValue) -> BoxError + Send + Sync>;

/// Status reply callback: `true` iff the server answered `OK`.
///
/// By default a non-`OK` reply yields `false`. A callback built with
/// [`SimpleStringCallback::raise_on_error`] instead fails with
/// [`CallbackError::Raised`], carrying the error the factory built from the
/// raw reply.
#[derive(Clone, Default)]
pub struct SimpleStringCallback {
	raise_on_error: Option<ErrorFactory>,
}

impl SimpleStringCallback {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn raise_on_error<E, F>(factory: F) -> Self
	where
		E: std::error::Error + Send + Sync + 'static,
		F: Fn(RespValue) -> E + Send + Sync + 'static,
	{
		Self {
			raise_on_error: Some(Arc::new(move |reply| Box::new(factory(reply)) as BoxError)),
		}
	}

	pub fn raises(&self) -> bool {
		self.raise_on_error.is_some()
	}
}

impl fmt::Debug for SimpleStringCallback {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SimpleStringCallback")
			.field("raise_on_error", &self.raises())
			.finish()
	}
}

impl SimpleCallback for SimpleStringCallback {
	type Output = bool;

	fn transform(&self, response: RespValue) -> Result<bool> {
		if coerce::is_ok_status(&response) {
			return Ok(true);
		}
		match &self.raise_on_error {
			Some(factory) => Err(CallbackError::Raised(factory(response))),
			None => Ok(false),
		}
	}
}

/// Result of [`SimpleStringOrIntCallback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOrInt {
	Int(i64),
	Bool(bool),
}

/// Passes integer and boolean replies through, treats anything else as a
/// status reply.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleStringOrIntCallback;

impl SimpleCallback for SimpleStringOrIntCallback {
	type Output = StatusOrInt;

	fn transform(&self, response: RespValue) -> Result<StatusOrInt> {
		match response {
			RespValue::Integer(i) => Ok(StatusOrInt::Int(i)),
			RespValue::Boolean(b) => Ok(StatusOrInt::Bool(b)),
			other => SimpleStringCallback::new()
				.transform(other)
				.map(StatusOrInt::Bool),
		}
	}
}

#[cfg(test)]
mod tests {
	use resp::ProtocolVersion;
	use rstest::rstest;
	use thiserror::Error;

	use super::*;
	use crate::Callback;

	#[derive(Error, Debug)]
	#[error("authentication failed: {reply:?}")]
	struct AuthenticationFailure {
		reply: RespValue,
	}

	#[rstest]
	#[case(RespValue::simple_string("OK"), true)]
	#[case(RespValue::bulk_string("OK"), true)]
	#[case(RespValue::simple_string("QUEUED"), false)]
	#[case(RespValue::Null, false)]
	#[case(RespValue::Integer(1), false)]
	fn test_status(#[case] reply: RespValue, #[case] expected: bool) {
		let cb = SimpleStringCallback::new();
		assert_eq!(cb.call(reply.clone(), ProtocolVersion::V2).unwrap(), expected);
		assert_eq!(cb.call(reply, ProtocolVersion::V3).unwrap(), expected);
	}

	#[test]
	fn test_raise_on_error() {
		let cb = SimpleStringCallback::raise_on_error(|reply| AuthenticationFailure { reply });
		assert!(cb.call(RespValue::simple_string("OK"), ProtocolVersion::V3).unwrap());

		let err = cb
			.call(RespValue::simple_string("NOPE"), ProtocolVersion::V3)
			.unwrap_err();
		let raised = err
			.downcast_raised::<AuthenticationFailure>()
			.expect("raised error should be the configured type");
		assert_eq!(raised.reply, RespValue::simple_string("NOPE"));
	}

	#[test]
	fn test_error_reply_is_not_raised() {
		let cb = SimpleStringCallback::raise_on_error(|reply| AuthenticationFailure { reply });
		let err = cb
			.call(RespValue::error("WRONGPASS invalid"), ProtocolVersion::V2)
			.unwrap_err();
		assert!(err.is_reply());
	}

	#[test]
	fn test_debug_hides_factory() {
		let cb = SimpleStringCallback::raise_on_error(|reply| AuthenticationFailure { reply });
		assert_eq!(
			format!("{cb:?}"),
			"SimpleStringCallback { raise_on_error: true }"
		);
	}

	#[rstest]
	#[case(RespValue::Integer(0), StatusOrInt::Int(0))]
	#[case(RespValue::Integer(12), StatusOrInt::Int(12))]
	#[case(RespValue::Boolean(true), StatusOrInt::Bool(true))]
	#[case(RespValue::simple_string("OK"), StatusOrInt::Bool(true))]
	#[case(RespValue::simple_string("NOKEY"), StatusOrInt::Bool(false))]
	fn test_status_or_int(#[case] reply: RespValue, #[case] expected: StatusOrInt) {
		assert_eq!(
			SimpleStringOrIntCallback
				.call(reply, ProtocolVersion::V3)
				.unwrap(),
			expected
		);
	}
}
