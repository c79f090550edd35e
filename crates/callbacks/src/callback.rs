//! The calling contract shared by every callback.

use resp::ProtocolVersion;
use resp::RespValue;

use crate::error::CallbackError;
use crate::error::Result;
use crate::params::CallParams;

/// A callback selected once per command and invoked for every reply.
///
/// Implementations are immutable after construction, so a single instance
/// can serve concurrent invocations without synchronization.
pub trait Callback: Send + Sync {
	type Output;

	/// Transform `response`, decoded under `version`, into the typed result.
	///
	/// Error replies are returned as [`CallbackError::Reply`] without
	/// reaching the transform.
	fn invoke(
		&self,
		response: RespValue,
		version: ProtocolVersion,
		params: &CallParams,
	) -> Result<Self::Output>;

	/// Invoke without call-time parameters
	fn call(&self, response: RespValue, version: ProtocolVersion) -> Result<Self::Output> {
		self.invoke(response, version, CallParams::empty())
	}
}

/// Type-erased callback, as held by a command table.
pub type BoxedCallback<T> = Box<dyn Callback<Output = T>>;

/// A callback whose result depends only on the reply and protocol version.
pub trait SimpleCallback: Send + Sync {
	type Output;

	fn transform(&self, response: RespValue) -> Result<Self::Output>;

	/// RESP3 override, defaults to [`SimpleCallback::transform`]
	fn transform_3(&self, response: RespValue) -> Result<Self::Output> {
		self.transform(response)
	}
}

/// A callback that also reads named parameters supplied per call.
pub trait ParametrizedCallback: Send + Sync {
	type Output;

	fn transform(&self, response: RespValue, params: &CallParams) -> Result<Self::Output>;

	/// RESP3 override, defaults to [`ParametrizedCallback::transform`]
	fn transform_3(&self, response: RespValue, params: &CallParams) -> Result<Self::Output> {
		self.transform(response, params)
	}
}

impl<T: SimpleCallback> Callback for T {
	type Output = T::Output;

	fn invoke(
		&self,
		response: RespValue,
		version: ProtocolVersion,
		_params: &CallParams,
	) -> Result<Self::Output> {
		let response = reject_error(response)?;
		match version {
			ProtocolVersion::V3 => self.transform_3(response),
			ProtocolVersion::V2 => self.transform(response),
		}
	}
}

/// Version dispatch for [`ParametrizedCallback`] implementors.
pub(crate) fn invoke_parametrized<C>(
	cb: &C,
	response: RespValue,
	version: ProtocolVersion,
	params: &CallParams,
) -> Result<C::Output>
where
	C: ParametrizedCallback + ?Sized,
{
	let response = reject_error(response)?;
	match version {
		ProtocolVersion::V3 => cb.transform_3(response, params),
		ProtocolVersion::V2 => cb.transform(response, params),
	}
}

pub(crate) fn reject_error(response: RespValue) -> Result<RespValue> {
	match response {
		RespValue::Error(msg) | RespValue::BulkError(msg) => Err(CallbackError::Reply(msg)),
		other => Ok(other),
	}
}
