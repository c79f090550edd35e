use std::fmt;
use std::marker::PhantomData;

use resp::ProtocolVersion;
use resp::RespValue;

use crate::callback::Callback;
use crate::callback::reject_error;
use crate::error::Result;
use crate::params::CallParams;

/// A closure installed in place of a built-in callback.
///
/// The closure sees the protocol version and the call parameters and
/// decides everything else itself. Error replies are still propagated before
/// it runs.
pub struct FnCallback<F, T> {
	f: F,
	_output: PhantomData<fn() -> T>,
}

impl<F, T> FnCallback<F, T>
where
	F: Fn(RespValue, ProtocolVersion, &CallParams) -> Result<T> + Send + Sync,
{
	pub fn new(f: F) -> Self {
		Self {
			f,
			_output: PhantomData,
		}
	}
}

impl<F, T> fmt::Debug for FnCallback<F, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FnCallback").finish_non_exhaustive()
	}
}

impl<F, T> Callback for FnCallback<F, T>
where
	F: Fn(RespValue, ProtocolVersion, &CallParams) -> Result<T> + Send + Sync,
{
	type Output = T;

	fn invoke(
		&self,
		response: RespValue,
		version: ProtocolVersion,
		params: &CallParams,
	) -> Result<T> {
		let response = reject_error(response)?;
		(self.f)(response, version, params)
	}
}
