use resp::RespValue;
use resp::coerce;

use crate::callback::SimpleCallback;
use crate::error::Result;

/// Numeric reply as `f64`. Doubles pass through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatCallback;

impl SimpleCallback for FloatCallback {
	type Output = f64;

	fn transform(&self, response: RespValue) -> Result<f64> {
		Ok(coerce::to_f64(&response)?)
	}
}

/// Integer reply as `i64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntCallback;

impl SimpleCallback for IntCallback {
	type Output = i64;

	fn transform(&self, response: RespValue) -> Result<i64> {
		Ok(coerce::to_i64(&response)?)
	}
}

/// Any reply as `bool`, by truthiness unless it already is a boolean.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolCallback;

impl SimpleCallback for BoolCallback {
	type Output = bool;

	fn transform(&self, response: RespValue) -> Result<bool> {
		Ok(coerce::is_truthy(&response))
	}
}

/// Returns the reply unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCallback;

impl SimpleCallback for NoopCallback {
	type Output = RespValue;

	fn transform(&self, response: RespValue) -> Result<RespValue> {
		Ok(response)
	}
}
