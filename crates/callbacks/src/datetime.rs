use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use resp::ProtocolVersion;
use resp::RespValue;
use resp::coerce;

use crate::callback::Callback;
use crate::callback::ParametrizedCallback;
use crate::callback::invoke_parametrized;
use crate::error::CallbackError;
use crate::error::Result;
use crate::params::CallParams;

/// Unit of a timestamp reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
	#[default]
	Seconds,
	Milliseconds,
}

impl FromStr for TimeUnit {
	type Err = CallbackError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s {
			"seconds" => Ok(TimeUnit::Seconds),
			"milliseconds" => Ok(TimeUnit::Milliseconds),
			other => Err(CallbackError::InvalidParameter {
				name: DateTimeCallback::UNIT.to_string(),
				value: other.to_string(),
			}),
		}
	}
}

impl fmt::Display for TimeUnit {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TimeUnit::Seconds => f.write_str("seconds"),
			TimeUnit::Milliseconds => f.write_str("milliseconds"),
		}
	}
}

/// Timestamp reply as a UTC calendar time.
///
/// The `unit` call parameter (`"seconds"` or `"milliseconds"`) says how to
/// read the number; seconds when absent. EXPIRETIME and PEXPIRETIME share
/// one instance and differ only in the parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeCallback;

impl DateTimeCallback {
	/// Name of the unit parameter
	pub const UNIT: &'static str = "unit";

	fn unit(params: &CallParams) -> Result<TimeUnit> {
		match params.get(Self::UNIT) {
			None => Ok(TimeUnit::Seconds),
			Some(value) => match value.as_str() {
				Some(s) => s.parse(),
				None => Err(CallbackError::InvalidParameter {
					name: Self::UNIT.to_string(),
					value: value.to_string(),
				}),
			},
		}
	}
}

impl ParametrizedCallback for DateTimeCallback {
	type Output = DateTime<Utc>;

	fn transform(&self, response: RespValue, params: &CallParams) -> Result<DateTime<Utc>> {
		let unit = Self::unit(params)?;

		// Integral timestamps convert exactly, anything else goes through f64
		if let Ok(ts) = coerce::to_i64(&response) {
			let converted = match unit {
				TimeUnit::Seconds => DateTime::from_timestamp(ts, 0),
				TimeUnit::Milliseconds => DateTime::from_timestamp_millis(ts),
			};
			return converted.ok_or_else(|| CallbackError::OutOfRange(format!("{ts} {unit}")));
		}

		let ts = coerce::to_f64(&response)?;
		let secs = match unit {
			TimeUnit::Seconds => ts,
			TimeUnit::Milliseconds => ts / 1000.0,
		};
		from_fractional_seconds(secs).ok_or_else(|| CallbackError::OutOfRange(format!("{ts} {unit}")))
	}
}

impl Callback for DateTimeCallback {
	type Output = DateTime<Utc>;

	fn invoke(
		&self,
		response: RespValue,
		version: ProtocolVersion,
		params: &CallParams,
	) -> Result<Self::Output> {
		invoke_parametrized(self, response, version, params)
	}
}

fn from_fractional_seconds(secs: f64) -> Option<DateTime<Utc>> {
	if !secs.is_finite() || secs < i64::MIN as f64 || secs > i64::MAX as f64 {
		return None;
	}
	let whole = secs.floor();
	let nanos = ((secs - whole) * 1e9).round() as u32;
	// Rounding can carry a full second
	let (whole, nanos) = if nanos >= 1_000_000_000 {
		(whole as i64 + 1, 0)
	} else {
		(whole as i64, nanos)
	};
	DateTime::from_timestamp(whole, nanos)
}
