//! Callbacks that map an absent reply to `None`.
//!
//! Null, an empty string and an empty collection are absent. Every other
//! reply goes through the same coercion as the non-optional counterpart, so
//! `0` stays `Some(0)` and a malformed value is still an error.

use std::collections::HashSet;

use resp::RespValue;
use resp::coerce;

use crate::callback::SimpleCallback;
use crate::collection::to_set;
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalFloatCallback;

impl SimpleCallback for OptionalFloatCallback {
	type Output = Option<f64>;

	fn transform(&self, response: RespValue) -> Result<Option<f64>> {
		if coerce::is_absent(&response) {
			return Ok(None);
		}
		Ok(Some(coerce::to_f64(&response)?))
	}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalIntCallback;

impl SimpleCallback for OptionalIntCallback {
	type Output = Option<i64>;

	fn transform(&self, response: RespValue) -> Result<Option<i64>> {
		if coerce::is_absent(&response) {
			return Ok(None);
		}
		Ok(Some(coerce::to_i64(&response)?))
	}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalSetCallback;

impl SimpleCallback for OptionalSetCallback {
	type Output = Option<HashSet<RespValue>>;

	fn transform(&self, response: RespValue) -> Result<Option<HashSet<RespValue>>> {
		if coerce::is_absent(&response) {
			return Ok(None);
		}
		to_set(response).map(Some)
	}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalTupleCallback;

impl SimpleCallback for OptionalTupleCallback {
	type Output = Option<Box<[RespValue]>>;

	fn transform(&self, response: RespValue) -> Result<Option<Box<[RespValue]>>> {
		if coerce::is_absent(&response) {
			return Ok(None);
		}
		Ok(Some(coerce::into_sequence(response)?.into_boxed_slice()))
	}
}
