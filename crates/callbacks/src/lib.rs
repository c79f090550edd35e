//! # Callbacks - typed results from decoded replies
//!
//! A callback turns one decoded [`RespValue`](resp::RespValue) into the
//! typed result of a command. Every callback shares one calling contract,
//! [`Callback::invoke`], which takes the reply, the negotiated
//! [`ProtocolVersion`](resp::ProtocolVersion) and the per-call
//! [`CallParams`].
//!
//! Callbacks come in two flavours:
//!
//! - [`SimpleCallback`]: the result depends on the reply and the protocol
//!   version only.
//! - [`ParametrizedCallback`]: the result also depends on named parameters
//!   supplied per call, such as the unit of a returned timestamp.
//!
//! Both define a version-agnostic `transform` and may override
//! `transform_3` where RESP3 changes the reply shape.
//!
//! ## Example
//!
//! ```rust
//! use callbacks::Callback;
//! use callbacks::SimpleStringCallback;
//! use resp::ProtocolVersion;
//! use resp::RespValue;
//!
//! let cb = SimpleStringCallback::new();
//! let ok = cb.call(RespValue::simple_string("OK"), ProtocolVersion::V2).unwrap();
//! assert!(ok);
//! ```

mod callback;
mod collection;
mod custom;
mod datetime;
mod error;
mod optional;
mod params;
mod primitive;
mod status;

pub use callback::BoxedCallback;
pub use callback::Callback;
pub use callback::ParametrizedCallback;
pub use callback::SimpleCallback;
pub use collection::BoolsCallback;
pub use collection::DictCallback;
pub use collection::ListCallback;
pub use collection::SetCallback;
pub use collection::TupleCallback;
pub use custom::FnCallback;
pub use datetime::DateTimeCallback;
pub use datetime::TimeUnit;
pub use error::BoxError;
pub use error::CallbackError;
pub use error::Result;
pub use optional::OptionalFloatCallback;
pub use optional::OptionalIntCallback;
pub use optional::OptionalSetCallback;
pub use optional::OptionalTupleCallback;
pub use params::CallParams;
pub use params::ParamValue;
pub use primitive::BoolCallback;
pub use primitive::FloatCallback;
pub use primitive::IntCallback;
pub use primitive::NoopCallback;
pub use status::SimpleStringCallback;
pub use status::SimpleStringOrIntCallback;
pub use status::StatusOrInt;
