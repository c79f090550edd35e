//! Client configuration for the response layer
//!
//! A [`ClientConfig`] is fixed when the client is built: the protocol version
//! negotiated with the server and the text encoding used for keywords. It
//! applies both to every callback invocation and token comparison so command
//! code does not carry them around.
//!
//! # Example
//!
//! ```
//! use callbacks::SimpleStringCallback;
//! use config::ClientConfig;
//! use resp::ProtocolVersion;
//! use resp::RespValue;
//! use tokens::PureToken;
//!
//! let config = ClientConfig::from_toml_str("protocol_version = 2").unwrap();
//! assert_eq!(config.protocol_version, ProtocolVersion::V2);
//!
//! let reply = RespValue::simple_string("OK");
//! assert!(config.invoke(&SimpleStringCallback::new(), reply).unwrap());
//! assert!(config.token_matches(PureToken::WITHSCORES, b"withscores"));
//! ```

use std::path::Path;
use std::path::PathBuf;

use callbacks::CallParams;
use callbacks::Callback;
use log::info;
use log::warn;
use resp::CoerceError;
use resp::ProtocolVersion;
use resp::RespValue;
use resp::TextEncoding;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use tokens::Token;
use tokens::TokenInput;

/// Path tried when no configuration file is given
pub const DEFAULT_CONFIG_PATH: &str = "conf/client.toml";

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("Failed to read configuration file '{path}': {source}")]
	Io {
		source: std::io::Error,
		path: String,
	},

	#[error("Failed to parse TOML configuration: {0}")]
	TomlParse(#[from] toml::de::Error),

	#[error("Failed to parse JSON configuration: {0}")]
	JsonParse(#[from] serde_json::Error),

	#[error("Failed to parse YAML configuration: {0}")]
	YamlParse(#[from] serde_yaml::Error),

	#[error("Unsupported configuration format: {0}")]
	UnsupportedFormat(String),

	#[error("Configuration file has no extension")]
	NoExtension,

	#[error("Invalid configuration value: {0}")]
	Invalid(#[from] CoerceError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
	/// RESP dialect replies arrive in
	pub protocol_version: ProtocolVersion,
	/// Encoding used to decode keyword bytes
	pub encoding: TextEncoding,
}

impl ClientConfig {
	pub fn new(protocol_version: ProtocolVersion, encoding: TextEncoding) -> Self {
		Self {
			protocol_version,
			encoding,
		}
	}

	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(content)?)
	}

	/// Run `callback` on a reply with the configured protocol version.
	pub fn invoke<C>(&self, callback: &C, response: RespValue) -> callbacks::Result<C::Output>
	where
		C: Callback + ?Sized,
	{
		callback.call(response, self.protocol_version)
	}

	/// Like [`ClientConfig::invoke`] with per-call parameters.
	pub fn invoke_with<C>(
		&self,
		callback: &C,
		response: RespValue,
		params: &CallParams,
	) -> callbacks::Result<C::Output>
	where
		C: Callback + ?Sized,
	{
		callback.invoke(response, self.protocol_version, params)
	}

	/// Compare `input` with `token`, decoding bytes with the configured
	/// encoding.
	pub fn token_matches<T, I>(&self, token: T, input: &I) -> bool
	where
		T: Token,
		I: TokenInput + ?Sized,
	{
		token.matches_encoded(input, self.encoding)
	}
}

/// Values supplied by the embedding application.
///
/// Set fields win over the configuration file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
	/// Configuration file (TOML, JSON, or YAML).
	/// Defaults to conf/client.toml if it exists.
	pub config: Option<PathBuf>,
	pub protocol_version: Option<i64>,
	pub encoding: Option<String>,
}

/// Build the client configuration from a file and explicit overrides.
pub fn setup(overrides: Overrides) -> Result<ClientConfig, ConfigError> {
	let mut config = match overrides.config.as_deref() {
		Some(p) => load_from_file(p)?,
		None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH)?,
		None => {
			warn!("No configuration file at {DEFAULT_CONFIG_PATH}, using defaults");
			ClientConfig::default()
		}
	};

	if let Some(version) = overrides.protocol_version {
		config.protocol_version = ProtocolVersion::try_from(version)?;
	}
	if let Some(encoding) = overrides.encoding {
		config.encoding = encoding.parse()?;
	}

	info!(
		"Client configured for {} with {} keywords",
		config.protocol_version,
		config.encoding
	);
	Ok(config)
}

/// Load a configuration file, choosing the format by extension.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ClientConfig, ConfigError> {
	let path_ref = path.as_ref();
	let content = std::fs::read_to_string(path_ref).map_err(|source| ConfigError::Io {
		path: path_ref.display().to_string(),
		source,
	})?;

	let extension = path_ref
		.extension()
		.and_then(|ext| ext.to_str())
		.ok_or(ConfigError::NoExtension)?;

	info!("Loading configuration from {}", path_ref.display());
	match extension.to_lowercase().as_str() {
		"toml" => Ok(toml::from_str(&content)?),
		"json" => Ok(serde_json::from_str(&content)?),
		"yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
		_ => Err(ConfigError::UnsupportedFormat(extension.to_string())),
	}
}
