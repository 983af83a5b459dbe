//! Load — decoding registry-supplied builder options.
//!
//! The registry hands builders an already-parsed option value (a dynamic
//! map); the only way builder construction can fail is when that value does
//! not decode into [`BuilderConfig`].

use serde_json::Value;
use thiserror::Error;

use super::model::BuilderConfig;

/// Construction-time decode failure. There is no runtime error taxonomy:
/// once a builder is constructed, every operation on it is total.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("builder options could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("builder options could not be parsed: {0}")]
    Parse(#[from] toml::de::Error),
}

impl BuilderConfig {
    /// Decode builder options from a dynamic value.
    ///
    /// A `null` or empty map is a valid configuration and yields the built-in
    /// defaults; wrong value types (e.g. a numeric `prefix`) are an error.
    pub fn from_value(opts: Value) -> Result<Self, ConfigError> {
        if opts.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(opts)?)
    }

    /// Decode builder options from TOML text.
    pub fn from_toml_str(opts: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(opts)?)
    }
}
