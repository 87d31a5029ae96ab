//! Error types for binding session properties from external sources.
//!
//! The properties holder itself accepts every value it is given. Errors only
//! arise while reading configuration files or converting string values, such
//! as an environment variable that cannot be read as a boolean.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while binding [`JdbcSessionProperties`](crate::JdbcSessionProperties)
/// from key/value pairs, the environment, or a TOML file.
#[derive(Error, Debug)]
pub enum Error {
    /// A property value could not be converted to the field's type.
    #[error("invalid value {value:?} for property `{key}`")]
    InvalidValue { key: String, value: String },

    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration document could not be parsed.
    #[error("failed to parse session properties: {message}")]
    Parse { message: String },
}

/// A specialized Result type for property binding.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}
