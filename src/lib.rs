//! # Session Table Properties for Sea-ORM Session Stores
//!
//! Configuration properties for database-backed HTTP session persistence.
//!
//! A session store needs to know which table holds its sessions, and the
//! application needs to know whether to create that table on startup and from
//! which SQL script. This crate holds those three settings and decides, when
//! nothing was configured explicitly, whether the schema initializer runs.
//!
//! ## Features
//!
//! - Built-in defaults for the schema script and session table
//! - Derived "initializer enabled" default with explicit override
//! - Binding from serde/TOML, key/value pairs, and environment variables
//! - `@@platform@@` resolution for Sea-ORM database backends
//!
//! ## Quick Start
//!
//! ```
//! use seaorm_session_properties::JdbcSessionProperties;
//!
//! let properties = JdbcSessionProperties::default();
//! assert_eq!(properties.table_name(), "SPRING_SESSION");
//! assert!(properties.is_initializer_enabled());
//! ```
//!
//! ## Initializer Rule
//!
//! While `initializer.enabled` is unset, the initializer runs if the table
//! name is the default one or a custom schema location is configured. A table
//! renamed without a custom schema is assumed to exist already:
//!
//! ```
//! use seaorm_session_properties::JdbcSessionProperties;
//!
//! let renamed = JdbcSessionProperties::default().with_table_name("APP_SESSIONS");
//! assert!(!renamed.is_initializer_enabled());
//!
//! let custom = renamed.clone().with_schema("classpath:db/app-sessions-@@platform@@.sql");
//! assert!(custom.is_initializer_enabled());
//!
//! let forced = renamed.with_initializer_enabled(true);
//! assert!(forced.is_initializer_enabled());
//! ```
//!
//! ## Loading Configuration
//!
//! ```no_run
//! use std::path::Path;
//!
//! use seaorm_session_properties::JdbcSessionProperties;
//!
//! # fn example() -> Result<(), seaorm_session_properties::Error> {
//! // File values first, then SPRING_SESSION_JDBC_* environment variables on top
//! let mut properties = JdbcSessionProperties::load_from_file(Path::new("config.toml"))?;
//! properties.apply_env_overrides()?;
//! # Ok(())
//! # }
//! ```

mod binding;
mod error;
mod initializer;
pub mod platform;
mod properties;

pub use binding::PROPERTY_NAMES;

/// Errors raised while binding properties from external sources.
pub use error::{Error, Result};

/// Nested initializer settings and their read-only view.
pub use initializer::{Initializer, InitializerSettings};

/// The properties holder and its built-in defaults.
pub use properties::{
    JdbcSessionProperties, DEFAULT_PREFIX, DEFAULT_SCHEMA_LOCATION, DEFAULT_TABLE_NAME,
    PLATFORM_PLACEHOLDER,
};

/// Database backend type used for `@@platform@@` resolution.
///
/// Re-exported from `sea-orm` for convenience.
pub use sea_orm::DatabaseBackend;
