//! Binding of session properties from external configuration.
//!
//! Three sources are supported, each overwriting only the fields it names:
//!
//! 1. Key/value pairs such as `spring.session.jdbc.table-name = APP_SESSIONS`
//! 2. Environment variables such as `SPRING_SESSION_JDBC_TABLE_NAME`
//! 3. A TOML document with a `[spring.session.jdbc]` section
//!
//! Keys are matched loosely: case is ignored and `table-name`, `table_name`
//! and `tableName` all name the same property.

use std::env::{self, VarError};
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::properties::{JdbcSessionProperties, DEFAULT_PREFIX};

/// Property names relative to the prefix, in their canonical spelling.
pub const PROPERTY_NAMES: &[&str] = &["schema", "table-name", "initializer.enabled"];

impl JdbcSessionProperties {
    /// Binds key/value pairs found under `prefix`.
    ///
    /// Keys outside the prefix are skipped. Unknown keys under the prefix are
    /// logged and skipped. Binding stops at the first value that cannot be
    /// converted; pairs applied before it stay applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use seaorm_session_properties::JdbcSessionProperties;
    ///
    /// let mut properties = JdbcSessionProperties::default();
    /// properties.bind(
    ///     "spring.session.jdbc",
    ///     [
    ///         ("spring.session.jdbc.table-name", "APP_SESSIONS"),
    ///         ("spring.session.jdbc.initializer.enabled", "true"),
    ///         ("server.port", "8080"),
    ///     ],
    /// )?;
    /// assert_eq!(properties.table_name(), "APP_SESSIONS");
    /// assert!(properties.is_initializer_enabled());
    /// # Ok::<(), seaorm_session_properties::Error>(())
    /// ```
    pub fn bind<I, K, V>(&mut self, prefix: &str, properties: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let prefix = canonical_key(normalize_prefix(prefix));
        for (key, value) in properties {
            let (key, value) = (key.as_ref(), value.as_ref());
            let canonical = canonical_key(key);
            let name = if prefix.is_empty() {
                canonical.as_str()
            } else {
                match canonical
                    .strip_prefix(prefix.as_str())
                    .and_then(|rest| rest.strip_prefix('.'))
                {
                    Some(name) => name,
                    None => continue,
                }
            };
            self.bind_property(name, key, value)?;
        }
        Ok(())
    }

    fn bind_property(&mut self, name: &str, key: &str, value: &str) -> Result<()> {
        match name {
            "schema" => self.set_schema(value),
            "tablename" => self.set_table_name(value),
            "initializer.enabled" => match parse_bool(key, value)? {
                Some(enabled) => self.set_initializer_enabled(enabled),
                None => {
                    debug!(key, "blank session property, leaving unset");
                    return Ok(());
                }
            },
            _ => {
                debug!(key, "ignoring unknown session property");
                return Ok(());
            }
        }
        debug!(key, value, "bound session property");
        Ok(())
    }

    /// Builds properties from `SPRING_SESSION_JDBC_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_prefix(DEFAULT_PREFIX)
    }

    /// Builds properties from environment variables derived from `prefix`.
    ///
    /// The prefix `app.session` reads `APP_SESSION_SCHEMA`,
    /// `APP_SESSION_TABLE_NAME` and `APP_SESSION_INITIALIZER_ENABLED`.
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut properties = Self::default();
        properties.apply_env_overrides_with_prefix(prefix)?;
        Ok(properties)
    }

    /// Overlays `SPRING_SESSION_JDBC_*` environment variables onto `self`.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_env_overrides_with_prefix(DEFAULT_PREFIX)
    }

    /// Overlays environment variables derived from `prefix` onto `self`.
    ///
    /// A variable that is set but not valid UTF-8 is an error.
    pub fn apply_env_overrides_with_prefix(&mut self, prefix: &str) -> Result<()> {
        let prefix = normalize_prefix(prefix);
        let mut vars = Vec::with_capacity(PROPERTY_NAMES.len());
        for name in PROPERTY_NAMES {
            let key = qualified_key(prefix, name);
            let var = env_var_name(&key);
            match env::var(&var) {
                Ok(value) => vars.push((key, value)),
                Err(VarError::NotPresent) => {}
                Err(VarError::NotUnicode(raw)) => {
                    return Err(Error::invalid_value(var, raw.to_string_lossy()));
                }
            }
        }
        self.bind(prefix, vars)
    }

    /// Loads properties from the `[spring.session.jdbc]` section of a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::load_from_file_with_prefix(path, DEFAULT_PREFIX)
    }

    /// Loads properties from the section at `prefix` of a TOML file.
    pub fn load_from_file_with_prefix(path: &Path, prefix: &str) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        debug!(path = %path.display(), "loading session properties");
        Self::from_toml_str(&content, prefix)
    }

    /// Parses properties from the section at `prefix` of a TOML document.
    ///
    /// A document without that section yields the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use seaorm_session_properties::JdbcSessionProperties;
    ///
    /// let properties = JdbcSessionProperties::from_toml_str(
    ///     r#"
    /// [spring.session.jdbc]
    /// table-name = "APP_SESSIONS"
    /// "#,
    ///     "spring.session.jdbc",
    /// )?;
    /// assert_eq!(properties.table_name(), "APP_SESSIONS");
    /// assert!(!properties.is_initializer_enabled());
    /// # Ok::<(), seaorm_session_properties::Error>(())
    /// ```
    pub fn from_toml_str(content: &str, prefix: &str) -> Result<Self> {
        let table = content
            .parse::<toml::Table>()
            .map_err(|e| Error::parse(e.to_string()))?;
        let root = toml::Value::Table(table);

        let mut section = &root;
        for segment in normalize_prefix(prefix).split('.').filter(|s| !s.is_empty()) {
            match section.get(segment) {
                Some(value) => section = value,
                None => {
                    debug!(prefix, "no session properties section, using defaults");
                    return Ok(Self::default());
                }
            }
        }

        toml::Value::try_into::<Self>(section.clone()).map_err(|e| Error::parse(e.to_string()))
    }
}

/// Strips surrounding whitespace and dots so `spring.session.jdbc.` and
/// `spring.session.jdbc` name the same section.
fn normalize_prefix(prefix: &str) -> &str {
    prefix.trim().trim_matches('.')
}

/// Lower-cases `key` and drops `-` and `_`, keeping `.` separators.
fn canonical_key(key: &str) -> String {
    key.trim()
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn qualified_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

/// `spring.session.jdbc.table-name` -> `SPRING_SESSION_JDBC_TABLE_NAME`
fn env_var_name(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            '.' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

/// `None` for a blank value, which leaves the property unset.
fn parse_bool(key: &str, value: &str) -> Result<Option<bool>> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "true" | "yes" | "on" | "1" => Ok(Some(true)),
        "false" | "no" | "off" | "0" => Ok(Some(false)),
        _ => Err(Error::invalid_value(key, value)),
    }
}
