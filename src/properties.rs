use serde::{Deserialize, Serialize};

use crate::initializer::{Initializer, InitializerSettings};

/// Schema script used when no custom location is configured.
///
/// The `@@platform@@` token is left in place; it is resolved against the
/// database backend by whoever executes the script.
pub const DEFAULT_SCHEMA_LOCATION: &str =
    "classpath:org/springframework/session/jdbc/schema-@@platform@@.sql";

/// Table used to store sessions when no custom name is configured.
pub const DEFAULT_TABLE_NAME: &str = "SPRING_SESSION";

/// Token in a schema location that stands for the database platform name.
pub const PLATFORM_PLACEHOLDER: &str = "@@platform@@";

/// Key prefix under which the properties are bound.
pub const DEFAULT_PREFIX: &str = "spring.session.jdbc";

/// Configuration properties for a database-backed session store.
///
/// `JdbcSessionProperties` holds the location of the SQL script that creates
/// the session table, the name of that table, and whether the script should
/// run on startup. It is built once with [`Default`], optionally overwritten
/// field by field by a binder (serde, key/value pairs, or the environment),
/// and then only read.
///
/// # Usage
///
/// ```
/// use seaorm_session_properties::JdbcSessionProperties;
///
/// // Defaults: initializer runs because the table name is the default one
/// let properties = JdbcSessionProperties::default();
/// assert!(properties.is_initializer_enabled());
///
/// // A renamed table without a custom schema is assumed to already exist
/// let properties = JdbcSessionProperties::default().with_table_name("APP_SESSIONS");
/// assert!(!properties.is_initializer_enabled());
///
/// // An explicit setting always wins
/// let properties = JdbcSessionProperties::default()
///     .with_table_name("APP_SESSIONS")
///     .with_initializer_enabled(true);
/// assert!(properties.is_initializer_enabled());
/// ```
///
/// # Binding
///
/// With serde the struct reads from a section shaped like:
///
/// ```toml
/// schema = "classpath:db/sessions-@@platform@@.sql"
/// table-name = "APP_SESSIONS"
///
/// [initializer]
/// enabled = true
/// ```
///
/// Any subset of fields may be present; missing ones keep their defaults and
/// a missing `initializer.enabled` stays unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct JdbcSessionProperties {
    /// Path to the SQL file to use to initialize the database schema.
    schema: String,
    /// Name of database table used to store sessions.
    #[serde(alias = "table_name", alias = "tableName")]
    table_name: String,
    initializer: InitializerSettings,
}

impl Default for JdbcSessionProperties {
    fn default() -> Self {
        Self {
            schema: DEFAULT_SCHEMA_LOCATION.to_string(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            initializer: InitializerSettings::default(),
        }
    }
}

impl JdbcSessionProperties {
    /// Creates properties holding the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the location of the schema script.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Overwrites the schema location.
    ///
    /// The value is not validated. A malformed location only surfaces when the
    /// schema script is later looked up.
    pub fn set_schema(&mut self, schema: impl Into<String>) {
        self.schema = schema.into();
    }

    /// Sets a custom schema location.
    ///
    /// # Examples
    ///
    /// ```
    /// use seaorm_session_properties::JdbcSessionProperties;
    ///
    /// let properties = JdbcSessionProperties::new()
    ///     .with_schema("classpath:db/sessions-@@platform@@.sql");
    /// assert!(properties.has_custom_schema());
    /// ```
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.set_schema(schema);
        self
    }

    /// Returns the name of the session table.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Overwrites the session table name. The value is not validated.
    pub fn set_table_name(&mut self, table_name: impl Into<String>) {
        self.table_name = table_name.into();
    }

    /// Sets a custom table name.
    ///
    /// # Examples
    ///
    /// ```
    /// use seaorm_session_properties::JdbcSessionProperties;
    ///
    /// // Use a custom table name for multi-tenant applications or specific environments
    /// let properties = JdbcSessionProperties::new().with_table_name("PRODUCTION_SESSIONS");
    /// assert_eq!(properties.table_name(), "PRODUCTION_SESSIONS");
    /// ```
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.set_table_name(table_name);
        self
    }

    /// Returns a view over the nested initializer settings.
    pub fn initializer(&self) -> Initializer<'_> {
        Initializer::new(self)
    }

    pub(crate) fn initializer_settings(&self) -> &InitializerSettings {
        &self.initializer
    }

    /// Whether the session table should be created on startup.
    ///
    /// Returns the explicitly configured value if there is one. Otherwise the
    /// initializer is enabled when the table name is [`DEFAULT_TABLE_NAME`] or
    /// the schema location differs from [`DEFAULT_SCHEMA_LOCATION`]. A renamed
    /// table without a custom schema is taken to be a table that already
    /// exists.
    pub fn is_initializer_enabled(&self) -> bool {
        self.initializer().is_enabled()
    }

    /// The explicitly configured initializer state, `None` while it is derived.
    pub fn initializer_explicit(&self) -> Option<bool> {
        self.initializer.explicit()
    }

    /// Sets the initializer state explicitly.
    ///
    /// From then on the derived default no longer applies.
    pub fn set_initializer_enabled(&mut self, enabled: bool) {
        self.initializer.set_enabled(enabled);
    }

    /// Builder form of [`set_initializer_enabled`](Self::set_initializer_enabled).
    pub fn with_initializer_enabled(mut self, enabled: bool) -> Self {
        self.set_initializer_enabled(enabled);
        self
    }

    /// Whether the table name is exactly [`DEFAULT_TABLE_NAME`].
    pub fn is_default_table_name(&self) -> bool {
        self.table_name == DEFAULT_TABLE_NAME
    }

    /// Whether the schema location differs from [`DEFAULT_SCHEMA_LOCATION`].
    pub fn has_custom_schema(&self) -> bool {
        self.schema != DEFAULT_SCHEMA_LOCATION
    }
}
