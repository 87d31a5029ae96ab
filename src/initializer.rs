//! Schema initializer settings nested under the session properties.
//!
//! The initializer is the startup step that creates the session table from the
//! configured schema script. Whether it runs is a tri-state setting: left unset
//! it is derived from the table name and schema location, otherwise the
//! explicit value is used as-is.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::properties::{JdbcSessionProperties, DEFAULT_SCHEMA_LOCATION, DEFAULT_TABLE_NAME};

/// Stored state of the `initializer` section.
///
/// `enabled` is `None` until a value is configured. Once set it cannot be
/// cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitializerSettings {
    /// Create the required session tables on startup if necessary. Enabled
    /// automatically if the default table name is set or a custom schema is
    /// configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
}

impl InitializerSettings {
    /// The explicitly configured value, if any.
    pub fn explicit(&self) -> Option<bool> {
        self.enabled
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = Some(enabled);
    }
}

/// Read-only view over the initializer settings of a [`JdbcSessionProperties`].
///
/// The view borrows its parent so the derived default always reflects the
/// parent's current table name and schema location.
#[derive(Debug, Clone, Copy)]
pub struct Initializer<'a> {
    properties: &'a JdbcSessionProperties,
}

impl<'a> Initializer<'a> {
    pub(crate) fn new(properties: &'a JdbcSessionProperties) -> Self {
        Self { properties }
    }

    /// Whether the schema initializer should run.
    ///
    /// An explicit value always wins. Otherwise the initializer runs when the
    /// table name is the default one or a custom schema location is set.
    pub fn is_enabled(&self) -> bool {
        if let Some(enabled) = self.explicit() {
            trace!(enabled, "session initializer explicitly configured");
            return enabled;
        }
        let enabled = derive_enabled(self.properties.schema(), self.properties.table_name());
        trace!(
            enabled,
            table_name = self.properties.table_name(),
            schema = self.properties.schema(),
            "session initializer derived from table name and schema"
        );
        enabled
    }

    /// The explicitly configured value, if any.
    pub fn explicit(&self) -> Option<bool> {
        self.properties.initializer_settings().explicit()
    }
}

/// Derived default used while `enabled` is unset.
pub(crate) fn derive_enabled(schema: &str, table_name: &str) -> bool {
    let default_table_name = table_name == DEFAULT_TABLE_NAME;
    let custom_schema = schema != DEFAULT_SCHEMA_LOCATION;
    default_table_name || custom_schema
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_rule_truth_table() {
        assert!(derive_enabled(DEFAULT_SCHEMA_LOCATION, DEFAULT_TABLE_NAME));
        assert!(derive_enabled("classpath:custom.sql", DEFAULT_TABLE_NAME));
        assert!(!derive_enabled(DEFAULT_SCHEMA_LOCATION, "MY_TABLE"));
        assert!(derive_enabled("classpath:custom.sql", "MY_TABLE"));
    }

    #[test]
    fn table_name_comparison_is_exact() {
        // A differently cased name is a custom table.
        assert!(!derive_enabled(DEFAULT_SCHEMA_LOCATION, "spring_session"));
    }

    #[test]
    fn settings_start_unset() {
        assert_eq!(InitializerSettings::default().explicit(), None);
    }

    #[test]
    fn view_follows_parent() {
        let mut properties = JdbcSessionProperties::default();
        assert!(properties.initializer().is_enabled());
        assert_eq!(properties.initializer().explicit(), None);

        properties.set_table_name("MY_TABLE");
        assert!(!properties.initializer().is_enabled());

        properties.set_initializer_enabled(true);
        assert_eq!(properties.initializer().explicit(), Some(true));
        assert!(properties.initializer().is_enabled());
    }
}
