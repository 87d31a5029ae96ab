use seaorm_session_properties::{
    JdbcSessionProperties, DEFAULT_PREFIX, DEFAULT_SCHEMA_LOCATION, DEFAULT_TABLE_NAME,
};

const CUSTOM_SCHEMA: &str = "classpath:db/custom-sessions-@@platform@@.sql";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Every combination of table name and schema location, default or custom.
fn combinations() -> Vec<JdbcSessionProperties> {
    vec![
        JdbcSessionProperties::default(),
        JdbcSessionProperties::default().with_schema(CUSTOM_SCHEMA),
        JdbcSessionProperties::default().with_table_name("MY_TABLE"),
        JdbcSessionProperties::default()
            .with_table_name("MY_TABLE")
            .with_schema(CUSTOM_SCHEMA),
    ]
}

#[test]
fn fresh_instance_has_defaults_and_runs_initializer() {
    init_tracing();
    let properties = JdbcSessionProperties::default();
    assert_eq!(properties.schema(), DEFAULT_SCHEMA_LOCATION);
    assert_eq!(properties.table_name(), DEFAULT_TABLE_NAME);
    assert_eq!(properties.table_name(), "SPRING_SESSION");
    assert!(properties.is_initializer_enabled());
}

#[test]
fn default_table_with_custom_schema_runs_initializer() {
    init_tracing();
    let properties = JdbcSessionProperties::default().with_schema(CUSTOM_SCHEMA);
    assert!(properties.is_initializer_enabled());
}

#[test]
fn custom_table_with_default_schema_skips_initializer() {
    init_tracing();
    let mut properties = JdbcSessionProperties::default();
    properties.set_table_name("MY_TABLE");
    assert!(!properties.is_initializer_enabled());
}

#[test]
fn custom_table_with_custom_schema_runs_initializer() {
    init_tracing();
    let mut properties = JdbcSessionProperties::default();
    properties.set_table_name("MY_TABLE");
    properties.set_schema(CUSTOM_SCHEMA);
    assert!(properties.is_initializer_enabled());
}

#[test]
fn explicit_value_wins_for_every_combination() {
    init_tracing();
    for properties in combinations() {
        let mut enabled = properties.clone();
        enabled.set_initializer_enabled(true);
        assert!(enabled.is_initializer_enabled(), "{enabled:?}");

        let mut disabled = properties;
        disabled.set_initializer_enabled(false);
        assert!(!disabled.is_initializer_enabled(), "{disabled:?}");
    }
}

#[test]
fn reads_do_not_mutate() {
    init_tracing();
    for properties in combinations() {
        let before = properties.clone();
        assert_eq!(properties.schema(), properties.schema());
        assert_eq!(properties.table_name(), properties.table_name());
        assert_eq!(
            properties.is_initializer_enabled(),
            properties.is_initializer_enabled()
        );
        assert_eq!(properties.initializer_explicit(), None);
        assert_eq!(properties, before);
    }
}

#[test]
fn nested_view_agrees_with_top_level() {
    init_tracing();
    for properties in combinations() {
        assert_eq!(
            properties.initializer().is_enabled(),
            properties.is_initializer_enabled()
        );
    }
}

#[test]
fn bound_configuration_drives_initializer() {
    init_tracing();
    let mut properties = JdbcSessionProperties::default();
    properties
        .bind(
            DEFAULT_PREFIX,
            [("spring.session.jdbc.tableName", "LEGACY_SESSIONS")],
        )
        .unwrap();
    assert!(!properties.is_initializer_enabled());

    properties
        .bind(
            DEFAULT_PREFIX,
            [("spring.session.jdbc.initializer.enabled", "true")],
        )
        .unwrap();
    assert!(properties.is_initializer_enabled());
}
