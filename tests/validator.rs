mod common;

use common::ConfigDir;
use modelconf::validation::references::ReferenceError;
use modelconf::{ConfigError, ConfigLoader, ErrorKind};

fn load(dir: &ConfigDir) -> Result<modelconf::ValidatedConfig, ConfigError> {
    ConfigLoader::new(dir.path())?.load_all()
}

#[test]
fn valid_config_dir_loads_every_entity() {
    let dir = ConfigDir::valid();
    let config = load(&dir).unwrap();

    assert_eq!(config.tables.len(), 3);
    assert_eq!(config.db_connections.len(), 2);
    assert_eq!(config.roles().len(), 2);

    let child = config.table("PlayerStatsChild").unwrap();
    assert!(child.measure("highScore").unwrap().is_override);
    assert!(!child.measure("AvgScore").unwrap().is_override);
    assert!(child.dimension("createdOn").unwrap().is_override);
    assert!(!child.dimension("updatedMonth").unwrap().is_override);
}

#[test]
fn bad_table_join_type() {
    let dir = ConfigDir::valid().with(
        "models/tables/country.json5",
        r#"{
          tables: [{
            name: 'Country',
            table: 'country',
            dbConnectionName: 'OracleConnection',
            joins: [{ name: 'region', to: 'PlayerStats', type: 'toAll', definition: 'region.id = region_id' }],
          }],
        }"#,
    );

    let err = load(&dir).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SchemaViolation);
    assert_eq!(
        err.to_string(),
        "Schema validation failed for: country.json5\n\
         $.tables[0].joins[0].type: does not have a value in the enumeration [left, inner, full, cross]"
    );
}

#[test]
fn bad_table_sql() {
    let dir = ConfigDir::valid().with(
        "models/tables/country.json5",
        r#"{
          tables: [{
            name: 'Country',
            sql: 'SELECT * FROM country; DROP TABLE country',
            dbConnectionName: 'OracleConnection',
          }],
        }"#,
    );

    let err = load(&dir).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ReferentialViolation);
    assert!(err.to_string().starts_with(
        "sql/definition provided in table config contain either ';' or one of these words"
    ));
}

#[test]
fn bad_join_model() {
    let dir = ConfigDir::valid().with(
        "models/tables/country.json5",
        r#"{
          tables: [{
            name: 'Country',
            table: 'country',
            dbConnectionName: 'OracleConnection',
            joins: [{ name: 'continent', to: 'Continent', type: 'left', definition: 'continent.id = continent_id' }],
          }],
        }"#,
    );

    let err = load(&dir).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Model: Continent is neither included in dynamic models nor in static models"
    );
}

#[test]
fn bad_join_definition() {
    let dir = ConfigDir::valid().with(
        "models/tables/player_stats.json5",
        &common::PLAYER_STATS.replace("playerCountry.id = country_id", "country.id = country_id"),
    );

    let err = load(&dir).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Join name must be used before '.' in join definition. Found 'country' instead of 'playerCountry'"
    );
}

#[test]
fn duplicate_db_config_name() {
    let dir = ConfigDir::valid().with(
        "db/sql/more.json5",
        r#"{
          dbconfigs: [{
            name: 'OracleConnection',
            url: 'jdbc:oracle:thin:@backup:1521:XE',
            driver: 'oracle.jdbc.OracleDriver',
            user: 'scott',
          }],
        }"#,
    );

    let err = load(&dir).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Duplicate!! Either Table or DB configs found with the same name."
    );
}

#[test]
fn joined_tables_db_connection_mismatch() {
    let dir = ConfigDir::valid().with(
        "models/tables/country.json5",
        &common::COUNTRY.replace("OracleConnection", "MySQLConnection"),
    );

    let err = load(&dir).unwrap_err();
    assert!(matches!(
        &err,
        ConfigError::Reference(ReferenceError::DbConnectionMismatch { table, .. }) if table == "PlayerStats"
    ));
    assert_eq!(
        err.to_string(),
        "DBConnection name mismatch between table: PlayerStats and tables in its Join Clause."
    );
}

#[test]
fn bad_security_role() {
    let dir = ConfigDir::valid().with(
        "models/security.hjson",
        "{\n  roles: [\n    admin\n    \"guest,user\"\n  ]\n}",
    );

    let err = load(&dir).unwrap_err();
    assert_eq!(
        err.to_string(),
        "ROLE provided in security config contain one of these words: [,]"
    );
}

#[test]
fn undefined_variable_in_required_field() {
    // Rendered empty, this name would fail the schema pattern instead
    let dir = ConfigDir::valid().with(
        "models/tables/extra.json5",
        "{ tables: [{ name: '{{foobar}}', table: 'extra' }] }",
    );

    let err = load(&dir).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ReferentialViolation);
    assert_eq!(
        err.to_string(),
        "foobar is used as a variable in either table or security config files but is not defined in variables config file."
    );
}

#[test]
fn undefined_unquoted_variable() {
    // Rendered empty, this value would not parse
    let dir = ConfigDir::valid().with(
        "models/tables/extra.json5",
        "{ tables: [{ name: 'Extra', table: 'extra', isFact: {{is_fact}} }] }",
    );

    let err = load(&dir).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ReferentialViolation);
    assert!(err.to_string().starts_with("is_fact is used as a variable"));
}

#[test]
fn hjson_security_with_quoteless_roles() {
    let dir = ConfigDir::valid().with(
        "models/security.hjson",
        "{\n  # one role per line\n  roles: [\n    admin\n    guest\n  ]\n}",
    );

    let config = load(&dir).unwrap();
    assert_eq!(config.roles(), &["admin".to_string(), "guest".to_string()]);
}

#[test]
fn unknown_extend_parent() {
    let dir = ConfigDir::valid().with(
        "models/tables/orphan.json5",
        "{ tables: [{ name: 'Orphan', extend: 'Missing' }] }",
    );

    let err = load(&dir).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Table: Orphan extends Missing which is not included in dynamic models"
    );
}

#[test]
fn circular_extend() {
    let dir = ConfigDir::valid().with(
        "models/tables/loop.json5",
        "{ tables: [{ name: 'LoopA', extend: 'LoopB' }, { name: 'LoopB', extend: 'LoopA' }] }",
    );

    let err = load(&dir).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Reference(ReferenceError::CircularExtend { .. })
    ));
}
