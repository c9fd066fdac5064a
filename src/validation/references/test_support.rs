//! Builders shared by the validation unit tests

use crate::models::{DbConnection, Dimension, FieldType, Join, JoinType, Measure, Table};

pub fn table(name: &str, db_connection_name: Option<&str>) -> Table {
    Table {
        name: name.to_string(),
        extend: None,
        schema: Some("gamedb".to_string()),
        table: Some(name.to_lowercase()),
        sql: None,
        db_connection_name: db_connection_name.map(str::to_string),
        is_fact: None,
        hidden: false,
        description: None,
        category: None,
        cardinality: None,
        read_access: None,
        filter_template: None,
        tags: Vec::new(),
        dimensions: Vec::new(),
        measures: Vec::new(),
        joins: Vec::new(),
    }
}

pub fn join(name: &str, to: &str, definition: &str) -> Join {
    Join {
        name: name.to_string(),
        to: to.to_string(),
        join_type: JoinType::Left,
        kind: None,
        definition: definition.to_string(),
    }
}

pub fn dimension(name: &str, field_type: FieldType) -> Dimension {
    Dimension {
        name: name.to_string(),
        field_type,
        definition: None,
        table_source: None,
        description: None,
        category: None,
        hidden: false,
        read_access: None,
        cardinality: None,
        tags: Vec::new(),
        values: Vec::new(),
        is_override: false,
    }
}

pub fn measure(name: &str, definition: &str) -> Measure {
    Measure {
        name: name.to_string(),
        field_type: FieldType::Integer,
        definition: definition.to_string(),
        query_plan_resolver: None,
        description: None,
        category: None,
        hidden: false,
        read_access: None,
        tags: Vec::new(),
        is_override: false,
    }
}

pub fn connection(name: &str) -> DbConnection {
    DbConnection {
        name: name.to_string(),
        url: "jdbc:h2:mem:test".to_string(),
        driver: "org.h2.Driver".to_string(),
        user: "sa".to_string(),
        dialect: None,
        property_map: Default::default(),
    }
}
