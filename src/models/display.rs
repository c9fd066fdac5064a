//! Display implementations for models

use std::fmt;

use super::table::{Dimension, Measure, Table};

impl Table {
    pub fn pretty_print(&self) {
        print!("{self}");
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Table {{")?;
        writeln!(f, "    name: {:?},", self.name)?;

        if let Some(extend) = &self.extend {
            writeln!(f, "    extend: {extend:?},")?;
        }
        if let Some(schema) = &self.schema {
            writeln!(f, "    schema: {schema:?},")?;
        }
        if let Some(table) = &self.table {
            writeln!(f, "    table: {table:?},")?;
        }
        if let Some(sql) = &self.sql {
            writeln!(f, "    sql: {sql:?},")?;
        }
        if let Some(db) = &self.db_connection_name {
            writeln!(f, "    dbConnectionName: {db:?},")?;
        }

        if !self.dimensions.is_empty() {
            writeln!(f, "    dimensions: [")?;
            for dim in &self.dimensions {
                writeln!(f, "        {dim},")?;
            }
            writeln!(f, "    ],")?;
        }

        if !self.measures.is_empty() {
            writeln!(f, "    measures: [")?;
            for measure in &self.measures {
                writeln!(f, "        {measure},")?;
            }
            writeln!(f, "    ],")?;
        }

        if !self.joins.is_empty() {
            writeln!(f, "    joins: [")?;
            for join in &self.joins {
                writeln!(
                    f,
                    "        {} -> {} ({:?}): {:?},",
                    join.name, join.to, join.join_type, join.definition
                )?;
            }
            writeln!(f, "    ],")?;
        }

        writeln!(f, "}}")
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.name, self.field_type)?;
        if let Some(source) = &self.table_source {
            write!(f, " from {source}")?;
        }
        if self.is_override {
            write!(f, " [override]")?;
        }
        Ok(())
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?}): {:?}", self.name, self.field_type, self.definition)?;
        if self.is_override {
            write!(f, " [override]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::models::Table;

    #[test]
    fn test_table_display() {
        let table: Table = serde_json::from_value(serde_json::json!({
            "name": "PlayerStats",
            "table": "player_stats",
            "measures": [{ "name": "highScore", "type": "INTEGER", "definition": "MAX(score)" }],
            "dimensions": [{ "name": "createdOn", "type": "TIME", "definition": "created_on" }],
        }))
        .unwrap();

        let shown = table.to_string();
        assert!(shown.starts_with("Table {\n    name: \"PlayerStats\",\n"));
        assert!(shown.contains("    table: \"player_stats\",\n"));
        assert!(shown.contains("        highScore (Integer): \"MAX(score)\",\n"));
        assert!(shown.contains("        createdOn (Time),\n"));
        assert!(!shown.contains("[override]"));
        assert!(shown.ends_with("}\n"));
    }
}
