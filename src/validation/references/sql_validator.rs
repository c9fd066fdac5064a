use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ReferenceError;
use crate::models::Table;

/// Keywords that may not appear in table SQL or field definitions
pub const DISALLOWED_SQL_WORDS: &[&str] = &[
    "DROP", "TRUNCATE", "DELETE", "INSERT", "UPDATE", "ALTER", "COMMENT", "CREATE", "DESCRIBE",
    "SHOW", "USE", "GRANT", "REVOKE", "CONNECT", "LOCK", "EXPLAIN", "CALL", "MERGE", "RENAME",
];

static DISALLOWED_SQL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b({})\b", DISALLOWED_SQL_WORDS.join("|")))
        .expect("Failed to compile disallowed SQL keyword pattern")
});

pub struct SqlValidator;

impl SqlValidator {
    pub fn new() -> Self {
        Self
    }

    /// Reject statement separators and DDL/DML keywords in any SQL fragment of the table
    pub fn validate_table(&self, table: &Table) -> Result<(), ReferenceError> {
        for (location, fragment) in table.sql_fragments() {
            if contains_disallowed_sql(fragment) {
                return Err(ReferenceError::DisallowedSql {
                    table: table.name.clone(),
                    location,
                });
            }
        }
        Ok(())
    }
}

impl Default for SqlValidator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn contains_disallowed_sql(fragment: &str) -> bool {
    fragment.contains(';') || DISALLOWED_SQL.is_match(fragment)
}
