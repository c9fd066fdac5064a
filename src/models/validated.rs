use std::collections::BTreeSet;

use super::{DbConnection, SecurityConfig, Table};
use crate::templating::VariableSet;

/// The fully validated configuration handed to the serving layer
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    /// All tables with `extend` inheritance applied, ordered by name
    pub tables: Vec<Table>,

    pub security: Option<SecurityConfig>,

    /// Variables applied to table and security documents
    pub variables: VariableSet,

    /// Variables applied to DB connection documents
    pub db_variables: VariableSet,

    /// All connections, ordered by name
    pub db_connections: Vec<DbConnection>,

    /// Placeholders referenced by table and security documents
    pub placeholders: BTreeSet<String>,
}

impl ValidatedConfig {
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn db_connection(&self, name: &str) -> Option<&DbConnection> {
        self.db_connections.iter().find(|c| c.name == name)
    }

    pub fn roles(&self) -> &[String] {
        self.security
            .as_ref()
            .map(|s| s.roles.as_slice())
            .unwrap_or_default()
    }
}
