use std::collections::BTreeSet;
use tracing::{debug, info};

use super::connection_validator::ConnectionValidator;
use super::error::ReferenceError;
use super::extends_resolver::ExtendsResolver;
use super::join_validator::JoinValidator;
use super::registry::ModelRegistry;
use super::role_validator::RoleValidator;
use super::sql_validator::SqlValidator;
use crate::graph::JoinGraph;
use crate::models::{DbConnection, SecurityConfig, Table};

/// Everything the cross-document checks look at
pub struct ReferenceInput<'a> {
    pub tables: &'a [Table],
    pub connections: &'a [DbConnection],
    pub security: Option<&'a SecurityConfig>,
}

pub struct ReferenceValidator {
    static_models: BTreeSet<String>,
}

impl ReferenceValidator {
    pub fn new(static_models: BTreeSet<String>) -> Self {
        Self { static_models }
    }

    /// Run every cross-document check, stopping at the first violation.
    ///
    /// Returns the tables with `extend` inheritance applied.
    pub fn validate_all(&self, input: ReferenceInput<'_>) -> Result<Vec<Table>, ReferenceError> {
        // 1. Names are unique per namespace
        ModelRegistry::build(input.tables, input.connections)?;
        debug!("✓ No duplicate table or connection names");

        // 2. Inheritance, so later checks see inherited joins and connections
        let resolved = ExtendsResolver::new().resolve(input.tables)?;
        let registry = ModelRegistry::build(&resolved, input.connections)?;
        let join_graph = JoinGraph::new(registry.tables());
        debug!(
            "Built join graph: {} tables, {} joins",
            join_graph.table_count(),
            join_graph.join_count()
        );

        // 3. Joins
        let join_validator = JoinValidator::new(&registry, &self.static_models);
        for table in registry.tables() {
            join_validator.validate_targets(table)?;
        }
        for table in registry.tables() {
            join_validator.validate_aliases(table)?;
        }

        // 4. Joined tables share a connection
        let connection_validator = ConnectionValidator::new(&registry, &join_graph);
        for table in registry.tables() {
            connection_validator.validate_table(table)?;
        }

        // 5. SQL content
        let sql_validator = SqlValidator::new();
        for table in registry.tables() {
            sql_validator.validate_table(table)?;
        }

        // 6. Roles
        if let Some(security) = input.security {
            RoleValidator::new().validate_roles(security)?;
        }

        info!(
            "✓ References validated: {} tables, {} connections",
            registry.table_count(),
            registry.connection_count()
        );
        Ok(resolved)
    }
}
