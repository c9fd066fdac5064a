use super::error::ReferenceError;
use super::registry::ModelRegistry;
use crate::graph::JoinGraph;
use crate::models::Table;

pub struct ConnectionValidator<'a> {
    registry: &'a ModelRegistry<'a>,
    join_graph: &'a JoinGraph,
}

impl<'a> ConnectionValidator<'a> {
    pub fn new(registry: &'a ModelRegistry<'a>, join_graph: &'a JoinGraph) -> Self {
        Self {
            registry,
            join_graph,
        }
    }

    /// A table and every dynamic table reachable through its joins must share one connection
    pub fn validate_table(&self, table: &Table) -> Result<(), ReferenceError> {
        for joined_name in self.join_graph.reachable_tables(&table.name) {
            let Some(joined) = self.registry.table(&joined_name) else {
                continue;
            };
            if joined.db_connection_name != table.db_connection_name {
                return Err(ReferenceError::DbConnectionMismatch {
                    table: table.name.clone(),
                    joined: joined.name.clone(),
                });
            }
        }
        Ok(())
    }
}
