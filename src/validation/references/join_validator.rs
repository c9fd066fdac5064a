use std::collections::BTreeSet;

use super::error::ReferenceError;
use super::registry::ModelRegistry;
use crate::models::Table;

pub struct JoinValidator<'a> {
    registry: &'a ModelRegistry<'a>,
    static_models: &'a BTreeSet<String>,
}

impl<'a> JoinValidator<'a> {
    pub fn new(registry: &'a ModelRegistry<'a>, static_models: &'a BTreeSet<String>) -> Self {
        Self {
            registry,
            static_models,
        }
    }

    /// Every join must target a dynamic table or a statically known model
    pub fn validate_targets(&self, table: &Table) -> Result<(), ReferenceError> {
        for join in &table.joins {
            if !self.registry.contains_table(&join.to) && !self.static_models.contains(&join.to) {
                return Err(ReferenceError::UnknownJoinTarget {
                    table: table.name.clone(),
                    to: join.to.clone(),
                });
            }
        }
        Ok(())
    }

    /// The alias before the first `.` of a join definition must be the join's name
    pub fn validate_aliases(&self, table: &Table) -> Result<(), ReferenceError> {
        for join in &table.joins {
            let found = join.definition_alias();
            if found != join.name {
                return Err(ReferenceError::JoinAliasMismatch {
                    table: table.name.clone(),
                    found: found.to_string(),
                    expected: join.name.clone(),
                });
            }
        }
        Ok(())
    }
}
