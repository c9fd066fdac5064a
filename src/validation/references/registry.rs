use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use super::error::ReferenceError;
use crate::models::{DbConnection, Table};

/// Name index over every table and connection of a run
///
/// Tables and connections live in separate namespaces; a name may be
/// used once per namespace.
pub struct ModelRegistry<'a> {
    tables: BTreeMap<&'a str, &'a Table>,
    connections: BTreeMap<&'a str, &'a DbConnection>,
}

impl<'a> ModelRegistry<'a> {
    /// Index all entities, rejecting the first duplicated name
    pub fn build(
        tables: &'a [Table],
        connections: &'a [DbConnection],
    ) -> Result<Self, ReferenceError> {
        let mut table_index = BTreeMap::new();
        for table in tables {
            match table_index.entry(table.name.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(table);
                }
                Entry::Occupied(_) => {
                    return Err(ReferenceError::DuplicateName {
                        name: table.name.clone(),
                    });
                }
            }
        }

        let mut connection_index = BTreeMap::new();
        for connection in connections {
            match connection_index.entry(connection.name.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(connection);
                }
                Entry::Occupied(_) => {
                    return Err(ReferenceError::DuplicateName {
                        name: connection.name.clone(),
                    });
                }
            }
        }

        Ok(Self {
            tables: table_index,
            connections: connection_index,
        })
    }

    pub fn table(&self, name: &str) -> Option<&'a Table> {
        self.tables.get(name).copied()
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Tables in name order
    pub fn tables(&self) -> impl Iterator<Item = &'a Table> + '_ {
        self.tables.values().copied()
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}
