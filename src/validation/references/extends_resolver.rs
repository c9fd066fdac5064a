use std::collections::BTreeMap;
use tracing::debug;

use super::error::ReferenceError;
use crate::graph::ExtendsGraph;
use crate::models::Table;
use crate::validation::merger::TableMerger;

/// Applies `extend` inheritance to every table, parents before children
pub struct ExtendsResolver {
    merger: TableMerger,
}

impl ExtendsResolver {
    pub fn new() -> Self {
        Self {
            merger: TableMerger::new(),
        }
    }

    /// Returns the tables in their original order with inheritance applied
    pub fn resolve(&self, tables: &[Table]) -> Result<Vec<Table>, ReferenceError> {
        let graph = ExtendsGraph::new(tables)?;
        let order = graph.resolution_order()?;

        let originals: BTreeMap<&str, &Table> =
            tables.iter().map(|t| (t.name.as_str(), t)).collect();
        let mut resolved: BTreeMap<String, Table> = BTreeMap::new();

        for name in order {
            let Some(&table) = originals.get(name.as_str()) else {
                continue;
            };
            let merged = match graph.parent(&name).and_then(|p| resolved.get(&p)) {
                Some(parent) => self.merger.merge(parent, table),
                None => table.clone(),
            };
            resolved.insert(name, merged);
        }

        debug!("Resolved inheritance for {} tables", resolved.len());

        Ok(tables
            .iter()
            .filter_map(|t| resolved.remove(&t.name))
            .collect())
    }
}

impl Default for ExtendsResolver {
    fn default() -> Self {
        Self::new()
    }
}
