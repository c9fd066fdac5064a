use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::BTreeMap;

use crate::models::Table;
use crate::validation::references::ReferenceError;

/// Manages `extend` relations between tables and orders them for resolution
pub struct ExtendsGraph {
    /// Edge `parent -> child` for every table that extends another
    graph: DiGraph<String, ()>,
    node_map: BTreeMap<String, NodeIndex>,
}

impl ExtendsGraph {
    pub fn new<'a>(tables: impl IntoIterator<Item = &'a Table>) -> Result<Self, ReferenceError> {
        let tables: Vec<&Table> = tables.into_iter().collect();
        let mut graph = DiGraph::new();
        let mut node_map = BTreeMap::new();

        // Insert in name order so resolution order is reproducible
        let mut names: Vec<&str> = tables.iter().map(|t| t.name.as_str()).collect();
        names.sort();
        for name in names {
            let node = graph.add_node(name.to_string());
            node_map.insert(name.to_string(), node);
        }

        for table in &tables {
            if let Some(parent) = &table.extend {
                let Some(&parent_node) = node_map.get(parent) else {
                    return Err(ReferenceError::UnknownParent {
                        table: table.name.clone(),
                        parent: parent.clone(),
                    });
                };
                graph.add_edge(parent_node, node_map[&table.name], ());
            }
        }

        Ok(Self { graph, node_map })
    }

    /// Table names ordered so every parent precedes its children
    pub fn resolution_order(&self) -> Result<Vec<String>, ReferenceError> {
        match toposort(&self.graph, None) {
            Ok(sorted) => Ok(sorted
                .into_iter()
                .map(|node| self.graph[node].clone())
                .collect()),
            Err(cycle) => Err(ReferenceError::CircularExtend {
                table: self.graph[cycle.node_id()].clone(),
            }),
        }
    }

    /// Direct parent of a table, if it extends one
    pub fn parent(&self, table: &str) -> Option<String> {
        let &node = self.node_map.get(table)?;
        self.graph
            .neighbors_directed(node, petgraph::Direction::Incoming)
            .next()
            .map(|n| self.graph[n].clone())
    }
}
