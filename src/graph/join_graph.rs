use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use std::collections::BTreeMap;

use crate::models::Table;

/// Directed graph of joins between dynamically configured tables
///
/// An edge `A -> B` means table `A` declares a join to table `B`. Joins to
/// tables outside the graph (static models) are not represented.
pub struct JoinGraph {
    graph: DiGraph<String, String>,
    node_map: BTreeMap<String, NodeIndex>,
}

impl JoinGraph {
    pub fn new<'a>(tables: impl IntoIterator<Item = &'a Table>) -> Self {
        let tables: Vec<&Table> = tables.into_iter().collect();
        let mut graph = DiGraph::new();
        let mut node_map = BTreeMap::new();

        // First pass: create all nodes
        for table in &tables {
            let node = graph.add_node(table.name.clone());
            node_map.insert(table.name.clone(), node);
        }

        // Second pass: add an edge per join, labelled with the join alias
        for table in &tables {
            let from = node_map[&table.name];
            for join in &table.joins {
                if let Some(&to) = node_map.get(&join.to) {
                    graph.add_edge(from, to, join.name.clone());
                }
            }
        }

        Self { graph, node_map }
    }

    /// Every table reachable through one or more joins, excluding the start table
    pub fn reachable_tables(&self, table: &str) -> Vec<String> {
        let Some(&start) = self.node_map.get(table) else {
            return Vec::new();
        };

        let mut reachable = Vec::new();
        let mut dfs = Dfs::new(&self.graph, start);
        while let Some(node) = dfs.next(&self.graph) {
            if node != start {
                reachable.push(self.graph[node].clone());
            }
        }
        reachable.sort();
        reachable
    }

    pub fn table_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn join_count(&self) -> usize {
        self.graph.edge_count()
    }
}
