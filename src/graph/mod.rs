pub mod extends_graph;
pub mod join_graph;

pub use extends_graph::ExtendsGraph;
pub use join_graph::JoinGraph;
