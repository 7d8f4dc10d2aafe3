//! Set of traits for defining a road-network graph abstraction.
//! 
//! The search only needs a few things from a graph: node connectivity, node positions,
//! the distance between two nodes and a nearest-node lookup. Each of them is a separate trait.
//! 
mod graph;
mod metric;
mod spatial;

pub use graph::*;
pub use metric::*;
pub use spatial::*;
