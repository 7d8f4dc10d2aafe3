use crate::spatial::Position;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::Iterator;

// ====== Basic traits =====

/// Requirements for a node identifier
pub trait Identifier: Eq + Hash + Copy + Debug {}
impl<T> Identifier for T where T: Eq + Hash + Copy + Debug {}

/// Defines type of the identifier for the graph
pub trait GraphBase {
  type NodeId: Identifier;
}

/// Position of each node in the normalized map space.
pub trait Located: GraphBase {
  fn position(&self, node: Self::NodeId) -> Position;
}

// ====== Neighbors access =====

/// Trait for defining graph connectivity
/// 
/// `neighbors()` for node with id `u` must return all nodes `v` such that `u` and `v` are
/// connected by a road. Whether nodes already seen by a running search are reported is up to
/// the graph, the search copes with both.
/// 
/// The trait is usually implemented for a reference to the graph, so that the returned
/// iterator can borrow from it.
pub trait IntoNeighbors: GraphBase {
  type Neighbors: Iterator<Item = Self::NodeId>;
  fn neighbors(self, node: Self::NodeId) -> Self::Neighbors;
}

// ====== Blanket implementations =====

impl<'a, G: GraphBase> GraphBase for &'a G {
  type NodeId = G::NodeId;
}

impl<'a, G: Located> Located for &'a G {
  fn position(&self, node: Self::NodeId) -> Position {
    (*self).position(node)
  }
}
