use crate::graph::GraphBase;
use crate::spatial::Position;

/// Defines a spatial index for graph nodes
pub trait Spatial: GraphBase {
  /// Closest node to `position`, `None` only if the graph has no nodes.
  fn nearest_node(&self, position: &Position) -> Option<Self::NodeId>;
}

impl<'a, G: Spatial> Spatial for &'a G {
  fn nearest_node(&self, position: &Position) -> Option<Self::NodeId> {
    (*self).nearest_node(position)
  }
}
