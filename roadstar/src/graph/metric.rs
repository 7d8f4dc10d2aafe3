use crate::graph::Located;
use crate::spatial::euclidean_distance;

/// Distances between graph nodes.
/// 
/// Distances are measured in the normalized map space. `metric_scale` converts them to
/// real-world units (meters).
pub trait Metric: Located {
  /// Length of the road between two adjacent nodes. Defaults to the straight-line distance,
  /// graphs whose roads are longer than that can override it.
  fn distance(&self, from: Self::NodeId, to: Self::NodeId) -> f32 {
    euclidean_distance(&self.position(from), &self.position(to))
  }

  fn metric_scale(&self) -> f32;
}

impl<'a, G: Metric> Metric for &'a G {
  fn distance(&self, from: Self::NodeId, to: Self::NodeId) -> f32 {
    (*self).distance(from, to)
  }

  fn metric_scale(&self) -> f32 {
    (*self).metric_scale()
  }
}
