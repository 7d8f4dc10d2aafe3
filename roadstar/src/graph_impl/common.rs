use rstar::{PointDistance, RTreeObject, AABB};

// Node id
pub type Idx = u32;

/// Spatial index entry: a node id and its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedPoint {
  pub id: Idx,
  pub point: [f32; 2],
}

impl IndexedPoint {
  pub fn new(id: Idx, x: f32, y: f32) -> Self {
    Self {
      id: id,
      point: [x, y],
    }
  }
}

impl RTreeObject for IndexedPoint {
  type Envelope = AABB<[f32; 2]>;
  fn envelope(&self) -> Self::Envelope {
    AABB::from_point(self.point)
  }
}

impl PointDistance for IndexedPoint {
  fn distance_2(&self, point: &[f32; 2]) -> f32 {
    let dx = self.point[0] - point[0];
    let dy = self.point[1] - point[1];
    dx * dx + dy * dy
  }
}
