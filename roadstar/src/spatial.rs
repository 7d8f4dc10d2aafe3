//! Planar geometry in the normalized map space.

use geo::algorithm::euclidean_distance::EuclideanDistance;
use geo::Point;

#[doc(hidden)]
pub use geo::Coordinate;

/// A point in the normalized `[0, 1] x [0, 1]` space of the map.
pub type Position = Coordinate<f32>;

/// Factor converting user input given in percent of the map extent into normalized units.
pub const PERCENT_SCALE: f32 = 0.01;

/// Upper bound of user input on the percentage scale.
pub const PERCENT_MAX: f32 = 100.0;

pub fn euclidean_distance(from: &Position, to: &Position) -> f32 {
  Point::from(*from).euclidean_distance(&Point::from(*to))
}

/// Checks that `p` is a valid coordinate on the `[0, 100]` percentage scale.
pub fn is_percent_position(p: &Position) -> bool {
  let in_range = |v: f32| v.is_finite() && (0.0..=PERCENT_MAX).contains(&v);
  in_range(p.x) && in_range(p.y)
}

/// Converts a `[0, 100]` percentage coordinate into the normalized map space.
pub fn from_percent(p: &Position) -> Position {
  Position {
    x: p.x * PERCENT_SCALE,
    y: p.y * PERCENT_SCALE,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_euclidean_distance() {
    let a = Position { x: 0.0, y: 0.0 };
    let b = Position { x: 3.0, y: 4.0 };
    assert_eq!(euclidean_distance(&a, &b), 5.0);
    assert_eq!(euclidean_distance(&b, &a), 5.0);
    assert_eq!(euclidean_distance(&a, &a), 0.0);
  }

  #[test]
  fn test_percent_positions() {
    assert!(is_percent_position(&Position { x: 0.0, y: 100.0 }));
    assert!(is_percent_position(&Position { x: 42.5, y: 7.0 }));
    assert!(!is_percent_position(&Position { x: -0.1, y: 50.0 }));
    assert!(!is_percent_position(&Position { x: 50.0, y: 100.5 }));
    assert!(!is_percent_position(&Position { x: f32::NAN, y: 50.0 }));
    assert!(!is_percent_position(&Position { x: 50.0, y: f32::INFINITY }));

    let normalized = from_percent(&Position { x: 50.0, y: 25.0 });
    assert!((normalized.x - 0.5).abs() < 1e-6);
    assert!((normalized.y - 0.25).abs() < 1e-6);
  }
}
