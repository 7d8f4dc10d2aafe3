use crate::graph_impl::*;
use crate::spatial::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn road_map_from(positions: Vec<(f32, f32)>, roads: Vec<(usize, usize)>, metric_scale: f32) -> RoadMap {
  let mut graph = RoadMap::new(metric_scale);
  for (x, y) in positions {
    graph.add_node(Position { x: x, y: y });
  }
  for (from, to) in roads {
    graph.add_road(from as Idx, to as Idx);
  }
  graph
}

fn grid_id(size: usize, row: usize, col: usize) -> usize {
  row * size + col
}

/// `size` x `size` grid spanning the unit square, node `row * size + col` sits at `(col, row)`.
pub fn grid_road_map(size: usize, metric_scale: f32) -> RoadMap {
  let step = 1.0 / (size - 1) as f32;
  let mut positions = Vec::new();
  let mut roads = Vec::new();

  for row in 0..size {
    for col in 0..size {
      positions.push((col as f32 * step, row as f32 * step));
      if col + 1 < size {
        roads.push((grid_id(size, row, col), grid_id(size, row, col + 1)));
      }
      if row + 1 < size {
        roads.push((grid_id(size, row, col), grid_id(size, row + 1, col)));
      }
    }
  }

  road_map_from(positions, roads, metric_scale)
}

/// Grid with jittered node positions and some random diagonal roads.
pub fn sparse_road_map(size: usize, seed: u64, metric_scale: f32) -> RoadMap {
  let mut rng = StdRng::seed_from_u64(seed);
  let step = 1.0 / size as f32;
  let mut positions = Vec::new();
  let mut roads = Vec::new();

  for row in 0..size {
    for col in 0..size {
      let jitter_x: f32 = rng.random_range(0.0..0.8);
      let jitter_y: f32 = rng.random_range(0.0..0.8);
      positions.push(((col as f32 + jitter_x) * step, (row as f32 + jitter_y) * step));

      if col + 1 < size {
        roads.push((grid_id(size, row, col), grid_id(size, row, col + 1)));
      }
      if row + 1 < size {
        roads.push((grid_id(size, row, col), grid_id(size, row + 1, col)));
      }
      if col + 1 < size && row + 1 < size && rng.random_bool(0.3) {
        roads.push((grid_id(size, row, col), grid_id(size, row + 1, col + 1)));
      }
    }
  }

  road_map_from(positions, roads, metric_scale)
}
