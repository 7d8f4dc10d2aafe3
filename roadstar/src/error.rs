//! Errors reported by the route planner.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
  #[error("coordinate ({x}, {y}) is outside of the [0, 100] range")]
  InvalidCoordinate { x: f32, y: f32 },
  #[error("no graph node found near ({x}, {y})")]
  NoNearestNode { x: f32, y: f32 },
  #[error("no route found, frontier exhausted after expanding {expanded} nodes")]
  NoRoute { expanded: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
  #[error("road #{road} references unknown node {node}")]
  UnknownNode { road: usize, node: u32 },
}
