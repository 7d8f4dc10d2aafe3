use super::common::*;
use crate::error::{GraphError, RouteError};
use crate::graph::*;
use crate::options::SearchOptions;
use crate::route::{Route, RoutePlanner};
use crate::spatial::Position;
use rstar::RTree;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug)]
struct Node {
  position: Position,
  roads: Vec<Idx>,
}

/// Plain description of a road network, e.g. as read from a file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadMapData {
  /// Meters per normalized unit.
  pub metric_scale: f32,
  /// Node positions in the normalized `[0, 1]` space.
  pub nodes: Vec<[f32; 2]>,
  /// Undirected roads as pairs of node indices.
  pub roads: Vec<[Idx; 2]>,
}

/// Road network with node positions, undirected roads and a nearest-node index.
///
/// Besides answering graph queries the map keeps the last route planned with
/// [`RoadMap::plan_route`].
pub struct RoadMap {
  nodes: Vec<Node>,
  rtree: RTree<IndexedPoint>,
  metric_scale: f32,
  route: Option<Route<Idx>>,
}

impl RoadMap {
  pub fn new(metric_scale: f32) -> Self {
    Self {
      nodes: Vec::new(),
      rtree: RTree::new(),
      metric_scale: metric_scale,
      route: None,
    }
  }

  pub fn from_data(data: &RoadMapData) -> Result<Self, GraphError> {
    let nodes: Vec<Node> = data
      .nodes
      .iter()
      .map(|p| Node {
        position: Position { x: p[0], y: p[1] },
        roads: Vec::new(),
      })
      .collect();
    let entries = nodes
      .iter()
      .enumerate()
      .map(|(id, node)| IndexedPoint::new(id as Idx, node.position.x, node.position.y))
      .collect();

    let mut map = Self {
      nodes: nodes,
      rtree: RTree::bulk_load(entries),
      metric_scale: data.metric_scale,
      route: None,
    };

    for (road, [from, to]) in data.roads.iter().enumerate() {
      for node in [*from, *to].iter() {
        if *node as usize >= map.nodes.len() {
          return Err(GraphError::UnknownNode {
            road: road,
            node: *node,
          });
        }
      }
      map.add_road(*from, *to);
    }
    Ok(map)
  }

  pub fn to_data(&self) -> RoadMapData {
    let mut roads = Vec::new();
    for (from, node) in self.nodes.iter().enumerate() {
      for to in &node.roads {
        if from as Idx <= *to {
          roads.push([from as Idx, *to]);
        }
      }
    }
    RoadMapData {
      metric_scale: self.metric_scale,
      nodes: self.nodes.iter().map(|n| [n.position.x, n.position.y]).collect(),
      roads: roads,
    }
  }

  pub fn add_node(&mut self, position: Position) -> Idx {
    let id = self.nodes.len() as Idx;
    self.nodes.push(Node {
      position: position,
      roads: Vec::new(),
    });
    self.rtree.insert(IndexedPoint::new(id, position.x, position.y));
    id
  }

  /// Connects two nodes in both directions.
  pub fn add_road(&mut self, from: Idx, to: Idx) -> &mut Self {
    self.nodes[from as usize].roads.push(to);
    if from != to {
      self.nodes[to as usize].roads.push(from);
    }
    self
  }

  pub fn number_of_nodes(&self) -> usize {
    self.nodes.len()
  }

  pub fn number_of_roads(&self) -> usize {
    self.to_data().roads.len()
  }

  /// Plans a route between two coordinates given on the `[0, 100]` scale and stores it in the map.
  pub fn plan_route(
    &mut self,
    start: &Position,
    end: &Position,
    options: SearchOptions,
  ) -> Result<Route<Idx>, RouteError> {
    let route = RoutePlanner::new(&*self, start, end, options)?.search()?;
    self.route = Some(route.clone());
    Ok(route)
  }

  /// The last route stored by [`RoadMap::plan_route`].
  pub fn route(&self) -> Option<&Route<Idx>> {
    self.route.as_ref()
  }
}

impl GraphBase for RoadMap {
  type NodeId = Idx;
}

impl<'a> IntoNeighbors for &'a RoadMap {
  type Neighbors = std::iter::Cloned<std::slice::Iter<'a, Idx>>;

  fn neighbors(self, node_id: Idx) -> Self::Neighbors {
    self.nodes[node_id as usize].roads.iter().cloned()
  }
}

impl Located for RoadMap {
  fn position(&self, node_id: Idx) -> Position {
    self.nodes[node_id as usize].position
  }
}

impl Metric for RoadMap {
  fn metric_scale(&self) -> f32 {
    self.metric_scale
  }
}

impl Spatial for RoadMap {
  fn nearest_node(&self, position: &Position) -> Option<Idx> {
    self
      .rtree
      .nearest_neighbor(&[position.x, position.y])
      .map(|entry| entry.id)
  }
}

#[cfg(test)]
mod tests {
  use super::super::super::test_utils::road_map_from;
  use super::*;
  use std::collections::HashSet;

  fn square() -> RoadMap {
    road_map_from(
      vec![(0.1, 0.1), (0.1, 0.9), (0.9, 0.9), (0.9, 0.1), (0.6, 0.6)],
      vec![(0, 1), (1, 2), (2, 3), (3, 0), (4, 2)],
      100.0,
    )
  }

  #[test]
  fn test_neighbors() {
    let graph = square();

    assert_eq!(graph.number_of_nodes(), 5);
    assert_eq!(graph.number_of_roads(), 5);

    let n0: HashSet<_> = (&graph).neighbors(0).collect();
    assert_eq!(n0, [1, 3].iter().cloned().collect());

    let n2: HashSet<_> = (&graph).neighbors(2).collect();
    assert_eq!(n2, [1, 3, 4].iter().cloned().collect());
  }

  #[test]
  fn test_nearest_node() {
    let graph = square();

    assert_eq!(graph.nearest_node(&Position { x: 0.0, y: 0.0 }), Some(0));
    assert_eq!(graph.nearest_node(&Position { x: 0.55, y: 0.65 }), Some(4));
    assert_eq!(graph.nearest_node(&Position { x: 1.0, y: 0.95 }), Some(2));

    let empty = RoadMap::new(1.0);
    assert_eq!(empty.nearest_node(&Position { x: 0.5, y: 0.5 }), None);
  }

  #[test]
  fn test_distance() {
    let graph = square();
    assert!((graph.distance(0, 1) - 0.8).abs() < 1e-6);
    assert_eq!(graph.metric_scale(), 100.0);
    assert_eq!(graph.position(4), Position { x: 0.6, y: 0.6 });
  }

  #[test]
  fn test_data_conversion() {
    let data = RoadMapData {
      metric_scale: 50.0,
      nodes: vec![[0.0, 0.0], [0.5, 0.5], [1.0, 0.0]],
      roads: vec![[0, 1], [1, 2]],
    };
    let graph = RoadMap::from_data(&data).unwrap();
    assert_eq!(graph.number_of_nodes(), 3);
    assert_eq!(graph.to_data(), data);

    let broken = RoadMapData {
      roads: vec![[0, 1], [1, 3]],
      ..data
    };
    assert_eq!(
      RoadMap::from_data(&broken).err(),
      Some(GraphError::UnknownNode { road: 1, node: 3 })
    );
  }

  #[test]
  fn test_plan_route_stores_result() {
    let mut graph = square();
    assert!(graph.route().is_none());

    let route = graph
      .plan_route(
        &Position { x: 10.0, y: 10.0 },
        &Position { x: 60.0, y: 60.0 },
        SearchOptions::default(),
      )
      .unwrap();

    assert_eq!(route.ids.first(), Some(&0));
    assert_eq!(route.ids.last(), Some(&4));
    assert_eq!(graph.route(), Some(&route));
  }
}
