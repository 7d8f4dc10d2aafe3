//! Route finding algorithms.

use crate::error::RouteError;
use crate::graph::*;
use crate::options::SearchOptions;
use crate::search_space::*;
use crate::spatial::*;

use serde::Serialize;
use tracing::debug;

pub trait RoutableGraph: IntoNeighbors + Metric + Spatial {}
impl<T> RoutableGraph for T where T: IntoNeighbors + Metric + Spatial {}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Route<N: Identifier> {
  /// Distance in real-world units (meters).
  pub distance: f32,
  /// Node ids from the start to the goal, both included.
  pub ids: Vec<N>,
  pub stats: SearchStats,
}

/// A* search between two nodes of a graph.
///
/// The planner only borrows the graph. All search fields live in a [`SearchSpace`] created
/// by each call to [`RoutePlanner::search`], so a planner can be searched any number of times.
pub struct RoutePlanner<G: GraphBase> {
  graph: G,
  start: G::NodeId,
  goal: G::NodeId,
  options: SearchOptions,
}

fn snap_to_graph<G: Spatial>(graph: &G, position: &Position) -> Result<G::NodeId, RouteError> {
  if !is_percent_position(position) {
    return Err(RouteError::InvalidCoordinate {
      x: position.x,
      y: position.y,
    });
  }

  graph
    .nearest_node(&from_percent(position))
    .ok_or(RouteError::NoNearestNode {
      x: position.x,
      y: position.y,
    })
}

impl<G: Copy + RoutableGraph> RoutePlanner<G> {
  /// Creates a planner between the nodes closest to `start` and `end`.
  ///
  /// Both coordinates are given in percent of the map extent, i.e. in the `[0, 100]` range.
  pub fn new(
    graph: G,
    start: &Position,
    end: &Position,
    options: SearchOptions,
  ) -> Result<Self, RouteError> {
    let start_id = snap_to_graph(&graph, start)?;
    let goal_id = snap_to_graph(&graph, end)?;
    debug!(
      "Planning from ({}, {}) -> {:?} to ({}, {}) -> {:?}",
      start.x, start.y, start_id, end.x, end.y, goal_id
    );

    Ok(RoutePlanner {
      graph: graph,
      start: start_id,
      goal: goal_id,
      options: options,
    })
  }

  /// Creates a planner between two known nodes.
  pub fn between(graph: G, start: G::NodeId, goal: G::NodeId, options: SearchOptions) -> Self {
    RoutePlanner {
      graph: graph,
      start: start,
      goal: goal,
      options: options,
    }
  }

  pub fn start(&self) -> G::NodeId {
    self.start
  }

  pub fn goal(&self) -> G::NodeId {
    self.goal
  }

  /// Straight-line distance from `node` to the goal.
  pub fn heuristic(&self, node: G::NodeId) -> f32 {
    euclidean_distance(&self.graph.position(node), &self.graph.position(self.goal))
  }

  fn is_goal(&self, node: G::NodeId) -> bool {
    node == self.goal || self.heuristic(node) < self.options.epsilon
  }

  pub fn search(&self) -> Result<Route<G::NodeId>, RouteError> {
    let mut search_space: SearchSpace<G::NodeId> = SearchSpace::new(self.options.relaxation);
    search_space.init(self.start, self.heuristic(self.start));

    while let Some(current) = search_space.pop_next() {
      if self.is_goal(current) {
        let route = construct_final_path(self.graph, &search_space, current);
        debug!(
          "Route found: distance = {}, nodes = {}, stats = {:?}",
          route.distance,
          route.ids.len(),
          route.stats
        );
        return Ok(route);
      }
      search_space.expand(self.graph, current, |id| self.heuristic(id));
    }

    let stats = search_space.stats();
    debug!("No route found: stats = {:?}", stats);
    Err(RouteError::NoRoute {
      expanded: stats.expanded,
    })
  }
}

/// Builds the route ending at `node` from the parent links recorded in `search_space`.
///
/// The distance is summed along the route and converted to real-world units with the
/// metric scale of the graph.
pub fn construct_final_path<G: Metric>(
  graph: G,
  search_space: &SearchSpace<G::NodeId>,
  node: G::NodeId,
) -> Route<G::NodeId> {
  // Need to reverse the list to get elements in the routing order
  let ids: Vec<G::NodeId> = search_space.unwind(node).into_iter().rev().collect();
  let distance: f32 = ids
    .windows(2)
    .map(|step| graph.distance(step[0], step[1]))
    .sum();

  Route {
    distance: distance * graph.metric_scale(),
    ids: ids,
    stats: search_space.stats(),
  }
}

/// Snaps both coordinates to the graph and searches for a route between them.
pub fn plan_route<G: Copy + RoutableGraph>(
  graph: G,
  start: &Position,
  end: &Position,
  options: SearchOptions,
) -> Result<Route<G::NodeId>, RouteError> {
  RoutePlanner::new(graph, start, end, options)?.search()
}
