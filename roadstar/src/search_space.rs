use crate::frontier::Frontier;
use crate::graph::*;
use crate::options::Relaxation;
use serde::Serialize;
use std::collections::HashMap;
use tracing::trace;

/// Search fields of a node discovered by the search.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeState<N: Identifier> {
  /// Node the best known path arrives from, `None` for the start node.
  pub parent: Option<N>,
  /// Cost so far.
  pub g: f32,
  /// Heuristic estimate of the remaining cost.
  pub h: f32,
  /// Set once the node left the frontier.
  pub closed: bool,
}

impl<N: Identifier> NodeState<N> {
  pub fn f(&self) -> f32 {
    self.g + self.h
  }
}

/// Counters collected while searching.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
  pub expanded: usize,
  pub pushed: usize,
  pub stale: usize,
}

/// State of a single search: the frontier and the search fields of every discovered node.
///
/// A node without an entry in `resolved` is unvisited. The graph itself is never
/// modified, so any number of searches can run over the same graph.
pub struct SearchSpace<N: Identifier> {
  frontier: Frontier<N>,
  resolved: HashMap<N, NodeState<N>>,
  relaxation: Relaxation,
  stats: SearchStats,
}

impl<N: Identifier> SearchSpace<N> {
  pub fn new(relaxation: Relaxation) -> Self {
    SearchSpace {
      frontier: Frontier::new(),
      resolved: HashMap::new(),
      relaxation: relaxation,
      stats: Default::default(),
    }
  }

  /// Seeds the search with the start node.
  pub fn init(&mut self, node: N, h: f32) {
    self.resolve(node, None, 0.0, h);
  }

  pub fn state(&self, node: N) -> Option<&NodeState<N>> {
    self.resolved.get(&node)
  }

  pub fn is_visited(&self, node: N) -> bool {
    self.resolved.contains_key(&node)
  }

  pub fn stats(&self) -> SearchStats {
    self.stats
  }

  /// Removes the frontier node with the smallest `g + h` and marks it as closed.
  ///
  /// Entries which were superseded by a later write for the same node, or which belong to
  /// an already closed node, are dropped on the way.
  pub fn pop_next(&mut self) -> Option<N> {
    while let Some((id, cost)) = self.frontier.pop() {
      if let Some(state) = self.resolved.get_mut(&id) {
        if state.closed || state.f() != cost {
          self.stats.stale += 1;
          continue;
        }
        state.closed = true;
        return Some(id);
      }
    }
    None
  }

  /// Discovers all neighbors of `current`, recording `current` as their parent.
  ///
  /// Closed nodes and the start node are never re-parented. Whether an already discovered
  /// node gets a new parent depends on the [`Relaxation`] of this search.
  pub fn expand<G, H>(&mut self, graph: G, current: N, heuristic: H)
  where
    G: Copy + IntoNeighbors<NodeId = N> + Metric,
    H: Fn(N) -> f32,
  {
    let current_cost = match self.resolved.get(&current) {
      Some(state) => state.g,
      None => return,
    };
    self.stats.expanded += 1;

    for target_id in graph.neighbors(current) {
      let path_cost = current_cost + graph.distance(current, target_id);
      if let Some(target_state) = self.resolved.get(&target_id) {
        if target_state.closed || target_state.parent.is_none() {
          continue;
        }
        if self.relaxation == Relaxation::Improving && path_cost >= target_state.g {
          continue;
        }
      }

      trace!("Relax: ({:?} -> {:?}) @ {}", current, target_id, path_cost);
      self.resolve(target_id, Some(current), path_cost, heuristic(target_id));
    }
  }

  /// Follows parent links from `node` back to the start. The result is ordered `node` first.
  pub fn unwind(&self, node: N) -> Vec<N> {
    let mut result: Vec<N> = Vec::new();

    let mut current_node = Some(node);
    while let Some(id) = current_node {
      match self.resolved.get(&id) {
        Some(state) => {
          result.push(id);
          current_node = state.parent;
        }
        None => break,
      }
    }
    result
  }

  fn resolve(&mut self, node: N, parent_node: Option<N>, path_cost: f32, h: f32) {
    let state = NodeState {
      parent: parent_node,
      g: path_cost,
      h: h,
      closed: false,
    };
    self.resolved.insert(node, state);
    self.frontier.push(node, state.f());
    self.stats.pushed += 1;
  }
}
