use crate::graph::Identifier;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Estimated total cost `f = g + h` of a frontier entry.
#[derive(Copy, Clone, Debug)]
pub struct Cost(pub f32);

impl Ord for Cost {
  fn cmp(&self, other: &Self) -> Ordering {
    self.0.total_cmp(&other.0)
  }
}

impl PartialOrd for Cost {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl PartialEq for Cost {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl Eq for Cost {}

#[derive(Copy, Clone, Eq, PartialEq)]
struct State<N: Identifier> {
  cost: Cost,
  id: N,
}

impl<N: Identifier> Ord for State<N> {
  fn cmp(&self, other: &Self) -> Ordering {
    // Sorted desc, so that the heap pops the cheapest entry first
    other.cost.cmp(&self.cost)
  }
}

impl<N: Identifier> PartialOrd for State<N> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// Open list of the search: nodes which are discovered but not expanded yet.
///
/// The same node may be pushed several times with different costs. Telling outdated
/// entries apart is up to the caller, see [`SearchSpace`](crate::search_space::SearchSpace).
pub struct Frontier<N: Identifier> {
  pq: BinaryHeap<State<N>>,
}

impl<N: Identifier> Frontier<N> {
  pub fn new() -> Self {
    Frontier {
      pq: BinaryHeap::new(),
    }
  }

  pub fn push(&mut self, id: N, cost: f32) {
    self.pq.push(State {
      cost: Cost(cost),
      id: id,
    });
  }

  /// Removes the entry with the smallest cost. Ties are resolved arbitrarily.
  pub fn pop(&mut self) -> Option<(N, f32)> {
    self.pq.pop().map(|state| (state.id, state.cost.0))
  }

  pub fn min(&self) -> Option<(N, f32)> {
    self.pq.peek().map(|state| (state.id, state.cost.0))
  }

  pub fn len(&self) -> usize {
    self.pq.len()
  }

  pub fn is_empty(&self) -> bool {
    self.pq.is_empty()
  }
}

impl<N: Identifier> Default for Frontier<N> {
  fn default() -> Self {
    Frontier::new()
  }
}
