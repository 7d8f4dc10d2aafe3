//! A* search for finding shortest routes in road networks.
//!
//! The search is written against the traits of the [`graph`] module, [`graph_impl::RoadMap`]
//! is a small in-memory implementation of them.

pub mod error;
pub mod frontier;
pub mod graph;
pub mod graph_impl;
pub mod options;
pub mod route;
pub mod search_space;
pub mod spatial;

pub use error::{GraphError, RouteError};
pub use options::{Relaxation, SearchOptions};
pub use route::{plan_route, Route, RoutePlanner};

#[cfg(test)]
mod test_utils;
