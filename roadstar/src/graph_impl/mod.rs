//! Graph data structures.
//! 
//! The module defines a small in-memory road network, [`RoadMap`]. Nodes are stored in an
//! arena and addressed by their index, roads are undirected adjacency lists, and an R-tree
//! answers nearest-node queries. It's meant for moderately sized maps and testing.

mod common;
mod road_map;

pub use common::*;
pub use road_map::*;
