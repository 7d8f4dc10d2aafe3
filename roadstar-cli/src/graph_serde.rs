use roadstar::graph_impl::{RoadMap, RoadMapData};
use roadstar::{GraphError, SearchOptions};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
  #[error("Failed to open graph file: {0}")]
  Io(#[from] std::io::Error),
  #[error("Failed to parse graph file: {0}")]
  Json(#[from] serde_json::Error),
  #[error("Invalid graph: {0}")]
  Graph(#[from] GraphError),
}

/// Contents of a graph file: the road map plus optional search settings.
#[derive(Deserialize)]
pub struct GraphFile {
  #[serde(flatten)]
  pub map: RoadMapData,
  #[serde(default)]
  pub options: SearchOptions,
}

pub fn load_graph(path: &str) -> Result<(RoadMap, SearchOptions), LoadError> {
  let file = BufReader::new(File::open(path)?);
  let contents: GraphFile = serde_json::from_reader(file)?;
  let graph = RoadMap::from_data(&contents.map)?;
  Ok((graph, contents.options))
}

#[cfg(test)]
mod tests {
  use super::*;
  use roadstar::spatial::Position;
  use roadstar::Relaxation;

  #[test]
  fn test_parse_graph_file() {
    let json = r#"{
      "metric_scale": 1000.0,
      "nodes": [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
      "roads": [[0, 1], [1, 2]],
      "options": { "relaxation": "last_write_wins" }
    }"#;

    let contents: GraphFile = serde_json::from_str(json).unwrap();
    assert_eq!(contents.options.relaxation, Relaxation::LastWriteWins);
    assert_eq!(contents.options.epsilon, roadstar::options::DEFAULT_EPSILON);

    let graph = RoadMap::from_data(&contents.map).unwrap();
    assert_eq!(graph.number_of_nodes(), 3);
    assert_eq!(graph.number_of_roads(), 2);
  }

  #[test]
  fn test_options_are_optional() {
    let json = r#"{ "metric_scale": 1.0, "nodes": [[0.5, 0.5]], "roads": [] }"#;
    let contents: GraphFile = serde_json::from_str(json).unwrap();
    assert_eq!(contents.options, SearchOptions::default());
  }

  #[test]
  fn test_load_errors() {
    assert!(matches!(
      load_graph("/nonexistent/graph.json"),
      Err(LoadError::Io(_))
    ));

    let json = r#"{ "metric_scale": 1.0, "nodes": [[0.5, 0.5]], "roads": [[0, 4]] }"#;
    let contents: GraphFile = serde_json::from_str(json).unwrap();
    assert_eq!(
      RoadMap::from_data(&contents.map).err(),
      Some(GraphError::UnknownNode { road: 0, node: 4 })
    );
  }

  #[test]
  fn test_demo_graph() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../demos/grid.json");
    let (mut graph, options) = load_graph(path).unwrap();
    assert_eq!(graph.number_of_nodes(), 10);

    let route = graph
      .plan_route(
        &Position { x: 10.0, y: 10.0 },
        &Position { x: 90.0, y: 90.0 },
        options,
      )
      .unwrap();

    assert_eq!(route.ids[..3], [0, 9, 4]);
    assert_eq!(route.ids.last(), Some(&8));
    let expected = (0.8 + 2.0 * 0.08f32.sqrt()) * 1200.0;
    assert!((route.distance - expected).abs() < 0.5);
  }
}
