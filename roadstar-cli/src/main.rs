mod graph_serde;

use clap::{value_t_or_exit, App, Arg};
use graph_serde::load_graph;
use roadstar::spatial::Position;
use roadstar::Relaxation;
use std::process;
use std::time::Instant;
use tracing::{error, info};

fn main() {
  let matches = App::new("roadstar")
    .about("Finds the shortest route between two points of a road map")
    .arg(Arg::with_name("graph").required(true).help("Road map in JSON format"))
    .arg(Arg::with_name("start_x").required(true).help("Start x, 0 to 100"))
    .arg(Arg::with_name("start_y").required(true).help("Start y, 0 to 100"))
    .arg(Arg::with_name("end_x").required(true).help("End x, 0 to 100"))
    .arg(Arg::with_name("end_y").required(true).help("End y, 0 to 100"))
    .arg(
      Arg::with_name("epsilon")
        .long("epsilon")
        .takes_value(true)
        .help("Distance to the goal at which it counts as reached"),
    )
    .arg(
      Arg::with_name("last-write-wins")
        .long("last-write-wins")
        .help("Let every rediscovery of a node overwrite its parent"),
    )
    .arg(Arg::with_name("debug").long("debug"))
    .get_matches();

  tracing_subscriber::fmt()
    .with_max_level(if matches.is_present("debug") {
      tracing::Level::DEBUG
    } else {
      tracing::Level::INFO
    })
    .init();

  let graph_path = value_t_or_exit!(matches, "graph", String);
  let start = Position {
    x: value_t_or_exit!(matches, "start_x", f32),
    y: value_t_or_exit!(matches, "start_y", f32),
  };
  let end = Position {
    x: value_t_or_exit!(matches, "end_x", f32),
    y: value_t_or_exit!(matches, "end_y", f32),
  };

  let load_timer = Instant::now();
  let (mut graph, mut options) = match load_graph(&graph_path) {
    Ok(loaded) => loaded,
    Err(e) => {
      error!("Cannot load {}: {}", graph_path, e);
      process::exit(1);
    }
  };
  info!(
    "Loaded graph with {} nodes and {} roads in {:.2} seconds",
    graph.number_of_nodes(),
    graph.number_of_roads(),
    load_timer.elapsed().as_secs_f32()
  );

  if matches.is_present("epsilon") {
    options.epsilon = value_t_or_exit!(matches, "epsilon", f32);
  }
  if matches.is_present("last-write-wins") {
    options.relaxation = Relaxation::LastWriteWins;
  }

  let route_timer = Instant::now();
  match graph.plan_route(&start, &end, options) {
    Ok(route) => {
      info!(
        "Route found in {}s: expanded = {}, pushed = {}, stale = {}",
        route_timer.elapsed().as_secs_f32(),
        route.stats.expanded,
        route.stats.pushed,
        route.stats.stale
      );
      let ids: Vec<String> = route.ids.iter().map(|id| id.to_string()).collect();
      println!("Path: {}", ids.join(" -> "));
      println!("Distance: {} meters", route.distance);
    }
    Err(e) => {
      error!("{}", e);
      process::exit(1);
    }
  }
}
