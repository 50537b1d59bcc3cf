//! Station graph assembled from line snapshots, and shortest-path search over it.

pub mod builder;
pub mod shortest_path;

pub use builder::StationGraph;
pub use shortest_path::ShortestPath;
