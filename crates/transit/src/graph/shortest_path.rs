//! Minimum-distance path between two stations.
//!
//! Runs Dijkstra (A* with a zero estimate) over the undirected graph. A path
//! longer than `Distance::MAX` reports `Distance::MAX`. When
//! several paths share the minimum distance, the first one settled is
//! returned; only the distance is guaranteed.

use petgraph::algo::astar;
use tracing::debug;

use crate::graph::builder::StationGraph;
use crate::identifiers::StationIdentifier;
use crate::models::types::*;

/// Ordered stations from source to target, inclusive
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPath {
    pub stations: Vec<Station>,
    pub distance: Distance,
}

impl StationGraph {
    /// Find the shortest path between two stations.
    ///
    /// Checks run cheapest first: identical stations, then membership of
    /// both stations in the graph, then reachability.
    pub fn shortest_path(
        &self,
        source: &StationIdentifier,
        target: &StationIdentifier,
    ) -> std::result::Result<ShortestPath, PathError> {
        if source == target {
            return Err(PathError::SameStation(source.clone()));
        }

        let start = *self
            .station_index
            .get(source)
            .ok_or_else(|| PathError::InvalidStation(source.clone()))?;
        let goal = *self
            .station_index
            .get(target)
            .ok_or_else(|| PathError::InvalidStation(target.clone()))?;

        // Costs accumulate in u64 so long paths cannot wrap around
        let (cost, nodes) = astar(
            &self.graph,
            start,
            |node| node == goal,
            |edge| u64::from(*edge.weight()),
            |_| 0,
        )
        .ok_or_else(|| PathError::NoPath {
            from: source.clone(),
            to: target.clone(),
        })?;

        let distance = Distance::try_from(cost).unwrap_or(Distance::MAX);
        let stations: Vec<Station> = nodes
            .into_iter()
            .filter_map(|node| self.graph.node_weight(node).cloned())
            .collect();

        debug!(%source, %target, distance, hops = stations.len() - 1, "found shortest path");

        Ok(ShortestPath { stations, distance })
    }
}
