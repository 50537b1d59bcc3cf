//! Builds the weighted, undirected station graph.
//!
//! Every section of every line becomes one edge. Sections joining the same
//! pair of stations on different lines stay as parallel edges; the search
//! picks the lighter one on its own.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use tracing::debug;

use crate::identifiers::StationIdentifier;
use crate::models::types::*;

#[derive(Clone, Debug, Default)]
pub struct StationGraph {
    pub(crate) graph: UnGraph<Station, Distance>,
    pub(crate) station_index: HashMap<StationIdentifier, NodeIndex>,
}

impl StationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph holding every section of the given lines
    pub fn build<'a>(lines: impl IntoIterator<Item = &'a Line>) -> Self {
        let mut graph = Self::new();
        let mut line_count = 0;
        for line in lines {
            for section in line.sections() {
                graph.add_section(section);
            }
            line_count += 1;
        }

        debug!(
            lines = line_count,
            stations = graph.station_count(),
            edges = graph.edge_count(),
            "built station graph"
        );
        graph
    }

    /// Add a station if it doesn't exist, return its NodeIndex
    pub fn add_or_get_station(&mut self, station: &Station) -> NodeIndex {
        if let Some(&index) = self.station_index.get(&station.id) {
            index
        } else {
            let index = self.graph.add_node(station.clone());
            self.station_index.insert(station.id.clone(), index);
            index
        }
    }

    /// Add both endpoints of a section and one edge between them
    pub fn add_section(&mut self, section: &Section) {
        let up = self.add_or_get_station(section.up());
        let down = self.add_or_get_station(section.down());
        self.graph.add_edge(up, down, section.distance());
    }

    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges, counting parallel edges separately
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, id: &StationIdentifier) -> bool {
        self.station_index.contains_key(id)
    }

    pub fn get_station(&self, id: &StationIdentifier) -> Option<&Station> {
        self.station_index
            .get(id)
            .and_then(|&index| self.graph.node_weight(index))
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.graph.node_weights()
    }

    /// Weights of every edge joining `a` and `b`, in either direction
    pub fn edge_weights(&self, a: &StationIdentifier, b: &StationIdentifier) -> Vec<Distance> {
        let (Some(&a), Some(&b)) = (self.station_index.get(a), self.station_index.get(b)) else {
            return Vec::new();
        };

        self.graph
            .edges_connecting(a, b)
            .map(|edge| *edge.weight())
            .collect()
    }
}
