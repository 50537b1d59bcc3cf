//! Path queries over the current network.
//!
//! Each query reads the provider's lines once, builds a fresh graph from
//! them and drops it afterwards, so concurrent queries never share state.

use tracing::{debug, warn};

use crate::fare::{FarePolicy, Rider};
use crate::graph::StationGraph;
use crate::identifiers::StationIdentifier;
use crate::models::{traits::LineProvider, types::*};

/// Result of a successful path query
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathResult {
    pub stations: Vec<Station>,
    pub distance: Distance,
    pub fare: Fare,
}

pub struct PathService<P> {
    provider: P,
    policy: FarePolicy,
}

impl<P: LineProvider> PathService<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            policy: FarePolicy::default(),
        }
    }

    /// Use a custom fare policy. Fails if the policy does not validate.
    pub fn with_policy(provider: P, policy: FarePolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { provider, policy })
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn policy(&self) -> &FarePolicy {
        &self.policy
    }

    /// Shortest path between two stations with its full fare
    pub fn find_shortest_path(
        &self,
        source: &StationIdentifier,
        target: &StationIdentifier,
    ) -> std::result::Result<PathResult, PathError> {
        self.find_shortest_path_for(source, target, None)
    }

    /// Shortest path with the fare discounted for `rider`
    pub fn find_shortest_path_for(
        &self,
        source: &StationIdentifier,
        target: &StationIdentifier,
        rider: Option<&Rider>,
    ) -> std::result::Result<PathResult, PathError> {
        let lines = self.provider.all_lines();
        let graph = StationGraph::build(lines.iter().map(|line| line.as_ref()));

        let path = graph.shortest_path(source, target).map_err(|e| {
            warn!(%source, %target, "path query rejected: {e}");
            e
        })?;

        let fare = self.policy.calculate(path.distance);
        let fare = self.policy.discounted(fare, rider);
        debug!(distance = path.distance, fare, "quoted fare");

        Ok(PathResult {
            stations: path.stations,
            distance: path.distance,
            fare,
        })
    }
}
