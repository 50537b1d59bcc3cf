//! Serialized form of a network snapshot.
//!
//! Sections refer to stations by identifier. Loading resolves every
//! identifier against the station list and validates each line.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::identifiers::*;
use crate::models::types::*;
use crate::provider::static_provider::StaticLineProvider;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub lines: Vec<LineRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LineRecord {
    pub id: LineIdentifier,
    pub name: String,
    #[serde(default)]
    pub color: String,
    pub sections: Vec<SectionRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SectionRecord {
    pub up: StationIdentifier,
    pub down: StationIdentifier,
    pub distance: Distance,
}

impl NetworkSnapshot {
    /// Resolve and validate the snapshot into lines.
    ///
    /// Station and line identifiers must be unique within the snapshot.
    pub fn into_lines(self) -> Result<(Vec<Station>, Vec<Line>)> {
        let mut station_map = HashMap::with_capacity(self.stations.len());
        for station in &self.stations {
            if station_map.insert(station.id.clone(), station.clone()).is_some() {
                return Err(SubwayError::InvalidData(format!(
                    "Station {} is listed twice",
                    station.id
                )));
            }
        }

        let mut line_ids = HashSet::with_capacity(self.lines.len());
        for line in &self.lines {
            if !line_ids.insert(&line.id) {
                return Err(SubwayError::InvalidData(format!(
                    "Line {} is listed twice",
                    line.id
                )));
            }
        }

        let resolve = |id: &StationIdentifier| {
            station_map
                .get(id)
                .cloned()
                .ok_or_else(|| SubwayError::StationNotFound(id.clone()))
        };

        let lines = self
            .lines
            .into_iter()
            .map(|record| {
                let sections = record
                    .sections
                    .iter()
                    .map(|s| Section::new(resolve(&s.up)?, resolve(&s.down)?, s.distance))
                    .collect::<Result<Vec<_>>>()?;
                Line::new(record.id, record.name, record.color, sections)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((self.stations, lines))
    }
}

impl StaticLineProvider {
    /// Build a provider from a deserialized snapshot
    pub fn from_snapshot(snapshot: NetworkSnapshot) -> Result<Self> {
        let (stations, lines) = snapshot.into_lines()?;
        Ok(Self::from_data(stations, lines))
    }
}
