//! Core data types for the subway network.

use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::identifiers::*;

/// Distance in kilometres. Section distances are always positive.
pub type Distance = u32;

/// Fare in won.
pub type Fare = u32;

// ============================================================================
// Data Structures
// ============================================================================

/// A physical stop. Two stations are equal when their identifiers are.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    pub id: StationIdentifier,
    pub name: Arc<str>,
}

impl Station {
    pub fn new(id: impl Into<StationIdentifier>, name: impl AsRef<str>) -> Self {
        Self {
            id: id.into(),
            name: name.as_ref().into(),
        }
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A weighted edge between two adjacent stations of one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    up: Station,
    down: Station,
    distance: Distance,
}

impl Section {
    pub fn new(up: Station, down: Station, distance: Distance) -> Result<Self> {
        if distance == 0 {
            return Err(SubwayError::InvalidDistance {
                up: up.id,
                down: down.id,
            });
        }

        if up == down {
            return Err(SubwayError::InvalidData(format!(
                "Section cannot connect station {} to itself",
                up.id
            )));
        }

        Ok(Self { up, down, distance })
    }

    pub fn up(&self) -> &Station {
        &self.up
    }

    pub fn down(&self) -> &Station {
        &self.down
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }
}

/// An immutable snapshot of a metro line.
///
/// The sections always form a single simple path, stored in order from the
/// first station to the last one.
#[derive(Clone, Debug)]
pub struct Line {
    id: LineIdentifier,
    name: Arc<str>,
    color: Arc<str>,
    sections: Vec<Section>,
}

impl Line {
    /// Build a line from its sections, which may be given in any order.
    ///
    /// Returns `Err` unless the sections chain into exactly one path without
    /// branches or cycles, and the whole line's length fits in a `Distance`.
    pub fn new(
        id: impl Into<LineIdentifier>,
        name: impl AsRef<str>,
        color: impl AsRef<str>,
        sections: Vec<Section>,
    ) -> Result<Self> {
        let id = id.into();
        let sections = order_sections(&id, sections)?;

        let total = sections
            .iter()
            .try_fold(0 as Distance, |total, s| total.checked_add(s.distance));
        if total.is_none() {
            return Err(SubwayError::InvalidData(format!(
                "Line {}: total length exceeds {} km",
                id,
                Distance::MAX
            )));
        }

        Ok(Self {
            id,
            name: name.as_ref().into(),
            color: color.as_ref().into(),
            sections,
        })
    }

    pub fn id(&self) -> &LineIdentifier {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Sections in travel order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All stations from the first station to the last
    pub fn stations(&self) -> Vec<Station> {
        let mut stations = Vec::with_capacity(self.sections.len() + 1);
        if let Some(first) = self.sections.first() {
            stations.push(first.up.clone());
        }
        stations.extend(self.sections.iter().map(|s| s.down.clone()));
        stations
    }

    pub fn contains(&self, station_id: &StationIdentifier) -> bool {
        self.sections
            .iter()
            .any(|s| &s.up.id == station_id || &s.down.id == station_id)
    }

    pub fn total_distance(&self) -> Distance {
        self.sections.iter().map(|s| s.distance).sum()
    }
}

fn order_sections(line: &LineIdentifier, sections: Vec<Section>) -> Result<Vec<Section>> {
    let invalid = |reason: &str| SubwayError::InvalidData(format!("Line {}: {}", line, reason));

    if sections.is_empty() {
        return Err(invalid("a line needs at least one section"));
    }

    let mut by_up: HashMap<StationIdentifier, Section> = HashMap::with_capacity(sections.len());
    let mut downs = HashSet::with_capacity(sections.len());

    for section in &sections {
        if !downs.insert(section.down.id.clone()) {
            return Err(invalid("two sections end at the same station"));
        }
    }

    let mut first = None;
    let count = sections.len();
    for section in sections {
        let up = section.up.id.clone();
        if by_up.contains_key(&up) {
            return Err(invalid(&format!("line branches at station {}", up)));
        }
        if !downs.contains(&up) {
            if first.is_some() {
                return Err(invalid("sections are not connected"));
            }
            first = Some(up.clone());
        }
        by_up.insert(up, section);
    }

    let Some(mut current) = first else {
        return Err(invalid("sections form a cycle"));
    };

    let mut ordered = Vec::with_capacity(count);
    while let Some(section) = by_up.remove(&current) {
        current = section.down.id.clone();
        ordered.push(section);
    }

    if ordered.len() != count {
        return Err(invalid("sections are not connected"));
    }

    Ok(ordered)
}

// ============================================================================
// Errors
// ============================================================================

/// Failures raised while assembling network data.
#[derive(Debug, thiserror::Error)]
pub enum SubwayError {
    #[error("Station not found: {0}")]
    StationNotFound(StationIdentifier),

    #[error("Section {up} -> {down} must have a positive distance")]
    InvalidDistance {
        up: StationIdentifier,
        down: StationIdentifier,
    },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, SubwayError>;

/// Failures of a shortest-path query. None of them are retryable as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("Source and target are the same station: {0}")]
    SameStation(StationIdentifier),

    #[error("Station is not on any line: {0}")]
    InvalidStation(StationIdentifier),

    #[error("No path from {from} to {to}")]
    NoPath {
        from: StationIdentifier,
        to: StationIdentifier,
    },
}
