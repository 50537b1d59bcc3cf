//! In-memory line provider holding one immutable snapshot of the network.

use std::collections::HashMap;
use std::sync::Arc;

use crate::identifiers::*;
use crate::models::{traits::*, types::*};

// ============================================================================
// Static Provider
// ============================================================================

/// In-memory provider over a fixed set of stations and lines
///
/// This type is cheap to clone since the lines are stored in `Arc`s.
#[derive(Clone, Debug, Default)]
pub struct StaticLineProvider {
    // Core data
    stations: Vec<Station>,
    lines: Vec<Arc<Line>>,

    // Lookup maps
    station_map: HashMap<StationIdentifier, Station>,
    line_map: HashMap<LineIdentifier, Arc<Line>>,
}

impl StaticLineProvider {
    /// Create a new empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a provider from validated stations and lines.
    ///
    /// Stations that only appear inside a line's sections are registered as
    /// well, so `get_station` finds every station the graph can contain.
    /// Identifiers are expected to be unique; `NetworkSnapshot::into_lines`
    /// enforces that for loaded data.
    pub fn from_data(stations: Vec<Station>, lines: Vec<Line>) -> Self {
        let lines: Vec<Arc<Line>> = lines.into_iter().map(Arc::new).collect();

        let mut all_stations = Vec::with_capacity(stations.len());
        let mut station_map = HashMap::with_capacity(stations.len());
        let line_stations = lines.iter().flat_map(|line| line.stations());
        for station in stations.into_iter().chain(line_stations) {
            if !station_map.contains_key(&station.id) {
                station_map.insert(station.id.clone(), station.clone());
                all_stations.push(station);
            }
        }

        let line_map: HashMap<_, _> = lines
            .iter()
            .map(|l| (l.id().clone(), l.clone()))
            .collect();

        Self {
            stations: all_stations,
            lines,
            station_map,
            line_map,
        }
    }
}

impl LineProvider for StaticLineProvider {
    fn get_station(&self, id: &StationIdentifier) -> Option<Station> {
        self.station_map.get(id).cloned()
    }

    fn get_line(&self, id: &LineIdentifier) -> Option<Arc<Line>> {
        self.line_map.get(id).cloned()
    }

    fn all_stations(&self) -> Vec<Station> {
        self.stations.clone()
    }

    fn all_lines(&self) -> Vec<Arc<Line>> {
        self.lines.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_provider() {
        let provider = StaticLineProvider::new();
        assert_eq!(provider.all_stations().len(), 0);
        assert_eq!(provider.all_lines().len(), 0);
    }

    #[test]
    fn test_provider_lookups() {
        let gangnam = Station::new("1", "Gangnam");
        let gwanggyo = Station::new("2", "Gwanggyo");
        let unused = Station::new("3", "Jamsil");

        let section = Section::new(gangnam, gwanggyo, 10).unwrap();
        let line = Line::new("sinbundang", "Sinbundang", "bg-red-600", vec![section]).unwrap();

        let provider = StaticLineProvider::from_data(vec![unused], vec![line]);

        assert_eq!(provider.all_stations().len(), 3);
        assert_eq!(provider.all_lines().len(), 1);
        assert!(provider.get_station(&StationIdentifier::new("1")).is_some());
        assert!(provider.get_station(&StationIdentifier::new("3")).is_some());
        assert!(provider.get_station(&StationIdentifier::new("4")).is_none());
        assert!(provider.get_line(&LineIdentifier::new("sinbundang")).is_some());
    }

    #[test]
    fn test_listed_station_name_wins() {
        let listed = Station::new("1", "Gangnam");
        let section = Section::new(Station::new("1", "other"), Station::new("2", "Yangjae"), 3).unwrap();
        let line = Line::new("1", "Line 1", "blue", vec![section]).unwrap();

        let provider = StaticLineProvider::from_data(vec![listed], vec![line]);
        let station = provider.get_station(&StationIdentifier::new("1")).unwrap();
        assert_eq!(&*station.name, "Gangnam");
    }
}
