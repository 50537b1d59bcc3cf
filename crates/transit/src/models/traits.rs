//! Core traits for subway data.
//!
//! Line management (creating lines, inserting or removing stations) lives
//! outside this crate. It hands the path engine finished snapshots through
//! [`LineProvider`].

use std::sync::Arc;

use crate::identifiers::*;
use crate::models::types::*;

// ============================================================================
// Provider Trait
// ============================================================================

/// Read-only source of the current network.
///
/// Every call returns values that already satisfy the line invariants. A
/// path query reads `all_lines` once and builds its graph from that result.
pub trait LineProvider: Send + Sync {
    // ---- Lookups ----
    fn get_station(&self, id: &StationIdentifier) -> Option<Station>;
    fn get_line(&self, id: &LineIdentifier) -> Option<Arc<Line>>;

    // ---- Collections ----
    fn all_stations(&self) -> Vec<Station>;
    fn all_lines(&self) -> Vec<Arc<Line>>;
}

impl<P: LineProvider + ?Sized> LineProvider for Arc<P> {
    fn get_station(&self, id: &StationIdentifier) -> Option<Station> {
        (**self).get_station(id)
    }

    fn get_line(&self, id: &LineIdentifier) -> Option<Arc<Line>> {
        (**self).get_line(id)
    }

    fn all_stations(&self) -> Vec<Station> {
        (**self).all_stations()
    }

    fn all_lines(&self) -> Vec<Arc<Line>> {
        (**self).all_lines()
    }
}
