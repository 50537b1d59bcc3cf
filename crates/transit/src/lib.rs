//! # subway-transit
//!
//! Shortest paths and fares over a subway network.
//!
//! ## Features
//!
//! - **Snapshot input**: lines arrive as validated, immutable values
//! - **Multi-edge graph**: sections shared by several lines stay separate edges
//! - **Banded fares**: distance-based pricing with optional rider discounts
//! - **Serde support**: load networks and fare policies (feature `serde`)
//!
//! ## Example
//!
//! ```
//! use subway_transit::prelude::*;
//!
//! let st1 = Station::new("1", "Gangnam");
//! let st2 = Station::new("2", "Yangjae");
//! let st3 = Station::new("3", "Gwanggyo");
//!
//! let line_a = Line::new("a", "Line A", "bg-red-600", vec![
//!     Section::new(st1.clone(), st2.clone(), 10).unwrap(),
//!     Section::new(st2, st3.clone(), 10).unwrap(),
//! ]).unwrap();
//! let line_b = Line::new("b", "Line B", "bg-green-600", vec![
//!     Section::new(st1, st3, 15).unwrap(),
//! ]).unwrap();
//!
//! let provider = StaticLineProvider::from_data(vec![], vec![line_a, line_b]);
//! let service = PathService::new(provider);
//!
//! let path = service
//!     .find_shortest_path(&StationIdentifier::new("1"), &StationIdentifier::new("3"))
//!     .unwrap();
//! assert_eq!(path.distance, 15);
//! assert_eq!(path.fare, 1350);
//! ```

pub mod fare;
pub mod graph;
pub mod identifiers;
pub mod models;
pub mod provider;
pub mod service;

// Re-exports for convenience
pub mod prelude {
    pub use crate::fare::{fare, FarePolicy, Rider, RiderCategory};
    pub use crate::graph::{ShortestPath, StationGraph};
    pub use crate::identifiers::*;
    pub use crate::models::{traits::*, types::*};
    pub use crate::provider::StaticLineProvider;
    #[cfg(feature = "serde")]
    pub use crate::provider::{LineRecord, NetworkSnapshot, SectionRecord};
    pub use crate::service::{PathResult, PathService};
}

pub use prelude::*;
