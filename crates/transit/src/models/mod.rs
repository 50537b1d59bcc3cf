//! Subway data models, types, and traits.

pub mod traits;
pub mod types;

// Re-exports for convenience
pub use traits::LineProvider;
pub use types::{Distance, Fare, Line, PathError, Result, Section, Station, SubwayError};
