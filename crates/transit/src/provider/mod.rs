//! Subway data providers.

#[cfg(feature = "serde")]
pub mod snapshot;
pub mod static_provider;

#[cfg(feature = "serde")]
pub use snapshot::{LineRecord, NetworkSnapshot, SectionRecord};
pub use static_provider::StaticLineProvider;
