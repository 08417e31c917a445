//! Shared data types for the life-course simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for all other crates in the workspace.

pub mod catalog;
pub mod event;
pub mod factor;
pub mod illness;
pub mod phase;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

// Re-export event types
pub use event::{
    CopingStyle, EventCategory, EventId, EventImpacts, EventKind, InfluenceFactor, LifeEvent,
    PersonalityShift, TriggerThresholds,
};

// Re-export factor types
pub use factor::FactorId;

// Re-export phase types
pub use phase::{Gender, LifePhase};

// Re-export illness types
pub use illness::{
    DebuffSpec, DiseaseConfig, GenderTriggerModifiers, IllnessChange, IllnessKind,
    IllnessNotification, Severity,
};

// Re-export catalog types
pub use catalog::{EventCatalog, IllnessCatalog};
