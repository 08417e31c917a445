//! State Components
//!
//! The persona aggregate and its building blocks.

pub mod persona;

pub use persona::{
    Background, EducationTier, IllnessProgression, IncomeTier, JobSecurityTier, Metrics,
    RelationshipTier, SimulationState, SocialEnergyTier, SocialEnvironmentTier,
    MAX_COPING_PREFERENCE,
};
