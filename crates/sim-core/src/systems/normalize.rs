//! Numeric Normalizer
//!
//! Rescales heterogeneous persona attributes to a common probability
//! space. Every factor lands in [0.01,0.99] so the power functions in the
//! influence calculator never see an exact 0 or 1.

use sim_events::FactorId;

use crate::components::persona::{
    EducationTier, IncomeTier, JobSecurityTier, RelationshipTier, SimulationState,
    SocialEnergyTier, SocialEnvironmentTier,
};

/// Lower bound of the normalized space.
pub const NORMALIZED_MIN: f64 = 0.01;

/// Upper bound of the normalized space.
pub const NORMALIZED_MAX: f64 = 0.99;

/// Empirical range the intelligence score is normalized against.
const INTELLIGENCE_MIN: f64 = 70.0;
const INTELLIGENCE_MAX: f64 = 130.0;

/// Rescales one state attribute into [0.01,0.99].
///
/// Unknown factors resolve to a neutral 0.5: factor names are free-form
/// catalog data, not a closed contract, so a typo weakens an influence
/// instead of killing the run.
pub fn normalize(state: &SimulationState, factor: FactorId) -> f64 {
    let raw = match factor {
        FactorId::Stress => state.metrics.stress / 100.0,
        FactorId::Mood => (state.metrics.mood + 100.0) / 200.0,
        FactorId::SocialBelonging => state.metrics.social_belonging / 100.0,
        FactorId::Resilience => state.metrics.resilience / 100.0,
        FactorId::PhysicalHealth => state.metrics.physical_health / 100.0,
        FactorId::Income => ordinal(state.background.income.value(), IncomeTier::MAX_VALUE),
        FactorId::Education => {
            ordinal(state.background.education.value(), EducationTier::MAX_VALUE)
        }
        FactorId::JobSecurity => ordinal(
            state.background.job_security.value(),
            JobSecurityTier::MAX_VALUE,
        ),
        FactorId::SocialEnvironment => ordinal(
            state.background.social_environment.value(),
            SocialEnvironmentTier::MAX_VALUE,
        ),
        FactorId::Intelligence => {
            (state.background.intelligence - INTELLIGENCE_MIN)
                / (INTELLIGENCE_MAX - INTELLIGENCE_MIN)
        }
        FactorId::SocialEnergy => ordinal(
            state.background.social_energy.value(),
            SocialEnergyTier::MAX_VALUE,
        ),
        FactorId::RelationshipQuality => ordinal(
            state.background.relationship_quality.value(),
            RelationshipTier::MAX_VALUE,
        ),
        FactorId::FamilyCloseness => {
            if state.background.family_closeness {
                1.0
            } else {
                0.0
            }
        }
        FactorId::Unknown => 0.5,
    };

    raw.clamp(NORMALIZED_MIN, NORMALIZED_MAX)
}

/// Ordinal tier rescaling: (value - min) / (max - min), with min fixed
/// at 0 on every tier scale.
fn ordinal(value: u8, max: u8) -> f64 {
    value as f64 / max as f64
}
