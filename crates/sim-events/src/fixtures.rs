//! Sample data fixtures for testing.
//!
//! This module provides ready-made catalogs for other crates to use.
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // sim-events = { path = "../sim-events", features = ["test-fixtures"] }
//!
//! use sim_events::fixtures;
//!
//! let events = fixtures::sample_event_catalog();
//! let illnesses = fixtures::sample_illness_catalog();
//! ```

use crate::{
    CopingStyle, DebuffSpec, DiseaseConfig, EventCatalog, EventImpacts, FactorId,
    GenderTriggerModifiers, IllnessCatalog, IllnessKind, LifeEvent, LifePhase, PersonalityShift,
    TriggerThresholds,
};

/// Returns a small synthetic event catalog.
///
/// Contains, spread over the adult phases:
/// - 3 generic events (one unique, one influence-weighted, one neutral)
/// - 2 personal events (one with a prerequisite chain and tier shift)
/// - 2 coping mechanisms (one threshold-gated and habit-forming)
pub fn sample_event_catalog() -> EventCatalog {
    let mut catalog = EventCatalog::new();

    catalog.add_generic(
        LifePhase::YoungAdult,
        LifeEvent::generic("evt_job_loss", "Lost a job", 0.2)
            .with_age_window(18, 65)
            .with_impacts(EventImpacts::new(30.0, -20.0, -5.0, 0.0, 0.0))
            .with_influence(FactorId::JobSecurity, -1.5),
    );
    catalog.add_generic(
        LifePhase::YoungAdult,
        LifeEvent::generic("evt_small_win", "Won a small prize", 0.3)
            .with_age_window(18, 99)
            .with_impacts(EventImpacts::new(-5.0, 10.0, 0.0, 0.0, 0.0)),
    );
    catalog.add_generic(
        LifePhase::YoungAdult,
        LifeEvent::generic("evt_first_flat", "Moved into a first flat", 0.25)
            .with_age_window(18, 35)
            .once_per_life()
            .with_impacts(EventImpacts::new(10.0, 15.0, 5.0, 5.0, 0.0)),
    );

    catalog.add_personal(
        LifePhase::YoungAdult,
        LifeEvent::personal("evt_partnership", "Entered a partnership", 0.3)
            .with_age_window(16, 99)
            .once_per_life()
            .with_impacts(EventImpacts::new(-10.0, 25.0, 20.0, 5.0, 0.0))
            .with_influence(FactorId::SocialEnergy, 0.8)
            .with_shift(PersonalityShift::new(0, 1)),
    );
    catalog.add_personal(
        LifePhase::YoungAdult,
        LifeEvent::personal("evt_wedding", "Got married", 0.15)
            .with_age_window(18, 99)
            .once_per_life()
            .with_prerequisite("evt_partnership")
            .with_impacts(EventImpacts::new(5.0, 30.0, 15.0, 5.0, 0.0)),
    );

    catalog.add_coping(
        LifeEvent::coping("cope_sport", "Went running", 0.5, CopingStyle::Active)
            .with_age_window(10, 99)
            .with_impacts(EventImpacts::new(-15.0, 10.0, 0.0, 5.0, 5.0)),
    );
    catalog.add_coping(
        LifeEvent::coping("cope_drinking", "Drank to unwind", 0.3, CopingStyle::Substance)
            .with_age_window(16, 99)
            .with_thresholds(TriggerThresholds {
                stress_at_least: Some(60.0),
                mood_at_most: Some(-30.0),
                belonging_at_most: None,
            })
            .habit_forming()
            .with_impacts(EventImpacts::new(-10.0, 5.0, 0.0, -5.0, -10.0)),
    );

    catalog
}

/// Returns a synthetic illness catalog with short healing times so
/// lifecycle tests stay cheap.
pub fn sample_illness_catalog() -> IllnessCatalog {
    let mut catalog = IllnessCatalog::new();

    catalog.insert(
        IllnessKind::Depression,
        DiseaseConfig::new("Depression", 4, 4, 14)
            .with_stress_debuff(DebuffSpec::Range { min: 1.2, max: 1.6 })
            .with_mood_debuff(DebuffSpec::Range { min: 0.5, max: 0.8 })
            .with_social_debuff(DebuffSpec::Range { min: 0.6, max: 0.9 })
            .with_volatility(0.4)
            .with_gender_modifiers(GenderTriggerModifiers {
                female: 1.5,
                male: 1.0,
            }),
    );
    catalog.insert(
        IllnessKind::AnxietyDisorder,
        DiseaseConfig::new("Anxiety disorder", 3, 3, 10)
            .with_stress_debuff(DebuffSpec::Fixed(1.4))
            .with_mood_debuff(DebuffSpec::Fixed(0.8))
            .with_social_debuff(DebuffSpec::Fixed(0.85))
            .with_volatility(0.7),
    );
    catalog.insert(
        IllnessKind::Burnout,
        DiseaseConfig::new("Burnout", 5, 2, 18)
            .with_stress_debuff(DebuffSpec::Range { min: 1.3, max: 1.9 })
            .with_mood_debuff(DebuffSpec::Range { min: 0.55, max: 0.85 })
            .with_social_debuff(DebuffSpec::Fixed(0.9))
            .with_volatility(0.2),
    );

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalogs_are_consistent() {
        let events = sample_event_catalog();
        assert!(!events.is_empty());
        for event in events.iter() {
            assert!(event.base_probability > 0.0 && event.base_probability < 1.0);
            assert!(event.min_age <= event.max_age);
            for prereq in &event.prerequisites {
                assert!(events.find(prereq).is_some(), "dangling prerequisite");
            }
        }

        let illnesses = sample_illness_catalog();
        assert!(!illnesses.is_empty());
        for (_, config) in illnesses.iter() {
            assert!(config.trigger_chance >= 1);
            assert!(config.healing_time > 0);
        }
    }
}
