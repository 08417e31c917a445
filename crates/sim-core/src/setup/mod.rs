//! Default Catalogs
//!
//! Built-in event and illness definitions so the binary runs out of the
//! box. Deliberately modest: a handful of records per phase, enough to
//! exercise every mechanism. Real deployments pass their own catalogs.

use sim_events::{
    CopingStyle, DebuffSpec, DiseaseConfig, EventCatalog, EventImpacts, FactorId,
    GenderTriggerModifiers, IllnessCatalog, IllnessKind, LifeEvent, LifePhase, PersonalityShift,
    TriggerThresholds,
};

/// Builds both default catalogs.
pub fn default_catalogs() -> (EventCatalog, IllnessCatalog) {
    (create_event_catalog(), create_illness_catalog())
}

/// Counts per pool, for startup reporting.
#[derive(Debug, Clone, Copy)]
pub struct CatalogSummary {
    pub generic: usize,
    pub personal: usize,
    pub coping: usize,
    pub illnesses: usize,
}

pub fn summarize(events: &EventCatalog, illnesses: &IllnessCatalog) -> CatalogSummary {
    let coping = events.coping().len();
    let generic: usize = LifePhase::all()
        .iter()
        .map(|&p| events.generic_for(p).len())
        .sum();
    let personal: usize = LifePhase::all()
        .iter()
        .map(|&p| events.personal_for(p).len())
        .sum();
    CatalogSummary {
        generic,
        personal,
        coping,
        illnesses: illnesses.len(),
    }
}

/// Creates the default event catalog.
pub fn create_event_catalog() -> EventCatalog {
    let mut catalog = EventCatalog::new();

    // --- Childhood ---
    catalog.add_generic(
        LifePhase::Childhood,
        LifeEvent::generic("evt_school_start", "Started school", 0.6)
            .with_age_window(5, 7)
            .once_per_life()
            .with_impacts(EventImpacts::new(10.0, 10.0, 15.0, 5.0, 0.0)),
    );
    catalog.add_generic(
        LifePhase::Childhood,
        LifeEvent::generic("evt_moved_town", "Family moved to another town", 0.1)
            .with_age_window(3, 12)
            .with_impacts(EventImpacts::new(15.0, -10.0, -20.0, 0.0, 0.0)),
    );
    catalog.add_generic(
        LifePhase::Childhood,
        LifeEvent::generic("evt_new_pet", "Got a pet", 0.2)
            .with_age_window(4, 12)
            .with_impacts(EventImpacts::new(-5.0, 15.0, 5.0, 0.0, 0.0)),
    );
    catalog.add_personal(
        LifePhase::Childhood,
        LifeEvent::personal("evt_best_friend", "Found a best friend", 0.35)
            .with_age_window(5, 12)
            .once_per_life()
            .with_impacts(EventImpacts::new(-5.0, 20.0, 25.0, 5.0, 0.0))
            .with_influence(FactorId::SocialEnergy, 0.7)
            .with_shift(PersonalityShift::new(1, 1)),
    );
    catalog.add_personal(
        LifePhase::Childhood,
        LifeEvent::personal("evt_parents_separated", "Parents separated", 0.12)
            .with_age_window(2, 12)
            .once_per_life()
            .with_impacts(EventImpacts::new(30.0, -30.0, -10.0, 0.0, 0.0))
            .with_influence(FactorId::FamilyCloseness, -1.2),
    );

    // --- Adolescence ---
    catalog.add_generic(
        LifePhase::Adolescence,
        LifeEvent::generic("evt_exam_failed", "Failed an important exam", 0.2)
            .with_age_window(13, 19)
            .with_impacts(EventImpacts::new(25.0, -20.0, -5.0, 0.0, 0.0))
            .with_influence(FactorId::Intelligence, -0.8)
            .with_influence(FactorId::Stress, 0.6),
    );
    catalog.add_generic(
        LifePhase::Adolescence,
        LifeEvent::generic("evt_sports_team", "Made the sports team", 0.25)
            .with_age_window(13, 17)
            .with_impacts(EventImpacts::new(-5.0, 15.0, 20.0, 5.0, 10.0))
            .with_influence(FactorId::PhysicalHealth, 0.9),
    );
    catalog.add_personal(
        LifePhase::Adolescence,
        LifeEvent::personal("evt_first_love", "Fell in love for the first time", 0.3)
            .with_age_window(13, 19)
            .once_per_life()
            .with_impacts(EventImpacts::new(10.0, 30.0, 10.0, 0.0, 0.0))
            .with_shift(PersonalityShift::new(1, 0)),
    );
    catalog.add_personal(
        LifePhase::Adolescence,
        LifeEvent::personal("evt_school_graduation", "Graduated from school", 0.5)
            .with_age_window(16, 19)
            .once_per_life()
            .with_prerequisite("evt_school_start")
            .with_impacts(EventImpacts::new(-10.0, 20.0, 5.0, 10.0, 0.0))
            .with_influence(FactorId::Education, 0.5),
    );

    // --- Young adulthood ---
    let job_loss = LifeEvent::generic("evt_job_loss", "Lost a job", 0.12)
        .with_age_window(18, 62)
        .with_impacts(EventImpacts::new(35.0, -25.0, -10.0, 0.0, 0.0))
        .with_influence(FactorId::JobSecurity, -1.5)
        .with_influence(FactorId::SocialEnvironment, -0.4);
    let promotion = LifeEvent::generic("evt_promotion", "Got promoted", 0.15)
        .with_age_window(20, 60)
        .with_impacts(EventImpacts::new(10.0, 20.0, 5.0, 5.0, 0.0))
        .with_influence(FactorId::Education, 0.8)
        .with_influence(FactorId::Intelligence, 0.6);
    let accident = LifeEvent::generic("evt_accident", "Had a serious accident", 0.06)
        .with_age_window(14, 99)
        .with_impacts(EventImpacts::new(30.0, -25.0, 0.0, 0.0, -30.0))
        .with_influence(FactorId::Stress, 0.5);

    catalog.add_generic(LifePhase::YoungAdult, job_loss.clone());
    catalog.add_generic(LifePhase::YoungAdult, promotion.clone());
    catalog.add_generic(LifePhase::YoungAdult, accident.clone());
    catalog.add_personal(
        LifePhase::YoungAdult,
        LifeEvent::personal("evt_partnership", "Entered a partnership", 0.3)
            .with_age_window(16, 99)
            .once_per_life()
            .with_impacts(EventImpacts::new(-10.0, 25.0, 20.0, 5.0, 0.0))
            .with_influence(FactorId::SocialEnergy, 0.7)
            .with_influence(FactorId::RelationshipQuality, 0.5)
            .with_shift(PersonalityShift::new(0, 1)),
    );
    catalog.add_personal(
        LifePhase::YoungAdult,
        LifeEvent::personal("evt_wedding", "Got married", 0.18)
            .with_age_window(18, 99)
            .once_per_life()
            .with_prerequisite("evt_partnership")
            .with_impacts(EventImpacts::new(5.0, 30.0, 15.0, 5.0, 0.0)),
    );
    catalog.add_personal(
        LifePhase::YoungAdult,
        LifeEvent::personal("evt_world_trip", "Backpacked around the world", 0.1)
            .with_age_window(18, 35)
            .once_per_life()
            .with_exclusion("evt_first_child")
            .with_impacts(EventImpacts::new(-15.0, 25.0, 5.0, 10.0, 5.0))
            .with_influence(FactorId::Income, 0.6),
    );
    catalog.add_personal(
        LifePhase::YoungAdult,
        LifeEvent::personal("evt_first_child", "Became a parent", 0.15)
            .with_age_window(18, 45)
            .once_per_life()
            .with_prerequisite("evt_partnership")
            .with_impacts(EventImpacts::new(25.0, 30.0, 10.0, 5.0, -5.0)),
    );

    // --- Adulthood ---
    catalog.add_generic(LifePhase::Adult, job_loss.clone());
    catalog.add_generic(LifePhase::Adult, promotion.clone());
    catalog.add_generic(
        LifePhase::Adult,
        LifeEvent::generic("evt_parent_death", "Lost a parent", 0.1)
            .with_age_window(25, 75)
            .once_per_life()
            .with_impacts(EventImpacts::new(30.0, -40.0, -5.0, 0.0, 0.0))
            .with_influence(FactorId::FamilyCloseness, 0.6),
    );
    catalog.add_personal(
        LifePhase::Adult,
        LifeEvent::personal("evt_house_purchase", "Bought a house", 0.12)
            .with_age_window(25, 60)
            .once_per_life()
            .with_impacts(EventImpacts::new(20.0, 15.0, 5.0, 5.0, 0.0))
            .with_influence(FactorId::Income, 1.2),
    );
    catalog.add_personal(
        LifePhase::Adult,
        LifeEvent::personal("evt_divorce", "Went through a divorce", 0.08)
            .with_age_window(22, 75)
            .once_per_life()
            .with_prerequisite("evt_wedding")
            .with_impacts(EventImpacts::new(35.0, -35.0, -20.0, 0.0, 0.0))
            .with_influence(FactorId::RelationshipQuality, -1.3)
            .with_shift(PersonalityShift::new(0, -1)),
    );

    // --- Middle age ---
    catalog.add_generic(LifePhase::MiddleAge, job_loss);
    catalog.add_generic(
        LifePhase::MiddleAge,
        LifeEvent::generic("evt_health_scare", "Had a health scare", 0.15)
            .with_age_window(45, 99)
            .with_impacts(EventImpacts::new(25.0, -15.0, 0.0, 0.0, -20.0))
            .with_influence(FactorId::PhysicalHealth, -1.0),
    );
    catalog.add_generic(
        LifePhase::MiddleAge,
        LifeEvent::generic("evt_inheritance", "Received an inheritance", 0.08)
            .with_age_window(40, 80)
            .with_impacts(EventImpacts::new(-5.0, 10.0, 0.0, 0.0, 0.0)),
    );
    catalog.add_personal(
        LifePhase::MiddleAge,
        LifeEvent::personal("evt_career_peak", "Reached a career peak", 0.1)
            .with_age_window(45, 64)
            .once_per_life()
            .with_prerequisite("evt_promotion")
            .with_impacts(EventImpacts::new(5.0, 20.0, 5.0, 10.0, 0.0)),
    );
    catalog.add_personal(
        LifePhase::MiddleAge,
        LifeEvent::personal("evt_children_moved_out", "Children moved out", 0.2)
            .with_age_window(45, 64)
            .once_per_life()
            .with_prerequisite("evt_first_child")
            .with_impacts(EventImpacts::new(-10.0, -10.0, -15.0, 0.0, 0.0)),
    );

    // --- Senior ---
    catalog.add_generic(
        LifePhase::Senior,
        LifeEvent::generic("evt_retirement", "Retired", 0.5)
            .with_age_window(63, 70)
            .once_per_life()
            .with_impacts(EventImpacts::new(-20.0, 10.0, -10.0, 0.0, 0.0)),
    );
    catalog.add_generic(
        LifePhase::Senior,
        LifeEvent::generic("evt_partner_death", "Lost a partner", 0.08)
            .with_age_window(60, 99)
            .once_per_life()
            .with_prerequisite("evt_partnership")
            .with_impacts(EventImpacts::new(35.0, -50.0, -25.0, 0.0, -5.0)),
    );
    catalog.add_generic(LifePhase::Senior, accident);
    catalog.add_personal(
        LifePhase::Senior,
        LifeEvent::personal("evt_grandchild", "Became a grandparent", 0.2)
            .with_age_window(50, 99)
            .once_per_life()
            .with_prerequisite("evt_first_child")
            .with_impacts(EventImpacts::new(-5.0, 25.0, 15.0, 0.0, 0.0)),
    );
    catalog.add_personal(
        LifePhase::Senior,
        LifeEvent::personal("evt_new_hobby", "Took up a new hobby", 0.3)
            .with_age_window(60, 99)
            .with_impacts(EventImpacts::new(-10.0, 10.0, 10.0, 5.0, 5.0))
            .with_influence(FactorId::SocialEnergy, 0.5),
    );

    // --- Coping pool (age-gated, not phased) ---
    catalog.add_coping(
        LifeEvent::coping("cope_sport", "Went running", 0.45, CopingStyle::Active)
            .with_age_window(14, 99)
            .with_impacts(EventImpacts::new(-15.0, 10.0, 0.0, 5.0, 5.0))
            .with_influence(FactorId::PhysicalHealth, 0.5),
    );
    catalog.add_coping(
        LifeEvent::coping("cope_meet_friends", "Met up with friends", 0.5, CopingStyle::Social)
            .with_age_window(14, 99)
            .with_impacts(EventImpacts::new(-10.0, 15.0, 10.0, 0.0, 0.0))
            .with_influence(FactorId::SocialEnergy, 0.8),
    );
    catalog.add_coping(
        LifeEvent::coping("cope_gaming", "Escaped into gaming", 0.35, CopingStyle::Avoidant)
            .with_age_window(14, 99)
            .with_thresholds(TriggerThresholds {
                stress_at_least: Some(50.0),
                mood_at_most: Some(-20.0),
                belonging_at_most: None,
            })
            .habit_forming()
            .with_impacts(EventImpacts::new(-10.0, 5.0, -5.0, 0.0, -2.0)),
    );
    catalog.add_coping(
        LifeEvent::coping("cope_drinking", "Drank to unwind", 0.25, CopingStyle::Substance)
            .with_age_window(16, 99)
            .with_thresholds(TriggerThresholds {
                stress_at_least: Some(60.0),
                mood_at_most: Some(-30.0),
                belonging_at_most: Some(25.0),
            })
            .habit_forming()
            .with_impacts(EventImpacts::new(-10.0, 5.0, 0.0, -5.0, -10.0)),
    );
    catalog.add_coping(
        LifeEvent::coping("cope_meditation", "Practiced meditation", 0.3, CopingStyle::Active)
            .with_age_window(16, 99)
            .with_impacts(EventImpacts::new(-15.0, 5.0, 0.0, 8.0, 0.0))
            .with_influence(FactorId::Resilience, 0.4),
    );

    catalog
}

/// Creates the default illness catalog covering every key.
pub fn create_illness_catalog() -> IllnessCatalog {
    let mut catalog = IllnessCatalog::new();

    catalog.insert(
        IllnessKind::Depression,
        DiseaseConfig::new("Depression", 8, 6, 14)
            .with_stress_debuff(DebuffSpec::Range { min: 1.2, max: 1.7 })
            .with_mood_debuff(DebuffSpec::Range { min: 0.45, max: 0.75 })
            .with_social_debuff(DebuffSpec::Range { min: 0.55, max: 0.85 })
            .with_volatility(0.25)
            .with_gender_modifiers(GenderTriggerModifiers {
                female: 1.7,
                male: 1.0,
            }),
    );
    catalog.insert(
        IllnessKind::AnxietyDisorder,
        DiseaseConfig::new("Anxiety disorder", 10, 5, 10)
            .with_stress_debuff(DebuffSpec::Range { min: 1.3, max: 1.8 })
            .with_mood_debuff(DebuffSpec::Fixed(0.8))
            .with_social_debuff(DebuffSpec::Range { min: 0.6, max: 0.9 })
            .with_volatility(0.5),
    );
    catalog.insert(
        IllnessKind::PanicDisorder,
        DiseaseConfig::new("Panic disorder", 14, 4, 16)
            .with_stress_debuff(DebuffSpec::Range { min: 1.4, max: 2.1 })
            .with_mood_debuff(DebuffSpec::Fixed(0.85))
            .with_social_debuff(DebuffSpec::Range { min: 0.5, max: 0.9 })
            .with_volatility(0.85),
    );
    catalog.insert(
        IllnessKind::Burnout,
        DiseaseConfig::new("Burnout", 9, 3, 18)
            .with_stress_debuff(DebuffSpec::Range { min: 1.3, max: 1.9 })
            .with_mood_debuff(DebuffSpec::Range { min: 0.55, max: 0.85 })
            .with_social_debuff(DebuffSpec::Fixed(0.9))
            .with_volatility(0.2),
    );
    catalog.insert(
        IllnessKind::Insomnia,
        DiseaseConfig::new("Insomnia", 7, 3, 12)
            .with_stress_debuff(DebuffSpec::Fixed(1.35))
            .with_mood_debuff(DebuffSpec::Fixed(0.85))
            .with_social_debuff(DebuffSpec::Fixed(0.95))
            .with_volatility(0.6),
    );
    catalog.insert(
        IllnessKind::EatingDisorder,
        DiseaseConfig::new("Eating disorder", 16, 5, 12)
            .with_stress_debuff(DebuffSpec::Range { min: 1.2, max: 1.6 })
            .with_mood_debuff(DebuffSpec::Range { min: 0.5, max: 0.8 })
            .with_social_debuff(DebuffSpec::Range { min: 0.5, max: 0.8 })
            .with_volatility(0.45)
            .with_gender_modifiers(GenderTriggerModifiers {
                female: 2.0,
                male: 0.8,
            }),
    );
    catalog.insert(
        IllnessKind::SubstanceUseDisorder,
        DiseaseConfig::new("Substance use disorder", 12, 8, 16)
            .with_stress_debuff(DebuffSpec::Range { min: 1.1, max: 1.6 })
            .with_mood_debuff(DebuffSpec::Range { min: 0.5, max: 0.9 })
            .with_social_debuff(DebuffSpec::Range { min: 0.4, max: 0.8 })
            .with_volatility(0.7)
            .with_gender_modifiers(GenderTriggerModifiers {
                female: 0.9,
                male: 1.6,
            }),
    );

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalogs_validate() {
        let (events, illnesses) = default_catalogs();
        assert!(!events.is_empty());
        assert_eq!(illnesses.len(), IllnessKind::all().len());

        for event in events.iter() {
            assert!(
                event.base_probability > 0.0 && event.base_probability < 1.0,
                "{} probability out of range",
                event.id
            );
            assert!(event.min_age <= event.max_age, "{} window inverted", event.id);
            for prereq in &event.prerequisites {
                assert!(
                    events.find(prereq).is_some(),
                    "{} has dangling prerequisite {}",
                    event.id,
                    prereq
                );
            }
            for exclusion in &event.exclusions {
                assert!(
                    events.find(exclusion).is_some(),
                    "{} has dangling exclusion {}",
                    event.id,
                    exclusion
                );
            }
        }

        for (kind, config) in illnesses.iter() {
            assert!(config.trigger_chance >= 1, "{} chance", kind);
            assert!(config.healing_time > 0, "{} healing", kind);
            assert!(
                (0.0..=1.0).contains(&config.volatility),
                "{} volatility",
                kind
            );
        }
    }

    #[test]
    fn test_every_phase_has_generic_events() {
        let events = create_event_catalog();
        for &phase in LifePhase::all() {
            assert!(
                !events.generic_for(phase).is_empty(),
                "no generic events for {}",
                phase
            );
        }
    }

    #[test]
    fn test_coping_pool_respects_minimum_age() {
        let events = create_event_catalog();
        for coping in events.coping() {
            assert!(
                coping.min_age >= crate::systems::coping::COPING_MIN_AGE,
                "{} opens below the coping age gate",
                coping.id
            );
        }
    }
}
