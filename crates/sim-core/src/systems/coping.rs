//! Coping Trigger Checker
//!
//! Filters the coping pool down to the mechanisms whose threshold
//! conditions and eligibility hold this turn.

use sim_events::LifeEvent;

use crate::components::persona::SimulationState;
use crate::systems::eligibility::is_eligible;

/// No coping mechanism is ever available below this age.
pub const COPING_MIN_AGE: u32 = 14;

/// Whether a coping mechanism's thresholds hold against the current
/// metrics. A mechanism with no thresholds is always triggered;
/// otherwise any single satisfied condition suffices.
pub fn is_triggered(coping: &LifeEvent, state: &SimulationState) -> bool {
    let Some(thresholds) = coping.thresholds() else {
        // Not a coping event at all
        return false;
    };

    if thresholds.is_empty() {
        return true;
    }

    let metrics = &state.metrics;
    if let Some(min_stress) = thresholds.stress_at_least {
        if metrics.stress >= min_stress {
            return true;
        }
    }
    if let Some(max_mood) = thresholds.mood_at_most {
        if metrics.mood <= max_mood {
            return true;
        }
    }
    if let Some(max_belonging) = thresholds.belonging_at_most {
        if metrics.social_belonging <= max_belonging {
            return true;
        }
    }

    false
}

/// The coping mechanisms available this turn: triggered, eligible, and
/// past the hard minimum age.
pub fn filter_triggered<'a>(
    pool: &'a [LifeEvent],
    state: &SimulationState,
) -> Vec<&'a LifeEvent> {
    if state.age < COPING_MIN_AGE {
        return Vec::new();
    }

    pool.iter()
        .filter(|coping| is_eligible(coping, state) && is_triggered(coping, state))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::persona::Background;
    use sim_events::{CopingStyle, TriggerThresholds};

    fn state_at(age: u32) -> SimulationState {
        SimulationState::new(Background::default(), age)
    }

    fn gated_coping(id: &str) -> LifeEvent {
        LifeEvent::coping(id, "Coping", 0.4, CopingStyle::Active).with_thresholds(
            TriggerThresholds {
                stress_at_least: Some(60.0),
                mood_at_most: Some(-30.0),
                belonging_at_most: Some(20.0),
            },
        )
    }

    #[test]
    fn test_no_thresholds_always_triggered() {
        let coping = LifeEvent::coping("cope_walk", "Walk", 0.5, CopingStyle::Active);
        assert!(is_triggered(&coping, &state_at(20)));
    }

    #[test]
    fn test_any_threshold_suffices() {
        let coping = gated_coping("cope_any");

        let mut state = state_at(20);
        assert!(!is_triggered(&coping, &state));

        state.metrics.stress = 60.0;
        assert!(is_triggered(&coping, &state));

        state.metrics.stress = 0.0;
        state.metrics.mood = -30.0;
        assert!(is_triggered(&coping, &state));

        state.metrics.mood = 0.0;
        state.metrics.social_belonging = 20.0;
        assert!(is_triggered(&coping, &state));
    }

    #[test]
    fn test_generic_event_never_triggers() {
        let event = LifeEvent::generic("evt_x", "X", 0.1);
        assert!(!is_triggered(&event, &state_at(20)));
    }

    #[test]
    fn test_minimum_age_gate() {
        let pool = vec![LifeEvent::coping(
            "cope_walk",
            "Walk",
            0.5,
            CopingStyle::Active,
        )];
        assert!(filter_triggered(&pool, &state_at(COPING_MIN_AGE - 1)).is_empty());
        assert_eq!(filter_triggered(&pool, &state_at(COPING_MIN_AGE)).len(), 1);
    }

    #[test]
    fn test_filter_intersects_eligibility() {
        let pool = vec![
            LifeEvent::coping("cope_open", "Open", 0.5, CopingStyle::Active),
            LifeEvent::coping("cope_adult", "Adult only", 0.5, CopingStyle::Avoidant)
                .with_age_window(18, 99),
        ];
        let state = state_at(15);
        let triggered = filter_triggered(&pool, &state);
        assert_eq!(triggered.len(), 1);
        assert_eq!(triggered[0].id.as_str(), "cope_open");
    }
}
