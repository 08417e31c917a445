//! Event Executor
//!
//! Applies a (possibly debuffed) event to persona state: clamped metric
//! impacts, variant-specific extras, history and trauma bookkeeping.

use sim_events::{EventImpacts, EventKind, LifeEvent};

use crate::components::persona::SimulationState;

/// Raw stress impact at or above which an event counts as traumatic.
const TRAUMA_STRESS_MIN: f64 = 25.0;

/// Raw mood impact at or below which an event counts as traumatic.
const TRAUMA_MOOD_MAX: f64 = -25.0;

/// Adds impacts onto the metrics, clamped to each domain.
pub fn apply_impacts(state: &mut SimulationState, impacts: &EventImpacts) {
    state.metrics.add_stress(impacts.stress);
    state.metrics.add_mood(impacts.mood);
    state.metrics.add_social_belonging(impacts.social_belonging);
    state.metrics.add_resilience(impacts.resilience);
    state.metrics.add_physical_health(impacts.physical_health);
}

/// Applies one selected event with the impacts that survived debuff
/// scaling, plus everything else the occurrence entails.
///
/// Trauma is judged on the event's *definition* impacts, not the scaled
/// numbers: a crisis is a crisis regardless of current debuffs.
pub fn apply_event(state: &mut SimulationState, event: &LifeEvent, impacts: &EventImpacts) {
    apply_impacts(state, impacts);

    if let EventKind::Personal { shift } = &event.kind {
        if !shift.is_neutral() {
            state.background.social_energy =
                state.background.social_energy.shifted(shift.social_energy);
            state.background.relationship_quality = state
                .background
                .relationship_quality
                .shifted(shift.relationship_quality);
        }
    }

    if event.impacts.stress >= TRAUMA_STRESS_MIN || event.impacts.mood <= TRAUMA_MOOD_MAX {
        state.record_trauma();
    }

    state.record_occurrence(event.id.clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::persona::{Background, RelationshipTier, SocialEnergyTier};
    use sim_events::PersonalityShift;

    fn state() -> SimulationState {
        SimulationState::new(Background::default(), 25)
    }

    #[test]
    fn test_impacts_apply_with_clamping() {
        let mut s = state();
        s.metrics.stress = 95.0;
        apply_impacts(
            &mut s,
            &EventImpacts::new(20.0, -10.0, 5.0, 0.0, -3.0),
        );
        assert_eq!(s.metrics.stress, 100.0);
        assert_eq!(s.metrics.mood, 10.0);
        assert_eq!(s.metrics.social_belonging, 65.0);
        assert_eq!(s.metrics.physical_health, 77.0);
    }

    #[test]
    fn test_personal_event_shifts_tiers() {
        let mut s = state();
        let event = LifeEvent::personal("evt_club", "Joined a club", 0.3)
            .with_shift(PersonalityShift::new(1, 1));
        apply_event(&mut s, &event, &event.impacts);

        assert_eq!(s.background.social_energy, SocialEnergyTier::Extraverted);
        assert_eq!(s.background.relationship_quality, RelationshipTier::Good);
        assert!(s.has_occurred(&event.id));
    }

    #[test]
    fn test_trauma_recorded_from_definition_impacts() {
        let mut s = state();
        let harsh = LifeEvent::generic("evt_loss", "Loss", 0.1)
            .with_impacts(EventImpacts::new(10.0, -40.0, 0.0, 0.0, 0.0));
        // Debuffs dampened the applied mood hit, but the definition
        // still marks a trauma
        let softened = EventImpacts::new(10.0, -20.0, 0.0, 0.0, 0.0);
        apply_event(&mut s, &harsh, &softened);

        assert_eq!(s.trauma_ages, vec![25]);
    }

    #[test]
    fn test_mild_event_records_no_trauma() {
        let mut s = state();
        let mild = LifeEvent::generic("evt_ok", "Fine day", 0.1)
            .with_impacts(EventImpacts::new(5.0, 5.0, 0.0, 0.0, 0.0));
        apply_event(&mut s, &mild, &mild.impacts);
        assert!(s.trauma_ages.is_empty());
    }
}
