//! Eligibility Predicate
//!
//! Pure check deciding whether an event may occur at all, re-evaluated
//! every step against the live history.

use sim_events::LifeEvent;

use crate::components::persona::SimulationState;

/// An event may occur iff the persona's age is inside the window, the
/// event is not a unique one that already happened, every prerequisite
/// is in the history, and no exclusion is.
pub fn is_eligible(event: &LifeEvent, state: &SimulationState) -> bool {
    if state.age < event.min_age || state.age > event.max_age {
        return false;
    }

    if event.unique && state.has_occurred(&event.id) {
        return false;
    }

    if !event.prerequisites.iter().all(|id| state.has_occurred(id)) {
        return false;
    }

    if event.exclusions.iter().any(|id| state.has_occurred(id)) {
        return false;
    }

    true
}

/// Filters a pool down to the eligible events.
pub fn filter_eligible<'a>(
    events: &'a [LifeEvent],
    state: &SimulationState,
) -> Vec<&'a LifeEvent> {
    events.iter().filter(|e| is_eligible(e, state)).collect()
}
