//! Event Weight Calculator
//!
//! Combines an event's base probability with all influence multipliers
//! and the habit boost into a clamped selection weight, and derives
//! normalized probabilities for a whole pool.

use sim_events::{EventKind, LifeEvent};

use crate::components::persona::{SimulationState, MAX_COPING_PREFERENCE};
use crate::systems::influence::calculate_influence;
use crate::systems::normalize::normalize;

/// Floor of a final event weight.
pub const WEIGHT_MIN: f64 = 0.001;

/// Ceiling of a final event weight.
pub const WEIGHT_MAX: f64 = 0.99;

/// Largest habit boost a maxed-out preference score yields.
const HABIT_BOOST_MAX: f64 = 0.5;

/// An event with its raw selection weight and pool-normalized
/// probability. Ephemeral: recomputed fresh on every selection call.
#[derive(Debug, Clone)]
pub struct WeightedEvent<'a> {
    pub event: &'a LifeEvent,
    pub weight: f64,
    /// weight / pool total; 0 when the pool total is 0
    pub probability: f64,
}

/// Computes the selection weight of one event against the current state.
pub fn calculate_weight(event: &LifeEvent, state: &SimulationState) -> f64 {
    let mut weight = event.base_probability;

    for influence in &event.influences {
        let value = normalize(state, influence.factor);
        weight *= calculate_influence(value, influence.exponent);
    }

    if let EventKind::Coping {
        habit_forming: true,
        ..
    } = event.kind
    {
        weight *= habit_boost(state.coping_preference(&event.id));
    }

    weight.clamp(WEIGHT_MIN, WEIGHT_MAX)
}

/// Habit boost, linear in the stored preference score:
/// 0 yields x1.0, a maxed score yields x1.5.
fn habit_boost(preference: f64) -> f64 {
    let t = (preference / MAX_COPING_PREFERENCE).clamp(0.0, 1.0);
    1.0 + HABIT_BOOST_MAX * t
}

/// Weights a whole pool and derives normalized selection probabilities.
///
/// When the total weight is 0 every probability stays 0; the sampler
/// handles that pool with its uniform fallback.
pub fn calculate_all_weights<'a>(
    events: &[&'a LifeEvent],
    state: &SimulationState,
) -> Vec<WeightedEvent<'a>> {
    let mut weighted: Vec<WeightedEvent<'a>> = events
        .iter()
        .map(|event| WeightedEvent {
            event,
            weight: calculate_weight(event, state),
            probability: 0.0,
        })
        .collect();

    let total: f64 = weighted.iter().map(|w| w.weight).sum();
    if total > 0.0 {
        for entry in &mut weighted {
            entry.probability = entry.weight / total;
        }
    }

    weighted
}
