//! Engine Systems
//!
//! All simulation systems: normalization, influence math, event
//! weighting, stochastic sampling, coping triggers, eligibility, smooth
//! noise, illness progression, and event execution.

pub mod coping;
pub mod eligibility;
pub mod execute;
pub mod illness;
pub mod influence;
pub mod noise;
pub mod normalize;
pub mod select;
pub mod weight;

// Re-export commonly used systems
pub use coping::{filter_triggered, is_triggered, COPING_MIN_AGE};
pub use eligibility::{filter_eligible, is_eligible};
pub use execute::{apply_event, apply_impacts};
pub use illness::{
    apply_debuffs, current_debuffs, process_step, DebuffMultipliers, MAX_CONCURRENT_ILLNESSES,
    TRIGGER_COOLDOWN_STEPS,
};
pub use influence::{calculate_influence, INFLUENCE_MAX, INFLUENCE_MIN};
pub use noise::SmoothNoise;
pub use normalize::{normalize, NORMALIZED_MAX, NORMALIZED_MIN};
pub use select::{select_distinct, select_one};
pub use weight::{calculate_all_weights, calculate_weight, WeightedEvent, WEIGHT_MAX, WEIGHT_MIN};
