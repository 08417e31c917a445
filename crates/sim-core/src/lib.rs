//! Life-Course Simulation Engine
//!
//! Advances one persona year by year: weighted stochastic selection of
//! life events, a concurrent mental-health state machine with smoothly
//! fluctuating debuffs, and a recorded timeline for later analysis.
//!
//! The engine consumes two read-only catalogs it does not own (event
//! definitions per life phase, illness configs per key) and exposes a
//! single-owner step function; see [`engine::Simulation`].

use rand::rngs::SmallRng;

pub mod components;
pub mod config;
pub mod engine;
pub mod output;
pub mod setup;
pub mod systems;

pub use components::persona::{Background, Metrics, SimulationState};
pub use config::{ConfigError, EngineConfig};
pub use engine::{AppliedEvent, SimError, Simulation, StepOutcome};
pub use output::timeline::{Timeline, TimelineLogger, YearRecord};

/// Seeded random number generator for one run
pub struct SimRng(pub SmallRng);
