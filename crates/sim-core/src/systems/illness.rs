//! Illness Manager
//!
//! The concurrent illness state machine: per-key trigger evaluation,
//! onset with rolled severity, progression tracking, combined debuff
//! computation, healing, and the post-crisis bounce-back.
//!
//! Every pass iterates illnesses in the fixed [`IllnessKind::all`] order
//! so that a seeded run consumes randomness identically every time.

use rand::Rng;
use tracing::{debug, info};

use sim_events::{
    CopingStyle, EventImpacts, IllnessCatalog, IllnessKind, IllnessNotification, LifePhase,
    Severity,
};

use crate::components::persona::{IllnessProgression, SimulationState};
use crate::systems::noise::SmoothNoise;

/// Hard cap on simultaneously active illnesses.
pub const MAX_CONCURRENT_ILLNESSES: usize = 3;

/// Turns that must pass after any onset before the next one.
pub const TRIGGER_COOLDOWN_STEPS: u32 = 2;

/// Flat relief applied on each turn inside the post-onset window.
const BOUNCE_BACK_MOOD: f64 = 10.0;
const BOUNCE_BACK_RESILIENCE: f64 = 10.0;
const BOUNCE_BACK_STRESS: f64 = -10.0;

/// Ceiling of the combined stress multiplier.
const COMBINED_STRESS_MAX: f64 = 2.5;

/// Floor of the combined mood and social multipliers.
const COMBINED_DAMPEN_MIN: f64 = 0.3;

/// Recovery shrinks a debuff's deviation to this share of itself by the
/// time healing completes.
const RECOVERY_FLOOR: f64 = 0.5;

/// Years a trauma counts as recent for trigger conditions.
const TRAUMA_WINDOW_YEARS: u32 = 3;

// Trigger-condition thresholds, one block per illness key.
const DEPRESSION_MOOD_MAX: f64 = -40.0;
const DEPRESSION_STRESS_MIN: f64 = 55.0;
const DEPRESSION_TRAUMA_MOOD_MAX: f64 = -25.0;
const ANXIETY_STRESS_MIN: f64 = 70.0;
const ANXIETY_BELONGING_MAX: f64 = 40.0;
const PANIC_STRESS_MIN: f64 = 80.0;
const BURNOUT_STRESS_MIN: f64 = 75.0;
const INSOMNIA_STRESS_MIN: f64 = 65.0;
const INSOMNIA_MOOD_MAX: f64 = -50.0;
const EATING_BELONGING_MAX: f64 = 35.0;
const SUBSTANCE_PREFERENCE_MIN: f64 = 3.0;
const SUBSTANCE_BELONGING_MAX: f64 = 45.0;

/// Combined multiplicative debuffs of all active illnesses for one turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebuffMultipliers {
    pub stress: f64,
    pub mood: f64,
    pub social: f64,
}

impl DebuffMultipliers {
    pub const NEUTRAL: DebuffMultipliers = DebuffMultipliers {
        stress: 1.0,
        mood: 1.0,
        social: 1.0,
    };

    pub fn is_neutral(&self) -> bool {
        self.stress == 1.0 && self.mood == 1.0 && self.social == 1.0
    }
}

/// Computes this turn's combined debuffs and refreshes each progression
/// record's last fluctuation.
///
/// An active illness without a progression record is a data-quality gap,
/// not an error: it is skipped.
pub fn current_debuffs(state: &mut SimulationState) -> DebuffMultipliers {
    let mut combined = DebuffMultipliers::NEUTRAL;

    for &kind in IllnessKind::all() {
        let Some(config) = state.active_illnesses.get(&kind) else {
            continue;
        };
        let Some(progression) = state.progression.get_mut(&kind) else {
            debug!(illness = %kind, "active illness without progression record, skipping");
            continue;
        };

        let noise = SmoothNoise::new(progression.noise_seed);
        let fluctuation = noise.fluctuation(progression.steps, config.volatility);
        progression.last_fluctuation = fluctuation;

        let severity = progression.severity.multiplier();
        let recovery = recovery_factor(progression.steps, config.healing_time);

        combined.stress *= scale_deviation(
            config.stress_debuff.value_at(fluctuation),
            severity,
            recovery,
        );
        combined.mood *= scale_deviation(
            config.mood_debuff.value_at(fluctuation),
            severity,
            recovery,
        );
        combined.social *= scale_deviation(
            config.social_debuff.value_at(fluctuation),
            severity,
            recovery,
        );
    }

    combined.stress = combined.stress.min(COMBINED_STRESS_MAX);
    combined.mood = combined.mood.max(COMBINED_DAMPEN_MIN);
    combined.social = combined.social.max(COMBINED_DAMPEN_MIN);
    combined
}

/// Scales a multiplier's deviation from neutral by severity and
/// recovery, leaving 1.0 untouched.
fn scale_deviation(base: f64, severity: f64, recovery: f64) -> f64 {
    1.0 + (base - 1.0) * severity * recovery
}

/// Linear recovery: 1.0 at onset, [`RECOVERY_FLOOR`] at full healing.
fn recovery_factor(steps: u32, healing_time: u32) -> f64 {
    let progress = (steps as f64 / healing_time.max(1) as f64).min(1.0);
    1.0 - (1.0 - RECOVERY_FLOOR) * progress
}

/// Applies the combined debuffs asymmetrically to an event's impacts.
///
/// Positive stress impacts are scaled up by the stress multiplier;
/// positive mood/social impacts are dampened, negative ones amplified by
/// dividing through the sub-1 multiplier. Resilience and health pass
/// through untouched.
pub fn apply_debuffs(impacts: &EventImpacts, debuffs: &DebuffMultipliers) -> EventImpacts {
    let mut out = *impacts;
    if out.stress > 0.0 {
        out.stress *= debuffs.stress;
    }
    out.mood = scale_asymmetric(out.mood, debuffs.mood);
    out.social_belonging = scale_asymmetric(out.social_belonging, debuffs.social);
    out
}

fn scale_asymmetric(impact: f64, multiplier: f64) -> f64 {
    if impact > 0.0 {
        impact * multiplier
    } else if impact < 0.0 && multiplier > 0.0 {
        impact / multiplier
    } else {
        impact
    }
}

/// Advances the illness state machine by one turn: bounce-back relief,
/// progression stepping, healing, then onset evaluation.
pub fn process_step<R: Rng>(
    state: &mut SimulationState,
    catalog: &IllnessCatalog,
    rng: &mut R,
) -> Vec<IllnessNotification> {
    let mut notifications = Vec::new();

    // Relief window, checked against the pre-increment counter: exactly
    // the turns on which the cooldown still blocks new onsets.
    if state.steps_since_trigger < TRIGGER_COOLDOWN_STEPS {
        state.metrics.add_mood(BOUNCE_BACK_MOOD);
        state.metrics.add_resilience(BOUNCE_BACK_RESILIENCE);
        state.metrics.add_stress(BOUNCE_BACK_STRESS);
    }
    state.steps_since_trigger = state.steps_since_trigger.saturating_add(1);

    // Progression and healing.
    for &kind in IllnessKind::all() {
        let Some(progression) = state.progression.get_mut(&kind) else {
            continue;
        };
        progression.steps += 1;

        let healing_time = state
            .active_illnesses
            .get(&kind)
            .map(|c| c.healing_time)
            .unwrap_or(0);
        if progression.steps >= healing_time {
            let config = state.active_illnesses.remove(&kind);
            state.progression.remove(&kind);
            let name = config.map(|c| c.name).unwrap_or_else(|| kind.to_string());
            info!(illness = %kind, age = state.age, "illness healed");
            notifications.push(IllnessNotification::healed(kind, name, state.age));
        }
    }

    // Onset evaluation.
    for &kind in IllnessKind::all() {
        if state.steps_since_trigger < TRIGGER_COOLDOWN_STEPS {
            break;
        }
        if state.active_illness_count() >= MAX_CONCURRENT_ILLNESSES {
            break;
        }
        let Some(config) = catalog.get(kind) else {
            continue;
        };
        if state.has_illness(kind) || state.age < config.min_age {
            continue;
        }
        if !trigger_condition(kind, state) {
            continue;
        }

        let probability = config.onset_probability(state.background.gender);
        if rng.gen::<f64>() >= probability {
            continue;
        }

        let severity = roll_severity(rng);
        let noise_seed = rng.gen::<u64>();
        state
            .progression
            .insert(kind, IllnessProgression::new(state.age, severity, noise_seed));
        state.active_illnesses.insert(kind, config.clone());
        state.steps_since_trigger = 0;

        info!(illness = %kind, severity = %severity, age = state.age, "illness onset");
        notifications.push(IllnessNotification::onset(kind, config.name.clone(), state.age));
    }

    notifications
}

/// Uniform severity roll. The original left the distribution
/// unspecified; uniform keeps all three tiers exercised.
fn roll_severity<R: Rng>(rng: &mut R) -> Severity {
    match rng.gen_range(0..3) {
        0 => Severity::Mild,
        1 => Severity::Moderate,
        _ => Severity::Severe,
    }
}

/// Fixed trigger-condition matrix, one branch per illness key.
fn trigger_condition(kind: IllnessKind, state: &SimulationState) -> bool {
    let m = &state.metrics;
    let b = &state.background;

    match kind {
        IllnessKind::Depression => {
            (m.mood <= DEPRESSION_MOOD_MAX && m.stress >= DEPRESSION_STRESS_MIN)
                || (m.mood <= DEPRESSION_TRAUMA_MOOD_MAX
                    && state.recent_trauma(TRAUMA_WINDOW_YEARS))
        }
        IllnessKind::AnxietyDisorder => {
            m.stress >= ANXIETY_STRESS_MIN
                && (m.social_belonging <= ANXIETY_BELONGING_MAX || !b.family_closeness)
        }
        IllnessKind::PanicDisorder => {
            m.stress >= PANIC_STRESS_MIN && state.recent_trauma(TRAUMA_WINDOW_YEARS)
        }
        IllnessKind::Burnout => m.stress >= BURNOUT_STRESS_MIN && state.phase.is_working_age(),
        IllnessKind::Insomnia => m.stress >= INSOMNIA_STRESS_MIN || m.mood <= INSOMNIA_MOOD_MAX,
        IllnessKind::EatingDisorder => {
            m.social_belonging <= EATING_BELONGING_MAX
                && matches!(state.phase, LifePhase::Adolescence | LifePhase::YoungAdult)
        }
        IllnessKind::SubstanceUseDisorder => {
            state.style_preference(CopingStyle::Substance) >= SUBSTANCE_PREFERENCE_MIN
                && m.social_belonging <= SUBSTANCE_BELONGING_MAX
        }
    }
}
