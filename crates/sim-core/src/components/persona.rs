//! Persona Components
//!
//! Fixed background traits, dynamic metrics, and the mutable state
//! aggregate for one simulated persona. The aggregate is owned by the
//! simulation loop and mutated in place, one turn at a time.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use sim_events::{
    CopingStyle, DiseaseConfig, EventId, Gender, IllnessKind, LifePhase, Severity,
};

use crate::systems::illness::TRIGGER_COOLDOWN_STEPS;

/// Cap on a stored coping-preference score. The habit boost reaches its
/// maximum exactly at this value.
pub const MAX_COPING_PREFERENCE: f64 = 10.0;

/// Household income tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IncomeTier {
    Poverty,
    Low,
    #[default]
    Middle,
    Comfortable,
    Wealthy,
}

impl IncomeTier {
    pub fn value(self) -> u8 {
        match self {
            IncomeTier::Poverty => 0,
            IncomeTier::Low => 1,
            IncomeTier::Middle => 2,
            IncomeTier::Comfortable => 3,
            IncomeTier::Wealthy => 4,
        }
    }

    pub const MAX_VALUE: u8 = 4;
}

/// Highest completed education tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EducationTier {
    Basic,
    #[default]
    Secondary,
    Tertiary,
    Postgraduate,
}

impl EducationTier {
    pub fn value(self) -> u8 {
        match self {
            EducationTier::Basic => 0,
            EducationTier::Secondary => 1,
            EducationTier::Tertiary => 2,
            EducationTier::Postgraduate => 3,
        }
    }

    pub const MAX_VALUE: u8 = 3;
}

/// How secure the persona's employment situation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobSecurityTier {
    Unemployed,
    Precarious,
    #[default]
    Stable,
    Secure,
}

impl JobSecurityTier {
    pub fn value(self) -> u8 {
        match self {
            JobSecurityTier::Unemployed => 0,
            JobSecurityTier::Precarious => 1,
            JobSecurityTier::Stable => 2,
            JobSecurityTier::Secure => 3,
        }
    }

    pub const MAX_VALUE: u8 = 3;
}

/// Quality of the social environment the persona grew up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SocialEnvironmentTier {
    Hostile,
    Strained,
    #[default]
    Neutral,
    Supportive,
}

impl SocialEnvironmentTier {
    pub fn value(self) -> u8 {
        match self {
            SocialEnvironmentTier::Hostile => 0,
            SocialEnvironmentTier::Strained => 1,
            SocialEnvironmentTier::Neutral => 2,
            SocialEnvironmentTier::Supportive => 3,
        }
    }

    pub const MAX_VALUE: u8 = 3;
}

/// Introversion/extraversion tier. Slow-moving: only personal events
/// shift it, one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SocialEnergyTier {
    VeryIntroverted,
    Introverted,
    #[default]
    Ambiverted,
    Extraverted,
    VeryExtraverted,
}

impl SocialEnergyTier {
    pub fn value(self) -> u8 {
        match self {
            SocialEnergyTier::VeryIntroverted => 0,
            SocialEnergyTier::Introverted => 1,
            SocialEnergyTier::Ambiverted => 2,
            SocialEnergyTier::Extraverted => 3,
            SocialEnergyTier::VeryExtraverted => 4,
        }
    }

    pub const MAX_VALUE: u8 = 4;

    fn from_value(v: u8) -> Self {
        match v {
            0 => SocialEnergyTier::VeryIntroverted,
            1 => SocialEnergyTier::Introverted,
            2 => SocialEnergyTier::Ambiverted,
            3 => SocialEnergyTier::Extraverted,
            _ => SocialEnergyTier::VeryExtraverted,
        }
    }

    /// Tier shifted by `steps`, clamped to the scale.
    pub fn shifted(self, steps: i8) -> Self {
        let v = (self.value() as i16 + steps as i16).clamp(0, Self::MAX_VALUE as i16);
        Self::from_value(v as u8)
    }
}

/// Quality of the persona's close relationships. Slow-moving like
/// [`SocialEnergyTier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipTier {
    Poor,
    Strained,
    #[default]
    Average,
    Good,
    Excellent,
}

impl RelationshipTier {
    pub fn value(self) -> u8 {
        match self {
            RelationshipTier::Poor => 0,
            RelationshipTier::Strained => 1,
            RelationshipTier::Average => 2,
            RelationshipTier::Good => 3,
            RelationshipTier::Excellent => 4,
        }
    }

    pub const MAX_VALUE: u8 = 4;

    fn from_value(v: u8) -> Self {
        match v {
            0 => RelationshipTier::Poor,
            1 => RelationshipTier::Strained,
            2 => RelationshipTier::Average,
            3 => RelationshipTier::Good,
            _ => RelationshipTier::Excellent,
        }
    }

    /// Tier shifted by `steps`, clamped to the scale.
    pub fn shifted(self, steps: i8) -> Self {
        let v = (self.value() as i16 + steps as i16).clamp(0, Self::MAX_VALUE as i16);
        Self::from_value(v as u8)
    }
}

/// Fixed background traits - set at creation, only the two slow tiers
/// ever move afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub gender: Gender,
    pub income: IncomeTier,
    pub education: EducationTier,
    pub job_security: JobSecurityTier,
    pub social_environment: SocialEnvironmentTier,
    /// IQ-style score, empirically 70-130
    pub intelligence: f64,
    pub social_energy: SocialEnergyTier,
    pub relationship_quality: RelationshipTier,
    pub family_closeness: bool,
    pub single_parent_household: bool,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            gender: Gender::Unspecified,
            income: IncomeTier::Middle,
            education: EducationTier::Secondary,
            job_security: JobSecurityTier::Stable,
            social_environment: SocialEnvironmentTier::Neutral,
            intelligence: 100.0,
            social_energy: SocialEnergyTier::Ambiverted,
            relationship_quality: RelationshipTier::Average,
            family_closeness: true,
            single_parent_household: false,
        }
    }
}

/// Dynamic bounded metrics. Stress, belonging, resilience and health
/// live in [0,100]; mood in [-100,100]. All writes go through the
/// clamping adders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub stress: f64,
    pub mood: f64,
    pub social_belonging: f64,
    pub resilience: f64,
    pub physical_health: f64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            stress: 30.0,
            mood: 20.0,
            social_belonging: 60.0,
            resilience: 50.0,
            physical_health: 80.0,
        }
    }
}

impl Metrics {
    pub fn add_stress(&mut self, delta: f64) {
        self.stress = (self.stress + delta).clamp(0.0, 100.0);
    }

    pub fn add_mood(&mut self, delta: f64) {
        self.mood = (self.mood + delta).clamp(-100.0, 100.0);
    }

    pub fn add_social_belonging(&mut self, delta: f64) {
        self.social_belonging = (self.social_belonging + delta).clamp(0.0, 100.0);
    }

    pub fn add_resilience(&mut self, delta: f64) {
        self.resilience = (self.resilience + delta).clamp(0.0, 100.0);
    }

    pub fn add_physical_health(&mut self, delta: f64) {
        self.physical_health = (self.physical_health + delta).clamp(0.0, 100.0);
    }
}

/// Mutable per-active-illness record. Created at onset, destroyed at
/// healing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IllnessProgression {
    /// Turns this illness has been active
    pub steps: u32,
    pub onset_age: u32,
    pub severity: Severity,
    /// Noise seed fixed at onset, never re-rolled
    pub noise_seed: u64,
    /// Most recent fluctuation value, kept for observers
    pub last_fluctuation: f64,
}

impl IllnessProgression {
    pub fn new(onset_age: u32, severity: Severity, noise_seed: u64) -> Self {
        Self {
            steps: 0,
            onset_age,
            severity,
            noise_seed,
            last_fluctuation: 0.5,
        }
    }
}

/// Mutable aggregate for one simulated persona at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub background: Background,
    pub metrics: Metrics,
    pub age: u32,
    pub phase: LifePhase,
    /// Applied events in order of occurrence
    history: Vec<EventId>,
    /// Same ids, for O(1) membership checks
    history_set: HashSet<EventId>,
    pub active_illnesses: HashMap<IllnessKind, DiseaseConfig>,
    pub progression: HashMap<IllnessKind, IllnessProgression>,
    coping_preferences: HashMap<EventId, f64>,
    style_preferences: HashMap<CopingStyle, f64>,
    /// Ages at which traumatic events occurred
    pub trauma_ages: Vec<u32>,
    /// Turns since any illness last triggered
    pub steps_since_trigger: u32,
}

impl SimulationState {
    pub fn new(background: Background, start_age: u32) -> Self {
        Self {
            background,
            metrics: Metrics::default(),
            age: start_age,
            phase: LifePhase::from_age(start_age),
            history: Vec::new(),
            history_set: HashSet::new(),
            active_illnesses: HashMap::new(),
            progression: HashMap::new(),
            coping_preferences: HashMap::new(),
            style_preferences: HashMap::new(),
            trauma_ages: Vec::new(),
            steps_since_trigger: TRIGGER_COOLDOWN_STEPS,
        }
    }

    /// Whether the event has ever occurred in this life.
    pub fn has_occurred(&self, id: &EventId) -> bool {
        self.history_set.contains(id)
    }

    /// Appends an event to the occurrence history.
    pub fn record_occurrence(&mut self, id: EventId) {
        self.history_set.insert(id.clone());
        self.history.push(id);
    }

    /// The ordered occurrence history.
    pub fn history(&self) -> &[EventId] {
        &self.history
    }

    /// Stored preference score for a coping mechanism, 0 if never used.
    pub fn coping_preference(&self, id: &EventId) -> f64 {
        self.coping_preferences.get(id).copied().unwrap_or(0.0)
    }

    /// Accumulated preference across all mechanisms of one style.
    pub fn style_preference(&self, style: CopingStyle) -> f64 {
        self.style_preferences.get(&style).copied().unwrap_or(0.0)
    }

    /// Reinforces a habit-forming coping mechanism after it was applied.
    pub fn reinforce_coping(&mut self, id: &EventId, style: CopingStyle) {
        let entry = self.coping_preferences.entry(id.clone()).or_insert(0.0);
        *entry = (*entry + 1.0).min(MAX_COPING_PREFERENCE);
        let style_entry = self.style_preferences.entry(style).or_insert(0.0);
        *style_entry = (*style_entry + 1.0).min(MAX_COPING_PREFERENCE);
    }

    /// Records a traumatic event at the current age.
    pub fn record_trauma(&mut self) {
        self.trauma_ages.push(self.age);
    }

    /// True if a traumatic event occurred within the last `window` years.
    pub fn recent_trauma(&self, window: u32) -> bool {
        self.trauma_ages
            .iter()
            .any(|&a| self.age.saturating_sub(a) <= window)
    }

    pub fn active_illness_count(&self) -> usize {
        self.active_illnesses.len()
    }

    pub fn has_illness(&self, kind: IllnessKind) -> bool {
        self.active_illnesses.contains_key(&kind)
    }

    /// Advances age by one year and re-derives the life phase.
    pub fn advance_year(&mut self) {
        self.age += 1;
        self.phase = LifePhase::from_age(self.age);
    }
}
