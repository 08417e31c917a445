//! Life Event Definitions
//!
//! Immutable definitions that make up the event catalogs. An event carries
//! its probabilistic eligibility data and fixed numeric impacts; all
//! selection and application logic lives in sim-core.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::FactorId;

/// Unique identifier for a life event definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Numeric impacts an event applies to the persona's dynamic metrics.
///
/// Positive values raise the metric, negative values lower it. Every
/// application is clamped to the metric's domain by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EventImpacts {
    pub stress: f64,
    pub mood: f64,
    pub social_belonging: f64,
    pub resilience: f64,
    pub physical_health: f64,
}

impl EventImpacts {
    pub fn new(
        stress: f64,
        mood: f64,
        social_belonging: f64,
        resilience: f64,
        physical_health: f64,
    ) -> Self {
        Self {
            stress,
            mood,
            social_belonging,
            resilience,
            physical_health,
        }
    }

    /// True if every impact field is zero.
    pub fn is_neutral(&self) -> bool {
        self.stress == 0.0
            && self.mood == 0.0
            && self.social_belonging == 0.0
            && self.resilience == 0.0
            && self.physical_health == 0.0
    }
}

/// A (factor, exponent) pair nonlinearly modulating an event's base
/// probability. Positive exponents make high factor values amplify the
/// event; negative exponents invert, so low values drive the effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfluenceFactor {
    pub factor: FactorId,
    pub exponent: f64,
}

impl InfluenceFactor {
    pub fn new(factor: FactorId, exponent: f64) -> Self {
        Self { factor, exponent }
    }
}

/// Threshold conditions gating a coping mechanism.
///
/// An empty tuple means the mechanism is always available once age and
/// eligibility allow. Otherwise any single satisfied threshold triggers it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerThresholds {
    /// Triggered when stress is at or above this value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_at_least: Option<f64>,
    /// Triggered when mood is at or below this value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_at_most: Option<f64>,
    /// Triggered when social belonging is at or below this value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub belonging_at_most: Option<f64>,
}

impl TriggerThresholds {
    /// Thresholds that never gate (the mechanism is always triggered).
    pub fn none() -> Self {
        Self::default()
    }

    /// True if no threshold is configured.
    pub fn is_empty(&self) -> bool {
        self.stress_at_least.is_none()
            && self.mood_at_most.is_none()
            && self.belonging_at_most.is_none()
    }
}

/// Broad style of a coping mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopingStyle {
    Active,
    Social,
    Avoidant,
    Substance,
}

/// Tier shifts a personal event applies to the slow-moving background
/// attributes. Values are steps on the ordinal scales; the engine clamps
/// the result to each tier's range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityShift {
    pub social_energy: i8,
    pub relationship_quality: i8,
}

impl PersonalityShift {
    pub fn new(social_energy: i8, relationship_quality: i8) -> Self {
        Self {
            social_energy,
            relationship_quality,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.social_energy == 0 && self.relationship_quality == 0
    }
}

/// Category tag without variant payload, for reporting and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Generic,
    Personal,
    Coping,
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventCategory::Generic => write!(f, "generic"),
            EventCategory::Personal => write!(f, "personal"),
            EventCategory::Coping => write!(f, "coping"),
        }
    }
}

/// Variant-specific data for the three event categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum EventKind {
    /// External world events (accidents, windfalls, losses)
    Generic,
    /// Life-course events tied to the persona's own development
    Personal {
        #[serde(default)]
        shift: PersonalityShift,
    },
    /// Stress-response behaviors, gated by trigger thresholds
    Coping {
        style: CopingStyle,
        #[serde(default)]
        thresholds: TriggerThresholds,
        #[serde(default)]
        habit_forming: bool,
    },
}

impl EventKind {
    pub fn category(&self) -> EventCategory {
        match self {
            EventKind::Generic => EventCategory::Generic,
            EventKind::Personal { .. } => EventCategory::Personal,
            EventKind::Coping { .. } => EventCategory::Coping,
        }
    }
}

/// A single immutable life event definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeEvent {
    pub id: EventId,
    pub name: String,
    /// Base selection probability before influence modifiers
    pub base_probability: f64,
    pub min_age: u32,
    pub max_age: u32,
    /// Whether the event may occur at most once per life
    #[serde(default)]
    pub unique: bool,
    /// Events that must already be in the history
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<EventId>,
    /// Events whose presence in the history rules this one out
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<EventId>,
    pub impacts: EventImpacts,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub influences: Vec<InfluenceFactor>,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl LifeEvent {
    fn base(id: impl Into<EventId>, name: impl Into<String>, probability: f64, kind: EventKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_probability: probability,
            min_age: 0,
            max_age: 120,
            unique: false,
            prerequisites: Vec::new(),
            exclusions: Vec::new(),
            impacts: EventImpacts::default(),
            influences: Vec::new(),
            kind,
        }
    }

    /// Creates a generic world event.
    pub fn generic(id: impl Into<EventId>, name: impl Into<String>, probability: f64) -> Self {
        Self::base(id, name, probability, EventKind::Generic)
    }

    /// Creates a personal life-course event.
    pub fn personal(id: impl Into<EventId>, name: impl Into<String>, probability: f64) -> Self {
        Self::base(
            id,
            name,
            probability,
            EventKind::Personal {
                shift: PersonalityShift::default(),
            },
        )
    }

    /// Creates a coping mechanism.
    pub fn coping(
        id: impl Into<EventId>,
        name: impl Into<String>,
        probability: f64,
        style: CopingStyle,
    ) -> Self {
        Self::base(
            id,
            name,
            probability,
            EventKind::Coping {
                style,
                thresholds: TriggerThresholds::none(),
                habit_forming: false,
            },
        )
    }

    pub fn with_age_window(mut self, min_age: u32, max_age: u32) -> Self {
        self.min_age = min_age;
        self.max_age = max_age;
        self
    }

    pub fn once_per_life(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn with_prerequisite(mut self, id: impl Into<EventId>) -> Self {
        self.prerequisites.push(id.into());
        self
    }

    pub fn with_exclusion(mut self, id: impl Into<EventId>) -> Self {
        self.exclusions.push(id.into());
        self
    }

    pub fn with_impacts(mut self, impacts: EventImpacts) -> Self {
        self.impacts = impacts;
        self
    }

    pub fn with_influence(mut self, factor: FactorId, exponent: f64) -> Self {
        self.influences.push(InfluenceFactor::new(factor, exponent));
        self
    }

    /// Sets trigger thresholds. Only meaningful on coping events.
    pub fn with_thresholds(mut self, t: TriggerThresholds) -> Self {
        if let EventKind::Coping { thresholds, .. } = &mut self.kind {
            *thresholds = t;
        }
        self
    }

    /// Marks a coping event as habit-forming.
    pub fn habit_forming(mut self) -> Self {
        if let EventKind::Coping { habit_forming, .. } = &mut self.kind {
            *habit_forming = true;
        }
        self
    }

    /// Sets personality-tier shifts. Only meaningful on personal events.
    pub fn with_shift(mut self, s: PersonalityShift) -> Self {
        if let EventKind::Personal { shift } = &mut self.kind {
            *shift = s;
        }
        self
    }

    pub fn category(&self) -> EventCategory {
        self.kind.category()
    }

    /// Trigger thresholds, if this is a coping event.
    pub fn thresholds(&self) -> Option<&TriggerThresholds> {
        match &self.kind {
            EventKind::Coping { thresholds, .. } => Some(thresholds),
            _ => None,
        }
    }

    /// True for coping events flagged as habit-forming.
    pub fn is_habit_forming(&self) -> bool {
        matches!(
            self.kind,
            EventKind::Coping {
                habit_forming: true,
                ..
            }
        )
    }
}
