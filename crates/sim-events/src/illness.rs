//! Illness Definitions
//!
//! Immutable mental-health condition configs, severity tiers, and the
//! notification types emitted when a condition begins or heals.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Gender;

/// Closed set of mental-health conditions the engine can track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IllnessKind {
    Depression,
    AnxietyDisorder,
    PanicDisorder,
    Burnout,
    Insomnia,
    EatingDisorder,
    SubstanceUseDisorder,
}

impl IllnessKind {
    /// Returns all illness kinds.
    pub fn all() -> &'static [IllnessKind] {
        &[
            IllnessKind::Depression,
            IllnessKind::AnxietyDisorder,
            IllnessKind::PanicDisorder,
            IllnessKind::Burnout,
            IllnessKind::Insomnia,
            IllnessKind::EatingDisorder,
            IllnessKind::SubstanceUseDisorder,
        ]
    }
}

impl fmt::Display for IllnessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IllnessKind::Depression => "depression",
            IllnessKind::AnxietyDisorder => "anxiety_disorder",
            IllnessKind::PanicDisorder => "panic_disorder",
            IllnessKind::Burnout => "burnout",
            IllnessKind::Insomnia => "insomnia",
            IllnessKind::EatingDisorder => "eating_disorder",
            IllnessKind::SubstanceUseDisorder => "substance_use_disorder",
        };
        write!(f, "{}", name)
    }
}

/// Severity tier rolled once at onset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Scale applied to a debuff's deviation from neutral.
    pub fn multiplier(self) -> f64 {
        match self {
            Severity::Mild => 0.7,
            Severity::Moderate => 1.0,
            Severity::Severe => 1.2,
        }
    }

    /// Returns all tiers, mildest first.
    pub fn all() -> &'static [Severity] {
        &[Severity::Mild, Severity::Moderate, Severity::Severe]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Mild => write!(f, "mild"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::Severe => write!(f, "severe"),
        }
    }
}

/// Debuff multiplier specification for one impact channel.
///
/// `Fixed` values jitter within ±5% of the default as the fluctuation
/// moves; `Range` values interpolate linearly across the configured span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebuffSpec {
    Fixed(f64),
    Range { min: f64, max: f64 },
}

impl DebuffSpec {
    /// Neutral spec that never modifies impacts.
    pub fn neutral() -> Self {
        DebuffSpec::Fixed(1.0)
    }

    /// Multiplier at fluctuation `f` (clamped to [0,1]).
    pub fn value_at(&self, f: f64) -> f64 {
        let f = f.clamp(0.0, 1.0);
        match *self {
            DebuffSpec::Fixed(v) => v * (0.95 + 0.10 * f),
            DebuffSpec::Range { min, max } => min + (max - min) * f,
        }
    }
}

/// Multipliers on the onset chance per gender. Values above 1.0 make the
/// illness more likely for that gender; absent genders stay at 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenderTriggerModifiers {
    pub female: f64,
    pub male: f64,
}

impl Default for GenderTriggerModifiers {
    fn default() -> Self {
        Self {
            female: 1.0,
            male: 1.0,
        }
    }
}

impl GenderTriggerModifiers {
    pub fn for_gender(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Female => self.female,
            Gender::Male => self.male,
            Gender::Unspecified => 1.0,
        }
    }
}

/// Immutable definition of one illness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseConfig {
    /// Human-readable display name
    pub name: String,
    pub stress_debuff: DebuffSpec,
    pub mood_debuff: DebuffSpec,
    pub social_debuff: DebuffSpec,
    /// Fluctuation speed in [0,1]; above 0.5 the noise turns jagged
    pub volatility: f64,
    /// 1-in-N onset chance once every trigger gate has passed
    pub trigger_chance: u32,
    /// Steps until the illness heals on its own
    pub healing_time: u32,
    /// Minimum persona age for onset
    pub min_age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender_modifiers: Option<GenderTriggerModifiers>,
}

impl DiseaseConfig {
    pub fn new(
        name: impl Into<String>,
        trigger_chance: u32,
        healing_time: u32,
        min_age: u32,
    ) -> Self {
        Self {
            name: name.into(),
            stress_debuff: DebuffSpec::neutral(),
            mood_debuff: DebuffSpec::neutral(),
            social_debuff: DebuffSpec::neutral(),
            volatility: 0.3,
            trigger_chance,
            healing_time,
            min_age,
            gender_modifiers: None,
        }
    }

    pub fn with_stress_debuff(mut self, spec: DebuffSpec) -> Self {
        self.stress_debuff = spec;
        self
    }

    pub fn with_mood_debuff(mut self, spec: DebuffSpec) -> Self {
        self.mood_debuff = spec;
        self
    }

    pub fn with_social_debuff(mut self, spec: DebuffSpec) -> Self {
        self.social_debuff = spec;
        self
    }

    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    pub fn with_gender_modifiers(mut self, modifiers: GenderTriggerModifiers) -> Self {
        self.gender_modifiers = Some(modifiers);
        self
    }

    /// Onset probability for this gender once all gates have passed.
    pub fn onset_probability(&self, gender: Gender) -> f64 {
        let modifier = self
            .gender_modifiers
            .map(|m| m.for_gender(gender))
            .unwrap_or(1.0);
        (modifier / self.trigger_chance.max(1) as f64).clamp(0.0, 1.0)
    }
}

/// Direction of an illness state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IllnessChange {
    Onset,
    Healed,
}

/// Notification emitted to the shell when an illness begins or heals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IllnessNotification {
    pub illness: IllnessKind,
    pub display_name: String,
    pub change: IllnessChange,
    pub message: String,
}

impl IllnessNotification {
    pub fn onset(illness: IllnessKind, display_name: impl Into<String>, age: u32) -> Self {
        let display_name = display_name.into();
        let message = format!("At age {}, {} set in.", age, display_name);
        Self {
            illness,
            display_name,
            change: IllnessChange::Onset,
            message,
        }
    }

    pub fn healed(illness: IllnessKind, display_name: impl Into<String>, age: u32) -> Self {
        let display_name = display_name.into();
        let message = format!("At age {}, {} subsided.", age, display_name);
        Self {
            illness,
            display_name,
            change: IllnessChange::Healed,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_multipliers() {
        assert_eq!(Severity::Mild.multiplier(), 0.7);
        assert_eq!(Severity::Moderate.multiplier(), 1.0);
        assert_eq!(Severity::Severe.multiplier(), 1.2);
    }

    #[test]
    fn test_range_spec_interpolates() {
        let spec = DebuffSpec::Range { min: 1.2, max: 1.8 };
        assert!((spec.value_at(0.0) - 1.2).abs() < 1e-12);
        assert!((spec.value_at(1.0) - 1.8).abs() < 1e-12);
        assert!((spec.value_at(0.5) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_fixed_spec_jitters_five_percent() {
        let spec = DebuffSpec::Fixed(2.0);
        assert!((spec.value_at(0.0) - 1.9).abs() < 1e-12);
        assert!((spec.value_at(1.0) - 2.1).abs() < 1e-12);
    }

    #[test]
    fn test_onset_probability_applies_gender_modifier() {
        let config = DiseaseConfig::new("Depression", 10, 5, 14).with_gender_modifiers(
            GenderTriggerModifiers {
                female: 2.0,
                male: 1.0,
            },
        );
        assert!((config.onset_probability(Gender::Female) - 0.2).abs() < 1e-12);
        assert!((config.onset_probability(Gender::Male) - 0.1).abs() < 1e-12);
        assert!((config.onset_probability(Gender::Unspecified) - 0.1).abs() < 1e-12);
    }
}
