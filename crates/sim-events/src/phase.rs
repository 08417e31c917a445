//! Life Phases
//!
//! Coarse age bands that drive which event pools apply to a persona.
//! Phases are derived from age every turn, never stored authoritatively.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Life phase of a persona, derived from age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifePhase {
    Childhood,
    Adolescence,
    YoungAdult,
    Adult,
    MiddleAge,
    Senior,
}

impl LifePhase {
    /// Derives the phase for a given age in years.
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=12 => LifePhase::Childhood,
            13..=17 => LifePhase::Adolescence,
            18..=29 => LifePhase::YoungAdult,
            30..=49 => LifePhase::Adult,
            50..=64 => LifePhase::MiddleAge,
            _ => LifePhase::Senior,
        }
    }

    /// Returns all phases in chronological order.
    pub fn all() -> &'static [LifePhase] {
        &[
            LifePhase::Childhood,
            LifePhase::Adolescence,
            LifePhase::YoungAdult,
            LifePhase::Adult,
            LifePhase::MiddleAge,
            LifePhase::Senior,
        ]
    }

    /// True for the phases in which a persona typically holds a job.
    pub fn is_working_age(self) -> bool {
        matches!(
            self,
            LifePhase::YoungAdult | LifePhase::Adult | LifePhase::MiddleAge
        )
    }
}

impl fmt::Display for LifePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifePhase::Childhood => write!(f, "childhood"),
            LifePhase::Adolescence => write!(f, "adolescence"),
            LifePhase::YoungAdult => write!(f, "young_adult"),
            LifePhase::Adult => write!(f, "adult"),
            LifePhase::MiddleAge => write!(f, "middle_age"),
            LifePhase::Senior => write!(f, "senior"),
        }
    }
}

/// Gender of a persona. Only used by illness trigger modifiers;
/// everything else in the engine is gender-blind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
    #[default]
    Unspecified,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(LifePhase::from_age(0), LifePhase::Childhood);
        assert_eq!(LifePhase::from_age(12), LifePhase::Childhood);
        assert_eq!(LifePhase::from_age(13), LifePhase::Adolescence);
        assert_eq!(LifePhase::from_age(17), LifePhase::Adolescence);
        assert_eq!(LifePhase::from_age(18), LifePhase::YoungAdult);
        assert_eq!(LifePhase::from_age(29), LifePhase::YoungAdult);
        assert_eq!(LifePhase::from_age(30), LifePhase::Adult);
        assert_eq!(LifePhase::from_age(49), LifePhase::Adult);
        assert_eq!(LifePhase::from_age(50), LifePhase::MiddleAge);
        assert_eq!(LifePhase::from_age(64), LifePhase::MiddleAge);
        assert_eq!(LifePhase::from_age(65), LifePhase::Senior);
        assert_eq!(LifePhase::from_age(99), LifePhase::Senior);
    }

    #[test]
    fn test_working_age() {
        assert!(!LifePhase::Childhood.is_working_age());
        assert!(LifePhase::YoungAdult.is_working_age());
        assert!(LifePhase::MiddleAge.is_working_age());
        assert!(!LifePhase::Senior.is_working_age());
    }
}
