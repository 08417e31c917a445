//! Factor Identifiers
//!
//! Closed enumeration of the persona attributes that can modulate event
//! probability. Catalog data refers to factors by snake_case name; a name
//! that matches no known factor deserializes to [`FactorId::Unknown`],
//! which the normalizer resolves to a neutral value instead of failing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier of a probability-influencing state attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorId {
    Stress,
    Mood,
    SocialBelonging,
    Resilience,
    PhysicalHealth,
    Income,
    Education,
    JobSecurity,
    SocialEnvironment,
    Intelligence,
    SocialEnergy,
    RelationshipQuality,
    FamilyCloseness,
    /// Catch-all for factor names the engine does not know.
    Unknown,
}

impl FactorId {
    /// Returns every known factor (excludes `Unknown`).
    pub fn all() -> &'static [FactorId] {
        &[
            FactorId::Stress,
            FactorId::Mood,
            FactorId::SocialBelonging,
            FactorId::Resilience,
            FactorId::PhysicalHealth,
            FactorId::Income,
            FactorId::Education,
            FactorId::JobSecurity,
            FactorId::SocialEnvironment,
            FactorId::Intelligence,
            FactorId::SocialEnergy,
            FactorId::RelationshipQuality,
            FactorId::FamilyCloseness,
        ]
    }

    /// The snake_case name used in catalog data.
    pub fn name(self) -> &'static str {
        match self {
            FactorId::Stress => "stress",
            FactorId::Mood => "mood",
            FactorId::SocialBelonging => "social_belonging",
            FactorId::Resilience => "resilience",
            FactorId::PhysicalHealth => "physical_health",
            FactorId::Income => "income",
            FactorId::Education => "education",
            FactorId::JobSecurity => "job_security",
            FactorId::SocialEnvironment => "social_environment",
            FactorId::Intelligence => "intelligence",
            FactorId::SocialEnergy => "social_energy",
            FactorId::RelationshipQuality => "relationship_quality",
            FactorId::FamilyCloseness => "family_closeness",
            FactorId::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FactorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FactorId {
    type Err = std::convert::Infallible;

    /// Never fails: an unrecognized name is the `Unknown` factor.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let factor = FactorId::all()
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .unwrap_or(FactorId::Unknown);
        Ok(factor)
    }
}

impl Serialize for FactorId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for FactorId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(name.parse().unwrap_or(FactorId::Unknown))
    }
}
