//! Catalogs
//!
//! Immutable lookup tables of event and illness definitions. Catalogs are
//! built once at startup and handed to the engine explicitly so it can be
//! tested against synthetic data.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{DiseaseConfig, EventId, IllnessKind, LifeEvent, LifePhase};

/// Per-phase pools of generic and personal events plus the coping pool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventCatalog {
    #[serde(default)]
    generic: HashMap<LifePhase, Vec<LifeEvent>>,
    #[serde(default)]
    personal: HashMap<LifePhase, Vec<LifeEvent>>,
    #[serde(default)]
    coping: Vec<LifeEvent>,
}

impl EventCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a generic event to one phase's pool.
    pub fn add_generic(&mut self, phase: LifePhase, event: LifeEvent) {
        self.generic.entry(phase).or_default().push(event);
    }

    /// Adds a personal event to one phase's pool.
    pub fn add_personal(&mut self, phase: LifePhase, event: LifeEvent) {
        self.personal.entry(phase).or_default().push(event);
    }

    /// Adds a coping mechanism. Coping is not pooled per phase; the
    /// age gate and trigger thresholds do the filtering.
    pub fn add_coping(&mut self, event: LifeEvent) {
        self.coping.push(event);
    }

    /// Generic events available in the given phase.
    pub fn generic_for(&self, phase: LifePhase) -> &[LifeEvent] {
        self.generic.get(&phase).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Personal events available in the given phase.
    pub fn personal_for(&self, phase: LifePhase) -> &[LifeEvent] {
        self.personal.get(&phase).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The full coping pool.
    pub fn coping(&self) -> &[LifeEvent] {
        &self.coping
    }

    /// Iterates over every event in the catalog.
    pub fn iter(&self) -> impl Iterator<Item = &LifeEvent> {
        self.generic
            .values()
            .chain(self.personal.values())
            .flatten()
            .chain(self.coping.iter())
    }

    /// Looks up an event definition by id anywhere in the catalog.
    pub fn find(&self, id: &EventId) -> Option<&LifeEvent> {
        self.iter().find(|e| &e.id == id)
    }

    /// Total number of event definitions.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.generic.values().all(Vec::is_empty)
            && self.personal.values().all(Vec::is_empty)
            && self.coping.is_empty()
    }

    /// Parses a catalog from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Renders the catalog as JSON.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Illness-key to config table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IllnessCatalog {
    configs: HashMap<IllnessKind, DiseaseConfig>,
}

impl IllnessCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: IllnessKind, config: DiseaseConfig) {
        self.configs.insert(kind, config);
    }

    pub fn get(&self, kind: IllnessKind) -> Option<&DiseaseConfig> {
        self.configs.get(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (IllnessKind, &DiseaseConfig)> {
        self.configs.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}
