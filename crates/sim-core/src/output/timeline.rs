//! Timeline Output
//!
//! Per-year records of a run, collected in memory and writable as
//! append-only JSONL for later analysis.

use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use uuid::Uuid;

use sim_events::{IllnessKind, LifePhase};

use crate::components::persona::SimulationState;
use crate::engine::AppliedEvent;

/// Snapshot of the dynamic metrics at the end of one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub stress: f64,
    pub mood: f64,
    pub social_belonging: f64,
    pub resilience: f64,
    pub physical_health: f64,
}

/// One year of a persona's life.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearRecord {
    pub age: u32,
    pub phase: LifePhase,
    pub metrics: MetricsRecord,
    /// Active illnesses in stable key order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub active_illnesses: Vec<IllnessKind>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<AppliedEvent>,
}

impl YearRecord {
    /// Captures the state at the end of a turn, before age advances.
    pub fn capture(state: &SimulationState, applied: &[AppliedEvent]) -> Self {
        let active_illnesses = IllnessKind::all()
            .iter()
            .copied()
            .filter(|&kind| state.has_illness(kind))
            .collect();

        Self {
            age: state.age,
            phase: state.phase,
            metrics: MetricsRecord {
                stress: state.metrics.stress,
                mood: state.metrics.mood,
                social_belonging: state.metrics.social_belonging,
                resilience: state.metrics.resilience,
                physical_health: state.metrics.physical_health,
            },
            active_illnesses,
            events: applied.to_vec(),
        }
    }
}

/// In-memory run timeline plus run metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Timeline {
    /// Identifies this run in downstream analysis
    pub run_id: Uuid,
    records: Vec<YearRecord>,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            records: Vec::new(),
        }
    }

    pub fn record(&mut self, record: YearRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[YearRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Append-only JSONL writer for year records.
pub struct TimelineLogger {
    writer: Option<BufWriter<File>>,
    line_count: u64,
}

impl TimelineLogger {
    /// Creates a logger writing to the specified path.
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            line_count: 0,
        })
    }

    /// Creates a logger that discards records (for testing).
    pub fn null() -> Self {
        Self {
            writer: None,
            line_count: 0,
        }
    }

    /// Appends one record as a JSON line.
    pub fn log(&mut self, record: &YearRecord) -> std::io::Result<()> {
        self.line_count += 1;
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(record)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    /// Writes a whole timeline, flushing at the end.
    pub fn log_all(&mut self, timeline: &Timeline) -> std::io::Result<()> {
        for record in timeline.records() {
            self.log(record)?;
        }
        self.flush()
    }

    pub fn line_count(&self) -> u64 {
        self.line_count
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::persona::Background;

    fn sample_record() -> YearRecord {
        let state = SimulationState::new(Background::default(), 30);
        YearRecord::capture(&state, &[])
    }

    #[test]
    fn test_capture_reflects_state() {
        let mut state = SimulationState::new(Background::default(), 42);
        state.metrics.stress = 55.0;
        let record = YearRecord::capture(&state, &[]);

        assert_eq!(record.age, 42);
        assert_eq!(record.phase, LifePhase::Adult);
        assert_eq!(record.metrics.stress, 55.0);
        assert!(record.active_illnesses.is_empty());
    }

    #[test]
    fn test_jsonl_lines_parse_back() {
        let record = sample_record();
        let line = serde_json::to_string(&record).unwrap();
        let parsed: YearRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed.age, record.age);
        assert_eq!(parsed.metrics.stress, record.metrics.stress);
    }

    #[test]
    fn test_null_logger_counts_without_writing() {
        let mut logger = TimelineLogger::null();
        logger.log(&sample_record()).unwrap();
        logger.log(&sample_record()).unwrap();
        assert_eq!(logger.line_count(), 2);
    }

    #[test]
    fn test_logger_writes_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timeline.jsonl");

        let mut timeline = Timeline::new();
        timeline.record(sample_record());
        timeline.record(sample_record());

        let mut logger = TimelineLogger::new(&path).unwrap();
        logger.log_all(&timeline).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let _: YearRecord = serde_json::from_str(line).unwrap();
        }
    }
}
