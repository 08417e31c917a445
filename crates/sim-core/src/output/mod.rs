//! Run Output
//!
//! Timeline records and their JSONL writer.

pub mod timeline;

pub use timeline::{MetricsRecord, Timeline, TimelineLogger, YearRecord};
