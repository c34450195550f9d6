//! Batch scoring over the segment repository and the aggregates built on it.

pub mod alerts;
pub mod batch;
pub mod scenario;
pub mod stats;

pub use alerts::{AlertSeverity, RiskAlert, generate_alerts};
pub use batch::{AssessedSegment, assess_segments};
pub use scenario::{ScenarioComparison, compare_scenarios};
pub use stats::{SegmentStats, summarize};
