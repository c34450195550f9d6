use crate::analysis::batch::AssessedSegment;
use crate::scoring::RiskLevel;
use crate::scoring::rules::round_to;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentStats {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// Mean rounded score, two decimals; 0 for an empty batch.
    pub average_risk: f64,
}

pub fn summarize(assessed: &[AssessedSegment]) -> SegmentStats {
    let count = |level: RiskLevel| {
        assessed
            .iter()
            .filter(|item| item.prediction.climate_risk == level)
            .count()
    };

    SegmentStats {
        total: assessed.len(),
        critical: count(RiskLevel::Critical),
        high: count(RiskLevel::High),
        medium: count(RiskLevel::Medium),
        low: count(RiskLevel::Low),
        average_risk: round_to(mean_risk(assessed), 2),
    }
}

/// Unrounded mean score. An empty batch has no risk, so this returns 0.
pub fn mean_risk(assessed: &[AssessedSegment]) -> f64 {
    if assessed.is_empty() {
        return 0.0;
    }
    let total: f64 = assessed.iter().map(|item| item.prediction.risk_score).sum();
    total / assessed.len() as f64
}
