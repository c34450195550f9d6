//! Risk model trait and the assessment it produces.
//!
//! Models are shared across request handlers, so implementations must be
//! `Send + Sync` and free of per-call mutable state.

use crate::conditions::PredictionInput;
use crate::scoring::factors::{Recommendation, RiskFactor};
use serde::{Deserialize, Serialize};

pub const CRITICAL_THRESHOLD: f64 = 0.75;
pub const HIGH_THRESHOLD: f64 = 0.50;
pub const MEDIUM_THRESHOLD: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Band a clamped score. Lower bounds are inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= CRITICAL_THRESHOLD {
            RiskLevel::Critical
        } else if score >= HIGH_THRESHOLD {
            RiskLevel::High
        } else if score >= MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPrediction {
    pub road_id: String,
    /// Clamped to [0, 1] and rounded to two decimals.
    pub risk_score: f64,
    pub climate_risk: RiskLevel,
    pub top_factors: Vec<RiskFactor>,
    pub recommendations: Vec<Recommendation>,
}

/// Trait for models that turn a feature vector into a risk assessment.
///
/// `predict` must be total: out-of-range inputs are clamped, never rejected.
pub trait RiskModel: Send + Sync + std::fmt::Debug {
    fn predict(&self, input: &PredictionInput) -> RiskPrediction;

    /// Short identifier reported by the health endpoint.
    fn name(&self) -> &'static str;
}
