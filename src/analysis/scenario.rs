use crate::analysis::batch::assess_segments;
use crate::analysis::stats::{mean_risk, summarize};
use crate::conditions::{ClimateConditions, TimeConditions};
use crate::road::RoadSegment;
use crate::scoring::RiskModel;
use crate::scoring::rules::round_to;
use serde::Serialize;

/// Percentage increase above which the escalated policy set applies.
pub const ESCALATION_THRESHOLD_PERCENT: f64 = 20.0;
pub const MAX_ALERT_REDUCTION_PERCENT: f64 = 30.0;

pub const ESCALATED_POLICY: [&str; 4] = [
    "Issue public weather advisory",
    "Increase traffic patrol in critical zones",
    "Activate variable message signs",
    "Consider speed limit reduction on high-risk segments",
];
pub const STANDARD_POLICY: [&str; 2] = ["Monitor conditions", "Standard patrol deployment"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub climate: ClimateConditions,
    pub average_risk: f64,
    pub critical_zones: usize,
    pub high_risk_zones: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactAnalysis {
    /// `None` when the base average is zero and the ratio is undefined.
    pub risk_change_percent: Option<f64>,
    pub additional_critical_zones: i64,
    pub additional_high_risk_zones: i64,
    pub estimated_accident_reduction_with_alerts: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioComparison {
    pub base_conditions: ScenarioSummary,
    pub scenario_conditions: ScenarioSummary,
    pub impact_analysis: ImpactAnalysis,
    pub policy_recommendations: Vec<&'static str>,
}

/// Score the repository under two climates at the same hour and compare.
pub fn compare_scenarios(
    model: &dyn RiskModel,
    segments: &[RoadSegment],
    base: &ClimateConditions,
    scenario: &ClimateConditions,
    time: TimeConditions,
) -> ScenarioComparison {
    let base_assessed = assess_segments(model, segments, base, time);
    let scenario_assessed = assess_segments(model, segments, scenario, time);
    let base_stats = summarize(&base_assessed);
    let scenario_stats = summarize(&scenario_assessed);
    let base_mean = mean_risk(&base_assessed);
    let scenario_mean = mean_risk(&scenario_assessed);

    let change = risk_change_percent(base_mean, scenario_mean);
    let escalate = match change {
        Some(percent) => percent > ESCALATION_THRESHOLD_PERCENT,
        None => scenario_mean > base_mean,
    };
    let reduction = change
        .map(|percent| (percent.abs() * 0.5).min(MAX_ALERT_REDUCTION_PERCENT))
        .unwrap_or(0.0);

    ScenarioComparison {
        base_conditions: ScenarioSummary {
            climate: base.clone(),
            average_risk: base_stats.average_risk,
            critical_zones: base_stats.critical,
            high_risk_zones: base_stats.high,
        },
        scenario_conditions: ScenarioSummary {
            climate: scenario.clone(),
            average_risk: scenario_stats.average_risk,
            critical_zones: scenario_stats.critical,
            high_risk_zones: scenario_stats.high,
        },
        impact_analysis: ImpactAnalysis {
            risk_change_percent: change.map(|percent| round_to(percent, 1)),
            additional_critical_zones: scenario_stats.critical as i64 - base_stats.critical as i64,
            additional_high_risk_zones: scenario_stats.high as i64 - base_stats.high as i64,
            estimated_accident_reduction_with_alerts: format!("{}%", reduction.round()),
        },
        policy_recommendations: if escalate {
            ESCALATED_POLICY.to_vec()
        } else {
            STANDARD_POLICY.to_vec()
        },
    }
}

/// Relative change in percent, undefined when the base is zero.
pub fn risk_change_percent(base_mean: f64, scenario_mean: f64) -> Option<f64> {
    if base_mean == 0.0 {
        return None;
    }
    Some((scenario_mean - base_mean) / base_mean * 100.0)
}
