use crate::analysis::{AssessedSegment, RiskAlert, ScenarioComparison, SegmentStats};
use crate::conditions::{ClimateConditions, DayType, WeatherType};
use crate::road::Geometry;
use crate::scoring::{Recommendation, RiskFactor, RiskLevel, risk_color};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthSuccessResponse {
    pub status: HealthStatus,
    pub model: &'static str,
    pub segments: usize,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SegmentsSuccessResponse {
    pub total: usize,
    pub climate_conditions: ClimateConditions,
    pub hour: i32,
    pub day_type: DayType,
    pub segments: Vec<SegmentRiskResponse>,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SegmentRiskResponse {
    pub road_id: String,
    pub geometry: Geometry,
    pub road_properties: RoadProperties,
    pub risk_assessment: RiskAssessmentResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RoadProperties {
    pub curve_radius: f64,
    pub road_slope: f64,
    pub num_lanes: u32,
    pub speed_limit: f64,
    pub junction_density: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RiskAssessmentResponse {
    pub risk_score: f64,
    pub climate_risk: RiskLevel,
    pub top_factors: Vec<RiskFactor>,
    pub recommendations: Vec<Recommendation>,
    pub color: &'static str,
}

impl SegmentRiskResponse {
    pub fn from_assessed(item: AssessedSegment, weather_type: WeatherType) -> Self {
        let AssessedSegment { segment, prediction } = item;
        Self {
            road_properties: RoadProperties {
                curve_radius: segment.curve_radius,
                road_slope: segment.road_slope,
                num_lanes: segment.num_lanes,
                speed_limit: segment.speed_limit,
                junction_density: segment.junction_density,
            },
            risk_assessment: RiskAssessmentResponse {
                color: risk_color(prediction.risk_score, weather_type),
                risk_score: prediction.risk_score,
                climate_risk: prediction.climate_risk,
                top_factors: prediction.top_factors,
                recommendations: prediction.recommendations,
            },
            road_id: segment.road_id,
            geometry: segment.geometry,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ScenarioSuccessResponse {
    #[serde(flatten)]
    pub comparison: ScenarioComparison,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OverviewSuccessResponse {
    pub stats: SegmentStats,
    pub alerts: Vec<RiskAlert>,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ErrorResponse {
    pub error_code: ApiErrorCode,
    pub error_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    MissingField,
    InvalidRequest,
    UnknownRenderer,
    InternalError,
}
