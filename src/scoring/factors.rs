use crate::conditions::{PredictionInput, WeatherType};
use crate::scoring::features;
use serde::{Deserialize, Serialize};

/// A contributing condition, serialized as its human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskFactor {
    #[serde(rename = "Night Time")]
    NightTime,
    #[serde(rename = "Peak Hour Traffic")]
    PeakHourTraffic,
    #[serde(rename = "Sharp Curve")]
    SharpCurve,
    #[serde(rename = "High Speed Zone")]
    HighSpeedZone,
    #[serde(rename = "Steep Slope")]
    SteepSlope,
    #[serde(rename = "Narrow Road")]
    NarrowRoad,
    #[serde(rename = "High Junction Density")]
    HighJunctionDensity,
    #[serde(rename = "Heavy Rain")]
    HeavyRain,
    #[serde(rename = "Dense Fog")]
    DenseFog,
    #[serde(rename = "Storm Conditions")]
    StormConditions,
    #[serde(rename = "Low Visibility")]
    LowVisibility,
    #[serde(rename = "Wet Road Surface")]
    WetRoadSurface,
    #[serde(rename = "Extreme Temperature")]
    ExtremeTemperature,
    #[serde(rename = "High Wind Risk")]
    HighWindRisk,
}

/// Factors that add to the score, in evaluation order.
pub const WEIGHTED_FACTORS: [RiskFactor; 7] = [
    RiskFactor::NightTime,
    RiskFactor::PeakHourTraffic,
    RiskFactor::SharpCurve,
    RiskFactor::HighSpeedZone,
    RiskFactor::SteepSlope,
    RiskFactor::NarrowRoad,
    RiskFactor::HighJunctionDensity,
];

/// Factors reported to the user only; their effect on the score already
/// flows through the climate index.
pub const LABEL_ONLY_FACTORS: [RiskFactor; 7] = [
    RiskFactor::HeavyRain,
    RiskFactor::DenseFog,
    RiskFactor::StormConditions,
    RiskFactor::LowVisibility,
    RiskFactor::WetRoadSurface,
    RiskFactor::ExtremeTemperature,
    RiskFactor::HighWindRisk,
];

impl RiskFactor {
    pub fn label(self) -> &'static str {
        match self {
            RiskFactor::NightTime => "Night Time",
            RiskFactor::PeakHourTraffic => "Peak Hour Traffic",
            RiskFactor::SharpCurve => "Sharp Curve",
            RiskFactor::HighSpeedZone => "High Speed Zone",
            RiskFactor::SteepSlope => "Steep Slope",
            RiskFactor::NarrowRoad => "Narrow Road",
            RiskFactor::HighJunctionDensity => "High Junction Density",
            RiskFactor::HeavyRain => "Heavy Rain",
            RiskFactor::DenseFog => "Dense Fog",
            RiskFactor::StormConditions => "Storm Conditions",
            RiskFactor::LowVisibility => "Low Visibility",
            RiskFactor::WetRoadSurface => "Wet Road Surface",
            RiskFactor::ExtremeTemperature => "Extreme Temperature",
            RiskFactor::HighWindRisk => "High Wind Risk",
        }
    }

    /// Score contribution when the factor applies.
    pub fn weight(self) -> f64 {
        match self {
            RiskFactor::NightTime => 0.15,
            RiskFactor::PeakHourTraffic => 0.10,
            RiskFactor::SharpCurve => 0.20,
            RiskFactor::HighSpeedZone => 0.10,
            RiskFactor::SteepSlope => 0.10,
            RiskFactor::NarrowRoad => 0.05,
            RiskFactor::HighJunctionDensity => 0.10,
            _ => 0.0,
        }
    }

    pub fn applies(self, input: &PredictionInput) -> bool {
        let segment = &input.segment;
        let climate = &input.climate;
        match self {
            RiskFactor::NightTime => features::is_night(input.time.hour),
            RiskFactor::PeakHourTraffic => features::is_peak_hour(input.time.hour),
            RiskFactor::SharpCurve => features::is_sharp_curve(segment.curve_radius),
            RiskFactor::HighSpeedZone => features::is_high_speed_zone(segment.speed_limit),
            RiskFactor::SteepSlope => features::is_steep_slope(segment.road_slope),
            RiskFactor::NarrowRoad => features::is_narrow_road(segment.num_lanes),
            RiskFactor::HighJunctionDensity => {
                features::is_dense_junction(segment.junction_density)
            }
            RiskFactor::HeavyRain => climate.weather_type == WeatherType::Rain,
            RiskFactor::DenseFog => climate.weather_type == WeatherType::Fog,
            RiskFactor::StormConditions => climate.weather_type == WeatherType::Storm,
            RiskFactor::LowVisibility => features::is_poor_visibility(climate.visibility),
            RiskFactor::WetRoadSurface => features::is_wet_road(climate.rain_intensity),
            RiskFactor::ExtremeTemperature => {
                features::is_extreme_temperature(climate.temperature)
            }
            RiskFactor::HighWindRisk => features::is_high_wind_risk(climate.wind_speed),
        }
    }
}

/// Driver advisory, serialized as its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Reduce speed by 20% due to wet conditions")]
    ReduceSpeedWet,
    #[serde(rename = "Use fog lights and maintain safe distance")]
    UseFogLights,
    #[serde(rename = "Approach curves at reduced speed")]
    SlowOnCurves,
    #[serde(rename = "Ensure proper headlight usage")]
    UseHeadlights,
    #[serde(rename = "Two-wheelers and high-profile vehicles use caution")]
    WindCaution,
    #[serde(rename = "Consider alternate route if possible")]
    AlternateRoute,
}

impl Recommendation {
    pub fn message(self) -> &'static str {
        match self {
            Recommendation::ReduceSpeedWet => "Reduce speed by 20% due to wet conditions",
            Recommendation::UseFogLights => "Use fog lights and maintain safe distance",
            Recommendation::SlowOnCurves => "Approach curves at reduced speed",
            Recommendation::UseHeadlights => "Ensure proper headlight usage",
            Recommendation::WindCaution => "Two-wheelers and high-profile vehicles use caution",
            Recommendation::AlternateRoute => "Consider alternate route if possible",
        }
    }
}
