use crate::analysis::batch::AssessedSegment;
use crate::conditions::{ClimateConditions, WeatherType};
use crate::scoring::RiskLevel;
use serde::Serialize;

pub const HEAVY_RAIN_ALERT_MM_H: f64 = 5.0;
pub const LOW_VISIBILITY_ALERT_M: f64 = 200.0;
pub const COLD_ALERT_CELSIUS: f64 = 5.0;
pub const HIGH_WIND_ALERT_KM_H: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAlert {
    pub id: &'static str,
    pub severity: AlertSeverity,
    pub title: String,
    pub description: String,
}

/// Dashboard alerts for a scored batch. Zone alerts come first, then weather.
pub fn generate_alerts(assessed: &[AssessedSegment], climate: &ClimateConditions) -> Vec<RiskAlert> {
    let mut alerts = Vec::new();
    let critical = road_ids_at(assessed, RiskLevel::Critical);
    let high = road_ids_at(assessed, RiskLevel::High);

    if !critical.is_empty() {
        alerts.push(RiskAlert {
            id: "critical-roads",
            severity: AlertSeverity::Critical,
            title: format!(
                "{} Critical Risk Zone{} Detected",
                critical.len(),
                plural(critical.len())
            ),
            description: format!(
                "Roads {} have critical accident risk. Avoid if possible.",
                critical.join(", ")
            ),
        });
    } else if !high.is_empty() {
        alerts.push(RiskAlert {
            id: "high-risk-roads",
            severity: AlertSeverity::Warning,
            title: format!("{} High Risk Zone{} Active", high.len(), plural(high.len())),
            description: format!("Exercise caution on roads {}.", high.join(", ")),
        });
    }

    if climate.weather_type == WeatherType::Rain && climate.rain_intensity > HEAVY_RAIN_ALERT_MM_H {
        alerts.push(RiskAlert {
            id: "heavy-rain",
            severity: AlertSeverity::Warning,
            title: "Heavy Rain Warning".to_string(),
            description: "Reduced traction and visibility. Increase following distance."
                .to_string(),
        });
    }

    if climate.weather_type == WeatherType::Fog || climate.visibility < LOW_VISIBILITY_ALERT_M {
        alerts.push(RiskAlert {
            id: "low-visibility",
            severity: AlertSeverity::Warning,
            title: "Low Visibility Alert".to_string(),
            description: "Use fog lights and reduce speed. Visibility under 200m.".to_string(),
        });
    }

    if climate.temperature < COLD_ALERT_CELSIUS {
        alerts.push(RiskAlert {
            id: "cold-temp",
            severity: AlertSeverity::Info,
            title: "Cold Weather Advisory".to_string(),
            description: "Watch for icy patches. Roads may be slippery.".to_string(),
        });
    }

    if climate.wind_speed > HIGH_WIND_ALERT_KM_H {
        alerts.push(RiskAlert {
            id: "high-wind",
            severity: AlertSeverity::Warning,
            title: "High Wind Warning".to_string(),
            description: "Two-wheelers and tall vehicles should exercise extreme caution."
                .to_string(),
        });
    }

    alerts
}

fn road_ids_at(assessed: &[AssessedSegment], level: RiskLevel) -> Vec<&str> {
    assessed
        .iter()
        .filter(|item| item.prediction.climate_risk == level)
        .map(|item| item.segment.road_id.as_str())
        .collect()
}

fn plural(count: usize) -> &'static str {
    if count > 1 { "s" } else { "" }
}
