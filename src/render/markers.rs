use crate::analysis::AssessedSegment;
use crate::conditions::WeatherType;
use crate::render::{MapRenderer, is_selected};
use crate::scoring::{RiskLevel, risk_color};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
struct Marker<'a> {
    road_id: &'a str,
    lat: f64,
    lng: f64,
    color: &'static str,
    label: String,
    climate_risk: RiskLevel,
    selected: bool,
}

/// One marker per segment, anchored at the point or the line midpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerRenderer;

impl MapRenderer for MarkerRenderer {
    fn name(&self) -> &'static str {
        "markers"
    }

    fn render(
        &self,
        assessed: &[AssessedSegment],
        weather_type: WeatherType,
        selected: Option<&str>,
    ) -> Value {
        let markers: Vec<Marker<'_>> = assessed
            .iter()
            .map(|item| {
                let anchor = item.segment.geometry.anchor();
                let prediction = &item.prediction;
                Marker {
                    road_id: &item.segment.road_id,
                    lat: anchor.lat,
                    lng: anchor.lng,
                    color: risk_color(prediction.risk_score, weather_type),
                    label: format!(
                        "{} ({}%)",
                        item.segment.road_id,
                        (prediction.risk_score * 100.0).round()
                    ),
                    climate_risk: prediction.climate_risk,
                    selected: is_selected(&item.segment.road_id, selected),
                }
            })
            .collect();

        serde_json::json!({ "markers": markers })
    }
}
