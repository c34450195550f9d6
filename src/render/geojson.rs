use crate::analysis::AssessedSegment;
use crate::conditions::WeatherType;
use crate::render::{MapRenderer, is_selected};
use crate::road::Geometry;
use crate::scoring::risk_color;
use serde_json::{Value, json};

/// GeoJSON FeatureCollection; lines become LineStrings, points stay Points.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonRenderer;

impl MapRenderer for GeoJsonRenderer {
    fn name(&self) -> &'static str {
        "geojson"
    }

    fn render(
        &self,
        assessed: &[AssessedSegment],
        weather_type: WeatherType,
        selected: Option<&str>,
    ) -> Value {
        let features: Vec<Value> = assessed
            .iter()
            .map(|item| {
                let prediction = &item.prediction;
                json!({
                    "type": "Feature",
                    "id": item.segment.road_id,
                    "geometry": geometry_json(&item.segment.geometry),
                    "properties": {
                        "road_id": item.segment.road_id,
                        "risk_score": prediction.risk_score,
                        "climate_risk": prediction.climate_risk,
                        "color": risk_color(prediction.risk_score, weather_type),
                        "top_factors": prediction.top_factors,
                        "selected": is_selected(&item.segment.road_id, selected),
                    }
                })
            })
            .collect();

        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }
}

// GeoJSON positions are [lng, lat]
fn geometry_json(geometry: &Geometry) -> Value {
    match geometry {
        Geometry::Line { start, end } => json!({
            "type": "LineString",
            "coordinates": [[start.lng, start.lat], [end.lng, end.lat]],
        }),
        Geometry::Point(point) => json!({
            "type": "Point",
            "coordinates": [point.lng, point.lat],
        }),
    }
}
