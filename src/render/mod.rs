//! Map payloads for the dashboard.
//!
//! Every backend colors segments by risk and flags the selected road; they
//! differ only in the shape handed to the map widget.

use crate::analysis::AssessedSegment;
use crate::conditions::WeatherType;

pub mod geojson;
pub mod markers;

pub use geojson::GeoJsonRenderer;
pub use markers::MarkerRenderer;

pub trait MapRenderer: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &'static str;

    fn render(
        &self,
        assessed: &[AssessedSegment],
        weather_type: WeatherType,
        selected: Option<&str>,
    ) -> serde_json::Value;
}

/// Look up a backend by its route name.
pub fn renderer_for(name: &str) -> Option<Box<dyn MapRenderer>> {
    match name {
        "geojson" => Some(Box::new(GeoJsonRenderer)),
        "markers" => Some(Box::new(MarkerRenderer)),
        _ => None,
    }
}

fn is_selected(road_id: &str, selected: Option<&str>) -> bool {
    selected.is_some_and(|id| id == road_id)
}
