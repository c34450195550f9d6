use crate::road::RoadSegment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherType {
    #[default]
    Clear,
    Rain,
    Fog,
    Storm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    #[default]
    Weekday,
    Weekend,
}

/// Weather observed (or simulated) for a request. Values are taken as given;
/// range clamping happens in the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateConditions {
    pub weather_type: WeatherType,
    /// mm/h
    pub rain_intensity: f64,
    /// meters
    pub visibility: f64,
    /// degrees Celsius
    pub temperature: f64,
    /// percent
    pub humidity: f64,
    /// km/h
    pub wind_speed: f64,
}

impl Default for ClimateConditions {
    fn default() -> Self {
        Self {
            weather_type: WeatherType::Clear,
            rain_intensity: 0.0,
            visibility: 1000.0,
            temperature: 25.0,
            humidity: 60.0,
            wind_speed: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeConditions {
    pub hour: i32,
    #[serde(default)]
    pub day_type: DayType,
}

impl TimeConditions {
    pub fn new(hour: i32, day_type: DayType) -> Self {
        Self { hour, day_type }
    }
}

/// Full feature vector consumed by a risk model.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionInput {
    pub segment: RoadSegment,
    pub climate: ClimateConditions,
    pub time: TimeConditions,
}

impl PredictionInput {
    pub fn new(segment: RoadSegment, climate: ClimateConditions, time: TimeConditions) -> Self {
        Self {
            segment,
            climate,
            time,
        }
    }
}
