//! Feature predicates and the continuous climate index.
//!
//! Every function here expects sanitized values.

use crate::conditions::{ClimateConditions, WeatherType};

pub fn is_night(hour: i32) -> bool {
    hour >= 20 || hour <= 6
}

pub fn is_peak_hour(hour: i32) -> bool {
    (7..=10).contains(&hour) || (17..=20).contains(&hour)
}

pub fn is_sharp_curve(curve_radius: f64) -> bool {
    curve_radius < 50.0
}

pub fn is_high_speed_zone(speed_limit: f64) -> bool {
    speed_limit >= 80.0
}

pub fn is_steep_slope(road_slope: f64) -> bool {
    road_slope > 8.0
}

pub fn is_narrow_road(num_lanes: u32) -> bool {
    num_lanes <= 2
}

pub fn is_dense_junction(junction_density: u32) -> bool {
    junction_density > 3
}

pub fn is_poor_visibility(visibility: f64) -> bool {
    visibility < 200.0
}

pub fn is_wet_road(rain_intensity: f64) -> bool {
    rain_intensity > 2.0
}

pub fn is_extreme_temperature(temperature: f64) -> bool {
    temperature < 5.0 || temperature > 40.0
}

pub fn is_high_wind_risk(wind_speed: f64) -> bool {
    wind_speed > 30.0
}

pub fn weather_weight(weather_type: WeatherType) -> f64 {
    match weather_type {
        WeatherType::Clear => 0.0,
        WeatherType::Rain => 0.3,
        WeatherType::Fog => 0.4,
        WeatherType::Storm => 0.5,
    }
}

/// Weather severity in [0, 1].
pub fn climate_risk_index(climate: &ClimateConditions) -> f64 {
    let mut index = weather_weight(climate.weather_type);
    index += (climate.rain_intensity / 10.0) * 0.2;
    // visibility under 500 m scales in linearly
    index += ((500.0 - climate.visibility) / 500.0).max(0.0) * 0.15;
    index += (climate.wind_speed / 50.0).min(1.0) * 0.1;
    if climate.humidity > 80.0 {
        index += 0.05;
    }
    index.min(1.0)
}
