use crate::conditions::{ClimateConditions, PredictionInput};

pub const MAX_RAIN_INTENSITY: f64 = 10.0;
pub const MAX_HUMIDITY: f64 = 100.0;
pub const MIN_TEMPERATURE: f64 = -10.0;
pub const MAX_TEMPERATURE: f64 = 55.0;
pub const MAX_HOUR: i32 = 23;

/// Clamp climate and time fields to their physical ranges. NaN readings fall
/// back to the clear-weather defaults.
pub fn sanitize(input: &PredictionInput) -> PredictionInput {
    let mut sanitized = input.clone();
    let fallback = ClimateConditions::default();
    let climate = &mut sanitized.climate;
    climate.rain_intensity =
        or_fallback(climate.rain_intensity, fallback.rain_intensity).clamp(0.0, MAX_RAIN_INTENSITY);
    climate.visibility = or_fallback(climate.visibility, fallback.visibility).max(0.0);
    climate.humidity = or_fallback(climate.humidity, fallback.humidity).clamp(0.0, MAX_HUMIDITY);
    climate.wind_speed = or_fallback(climate.wind_speed, fallback.wind_speed).max(0.0);
    climate.temperature = or_fallback(climate.temperature, fallback.temperature)
        .clamp(MIN_TEMPERATURE, MAX_TEMPERATURE);
    sanitized.time.hour = sanitized.time.hour.clamp(0, MAX_HOUR);
    sanitized
}

fn or_fallback(value: f64, fallback: f64) -> f64 {
    if value.is_nan() { fallback } else { value }
}
