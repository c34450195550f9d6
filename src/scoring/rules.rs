//! Rule-based risk model.
//!
//! Scoring is split into a numeric accumulator and a label collector. Both
//! read the same sanitized input; weather labels carry no weight of their own
//! because weather already enters the score through the climate index.

use crate::conditions::PredictionInput;
use crate::scoring::factors::{LABEL_ONLY_FACTORS, Recommendation, RiskFactor, WEIGHTED_FACTORS};
use crate::scoring::features::climate_risk_index;
use crate::scoring::model::{CRITICAL_THRESHOLD, RiskLevel, RiskModel, RiskPrediction};
use crate::scoring::sanitize::sanitize;

pub const CLIMATE_INDEX_WEIGHT: f64 = 0.4;
pub const MAX_TOP_FACTORS: usize = 5;
pub const MAX_RECOMMENDATIONS: usize = 4;

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedModel;

impl RuleBasedModel {
    pub fn new() -> Self {
        Self
    }
}

impl RiskModel for RuleBasedModel {
    fn predict(&self, input: &PredictionInput) -> RiskPrediction {
        let input = sanitize(input);

        let score = accumulate_score(&input).clamp(0.0, 1.0);
        let factors = collect_factors(&input);
        let mut recommendations = recommend(&factors, score);
        recommendations.truncate(MAX_RECOMMENDATIONS);

        RiskPrediction {
            road_id: input.segment.road_id,
            risk_score: round_to(score, 2),
            climate_risk: RiskLevel::from_score(score),
            top_factors: factors.into_iter().take(MAX_TOP_FACTORS).collect(),
            recommendations,
        }
    }

    fn name(&self) -> &'static str {
        "rule_based_v1"
    }
}

/// Unclamped weighted sum over road/time factors plus the scaled climate index.
pub fn accumulate_score(input: &PredictionInput) -> f64 {
    let road_and_time: f64 = WEIGHTED_FACTORS
        .iter()
        .filter(|factor| factor.applies(input))
        .map(|factor| factor.weight())
        .sum();
    road_and_time + climate_risk_index(&input.climate) * CLIMATE_INDEX_WEIGHT
}

/// Every applicable factor in evaluation order, untruncated.
pub fn collect_factors(input: &PredictionInput) -> Vec<RiskFactor> {
    WEIGHTED_FACTORS
        .iter()
        .chain(LABEL_ONLY_FACTORS.iter())
        .copied()
        .filter(|factor| factor.applies(input))
        .collect()
}

/// Advisories for the full factor list and clamped score, untruncated.
pub fn recommend(factors: &[RiskFactor], score: f64) -> Vec<Recommendation> {
    let has = |factor: RiskFactor| factors.contains(&factor);
    let mut recommendations = Vec::new();

    if has(RiskFactor::HeavyRain) || has(RiskFactor::WetRoadSurface) {
        recommendations.push(Recommendation::ReduceSpeedWet);
    }
    if has(RiskFactor::LowVisibility) || has(RiskFactor::DenseFog) {
        recommendations.push(Recommendation::UseFogLights);
    }
    if has(RiskFactor::SharpCurve) {
        recommendations.push(Recommendation::SlowOnCurves);
    }
    if has(RiskFactor::NightTime) {
        recommendations.push(Recommendation::UseHeadlights);
    }
    if has(RiskFactor::HighWindRisk) {
        recommendations.push(Recommendation::WindCaution);
    }
    if score >= CRITICAL_THRESHOLD {
        recommendations.push(Recommendation::AlternateRoute);
    }
    recommendations
}

/// Round halves upward, so -12.25 becomes -12.2 rather than -12.3.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::{ClimateConditions, DayType, TimeConditions, WeatherType};
    use crate::road::{Geometry, LatLng, RoadSegment};

    fn dangerous_night_input() -> PredictionInput {
        PredictionInput::new(
            RoadSegment {
                road_id: "NH48_101".to_string(),
                geometry: Geometry::Point(LatLng::new(12.9716, 77.5946)),
                curve_radius: 35.0,
                road_slope: 12.0,
                num_lanes: 2,
                speed_limit: 80.0,
                junction_density: 4,
            },
            ClimateConditions {
                weather_type: WeatherType::Rain,
                rain_intensity: 8.0,
                visibility: 150.0,
                temperature: 18.0,
                humidity: 85.0,
                wind_speed: 20.0,
            },
            TimeConditions::new(22, DayType::Weekday),
        )
    }

    fn calm_day_input() -> PredictionInput {
        PredictionInput::new(
            RoadSegment {
                road_id: "MG_ROAD_01".to_string(),
                geometry: Geometry::Point(LatLng::new(12.9756, 77.6106)),
                curve_radius: 200.0,
                road_slope: 2.0,
                num_lanes: 6,
                speed_limit: 50.0,
                junction_density: 1,
            },
            ClimateConditions {
                weather_type: WeatherType::Clear,
                rain_intensity: 0.0,
                visibility: 1000.0,
                temperature: 25.0,
                humidity: 60.0,
                wind_speed: 10.0,
            },
            TimeConditions::new(12, DayType::Weekday),
        )
    }

    #[test]
    fn dangerous_night_collects_all_conditions_in_order() {
        let factors = collect_factors(&sanitize(&dangerous_night_input()));
        assert_eq!(
            factors,
            vec![
                RiskFactor::NightTime,
                RiskFactor::SharpCurve,
                RiskFactor::HighSpeedZone,
                RiskFactor::SteepSlope,
                RiskFactor::NarrowRoad,
                RiskFactor::HighJunctionDensity,
                RiskFactor::HeavyRain,
                RiskFactor::LowVisibility,
                RiskFactor::WetRoadSurface,
            ]
        );
    }

    #[test]
    fn dangerous_night_is_critical() {
        let prediction = RuleBasedModel::new().predict(&dangerous_night_input());

        // 0.70 from road/time plus 0.655 * 0.4 from climate
        assert!((prediction.risk_score - 0.96).abs() < 1e-9);
        assert_eq!(prediction.climate_risk, RiskLevel::Critical);
        assert_eq!(prediction.top_factors.len(), MAX_TOP_FACTORS);
        assert_eq!(prediction.top_factors[0], RiskFactor::NightTime);
        assert_eq!(prediction.top_factors[4], RiskFactor::NarrowRoad);
        assert_eq!(
            prediction.recommendations,
            vec![
                Recommendation::ReduceSpeedWet,
                Recommendation::UseFogLights,
                Recommendation::SlowOnCurves,
                Recommendation::UseHeadlights,
            ]
        );
    }

    #[test]
    fn recommendations_use_factors_beyond_the_top_five() {
        // "Heavy Rain" is seventh in the list but still drives the first advisory.
        let prediction = RuleBasedModel::new().predict(&dangerous_night_input());
        assert!(!prediction.top_factors.contains(&RiskFactor::HeavyRain));
        assert_eq!(prediction.recommendations[0], Recommendation::ReduceSpeedWet);
    }

    #[test]
    fn calm_day_is_low_with_no_factors() {
        let prediction = RuleBasedModel::new().predict(&calm_day_input());

        assert!(prediction.risk_score < 0.05);
        assert_eq!(prediction.climate_risk, RiskLevel::Low);
        assert!(prediction.top_factors.is_empty());
        assert!(prediction.recommendations.is_empty());
    }

    #[test]
    fn label_only_factors_do_not_move_the_score() {
        let base = calm_day_input();
        let mut hot = base.clone();
        hot.climate.temperature = 45.0;

        assert_eq!(accumulate_score(&base), accumulate_score(&hot));
        assert_eq!(
            collect_factors(&hot),
            vec![RiskFactor::ExtremeTemperature]
        );
    }

    #[test]
    fn oversized_rain_scores_like_the_cap() {
        let model = RuleBasedModel::new();
        let mut capped = dangerous_night_input();
        capped.climate.rain_intensity = 10.0;
        let mut oversized = capped.clone();
        oversized.climate.rain_intensity = 15.0;

        assert_eq!(model.predict(&oversized), model.predict(&capped));
    }

    #[test]
    fn prediction_is_deterministic() {
        let model = RuleBasedModel::new();
        let input = dangerous_night_input();
        let first = model.predict(&input);
        for _ in 0..10 {
            assert_eq!(model.predict(&input), first);
        }
    }

    #[test]
    fn score_is_clamped_to_one() {
        let mut input = dangerous_night_input();
        input.climate.weather_type = WeatherType::Storm;
        input.climate.visibility = 0.0;
        input.climate.wind_speed = 90.0;
        input.time.hour = 20;

        let prediction = RuleBasedModel::new().predict(&input);

        assert!(prediction.risk_score <= 1.0);
        assert!(accumulate_score(&sanitize(&input)) > 1.0);
        assert_eq!(prediction.climate_risk, RiskLevel::Critical);
    }

    #[test]
    fn windy_fog_recommendations_follow_fixed_order() {
        let mut input = calm_day_input();
        input.climate.weather_type = WeatherType::Fog;
        input.climate.wind_speed = 45.0;
        input.time.hour = 23;

        let prediction = RuleBasedModel::new().predict(&input);

        assert_eq!(
            prediction.top_factors,
            vec![
                RiskFactor::NightTime,
                RiskFactor::DenseFog,
                RiskFactor::HighWindRisk
            ]
        );
        assert_eq!(
            prediction.recommendations,
            vec![
                Recommendation::UseFogLights,
                Recommendation::UseHeadlights,
                Recommendation::WindCaution,
            ]
        );
    }

    #[test]
    fn alternate_route_requires_critical_score() {
        assert!(recommend(&[], 0.74).is_empty());
        assert_eq!(recommend(&[], 0.75), vec![Recommendation::AlternateRoute]);
    }

    #[test]
    fn rounding_keeps_two_decimals() {
        assert_eq!(round_to(0.456, 2), 0.46);
        assert_eq!(round_to(0.454, 2), 0.45);
        assert_eq!(round_to(12.34, 1), 12.3);
    }

    #[test]
    fn rounding_sends_halves_upward() {
        assert_eq!(round_to(12.25, 1), 12.3);
        assert_eq!(round_to(-12.25, 1), -12.2);
        assert_eq!(round_to(-0.5, 0), 0.0);
    }

    #[test]
    fn morning_peak_adds_its_weight() {
        let mut input = calm_day_input();
        input.time.hour = 8;
        let climate_part = climate_risk_index(&input.climate) * CLIMATE_INDEX_WEIGHT;

        assert!((accumulate_score(&input) - (0.10 + climate_part)).abs() < 1e-12);
        let prediction = RuleBasedModel::new().predict(&input);
        assert_eq!(prediction.top_factors, vec![RiskFactor::PeakHourTraffic]);
        assert!(prediction.recommendations.is_empty());
    }

    #[test]
    fn eight_pm_is_both_night_and_peak() {
        let mut input = calm_day_input();
        input.time.hour = 20;
        let climate_part = climate_risk_index(&input.climate) * CLIMATE_INDEX_WEIGHT;

        assert!((accumulate_score(&input) - (0.25 + climate_part)).abs() < 1e-12);
        assert_eq!(
            collect_factors(&input),
            vec![RiskFactor::NightTime, RiskFactor::PeakHourTraffic]
        );
    }

    #[test]
    fn peak_hour_ranks_second_on_a_dangerous_evening() {
        let mut input = dangerous_night_input();
        input.time.hour = 20;

        let prediction = RuleBasedModel::new().predict(&input);

        assert_eq!(
            prediction.top_factors,
            vec![
                RiskFactor::NightTime,
                RiskFactor::PeakHourTraffic,
                RiskFactor::SharpCurve,
                RiskFactor::HighSpeedZone,
                RiskFactor::SteepSlope,
            ]
        );
    }

    #[test]
    fn storm_label_follows_weighted_factors() {
        let mut input = dangerous_night_input();
        input.climate.weather_type = WeatherType::Storm;

        let factors = collect_factors(&sanitize(&input));

        assert_eq!(
            factors,
            vec![
                RiskFactor::NightTime,
                RiskFactor::SharpCurve,
                RiskFactor::HighSpeedZone,
                RiskFactor::SteepSlope,
                RiskFactor::NarrowRoad,
                RiskFactor::HighJunctionDensity,
                RiskFactor::StormConditions,
                RiskFactor::LowVisibility,
                RiskFactor::WetRoadSurface,
            ]
        );
        let prediction = RuleBasedModel::new().predict(&input);
        assert!(!prediction.top_factors.contains(&RiskFactor::StormConditions));
        assert_eq!(prediction.climate_risk, RiskLevel::Critical);
    }

    #[test]
    fn nan_rain_reading_scores_like_dry_weather() {
        let model = RuleBasedModel::new();
        let mut dry = calm_day_input();
        dry.climate.weather_type = WeatherType::Rain;
        let mut garbled = dry.clone();
        garbled.climate.rain_intensity = f64::NAN;

        let prediction = model.predict(&garbled);

        assert_eq!(prediction, model.predict(&dry));
        assert_eq!(prediction.climate_risk, RiskLevel::Low);
    }
}
