use crate::conditions::WeatherType;
use crate::scoring::model::RiskLevel;

pub const CRITICAL_RAIN_COLOR: &str = "#dc2626";
pub const CRITICAL_COLOR: &str = "#ef4444";
pub const HIGH_FOG_COLOR: &str = "#f97316";
pub const HIGH_COLOR: &str = "#fb923c";
pub const MEDIUM_COLOR: &str = "#fbbf24";
pub const LOW_COLOR: &str = "#22c55e";

/// Map color for a score, with a darker red in rain and a deeper orange in fog.
pub fn risk_color(risk_score: f64, weather_type: WeatherType) -> &'static str {
    match (RiskLevel::from_score(risk_score), weather_type) {
        (RiskLevel::Critical, WeatherType::Rain) => CRITICAL_RAIN_COLOR,
        (RiskLevel::Critical, _) => CRITICAL_COLOR,
        (RiskLevel::High, WeatherType::Fog) => HIGH_FOG_COLOR,
        (RiskLevel::High, _) => HIGH_COLOR,
        (RiskLevel::Medium, _) => MEDIUM_COLOR,
        (RiskLevel::Low, _) => LOW_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_tier_darkens_in_rain() {
        assert_eq!(risk_color(0.8, WeatherType::Rain), CRITICAL_RAIN_COLOR);
        assert_eq!(risk_color(0.8, WeatherType::Storm), CRITICAL_COLOR);
        assert_eq!(risk_color(0.8, WeatherType::Fog), CRITICAL_COLOR);
    }

    #[test]
    fn high_tier_shifts_in_fog() {
        assert_eq!(risk_color(0.5, WeatherType::Fog), HIGH_FOG_COLOR);
        assert_eq!(risk_color(0.5, WeatherType::Rain), HIGH_COLOR);
    }

    #[test]
    fn lower_tiers_ignore_weather() {
        assert_eq!(risk_color(0.25, WeatherType::Fog), MEDIUM_COLOR);
        assert_eq!(risk_color(0.249, WeatherType::Rain), LOW_COLOR);
        assert_eq!(risk_color(0.0, WeatherType::Clear), LOW_COLOR);
    }
}
