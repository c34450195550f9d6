use crate::conditions::{ClimateConditions, DayType, PredictionInput, TimeConditions, WeatherType};
use crate::error::AppError;
use crate::road::{Geometry, LatLng, RoadSegment};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Fields a single prediction request must carry, in reporting order.
pub const REQUIRED_PREDICTION_FIELDS: [&str; 13] = [
    "road_id",
    "curve_radius",
    "road_slope",
    "num_lanes",
    "speed_limit",
    "junction_density",
    "hour",
    "weather_type",
    "rain_intensity",
    "visibility",
    "temperature",
    "humidity",
    "wind_speed",
];

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRequest {
    pub road_id: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    pub curve_radius: f64,
    pub road_slope: f64,
    #[serde(deserialize_with = "whole_number")]
    pub num_lanes: u32,
    pub speed_limit: f64,
    #[serde(deserialize_with = "whole_number")]
    pub junction_density: u32,
    #[serde(deserialize_with = "whole_number")]
    pub hour: i32,
    #[serde(default)]
    pub day_type: DayType,
    pub weather_type: WeatherType,
    pub rain_intensity: f64,
    pub visibility: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
}

impl PredictionRequest {
    /// Check presence of every required field, then decode. A JSON `null`
    /// counts as absent.
    pub fn from_json(body: Value) -> Result<Self, AppError> {
        let object = body
            .as_object()
            .ok_or_else(|| AppError::InvalidRequest("body must be a JSON object".to_string()))?;
        if let Some(field) = REQUIRED_PREDICTION_FIELDS
            .iter()
            .find(|field| object.get(**field).is_none_or(Value::is_null))
        {
            return Err(AppError::MissingField(*field));
        }
        let request: Self = serde_json::from_value(body)
            .map_err(|err| AppError::InvalidRequest(err.to_string()))?;
        ensure_finite(&request.climate())?;
        Ok(request)
    }

    fn climate(&self) -> ClimateConditions {
        ClimateConditions {
            weather_type: self.weather_type,
            rain_intensity: self.rain_intensity,
            visibility: self.visibility,
            temperature: self.temperature,
            humidity: self.humidity,
            wind_speed: self.wind_speed,
        }
    }

    pub fn into_input(self) -> PredictionInput {
        let climate = self.climate();
        PredictionInput::new(
            RoadSegment {
                road_id: self.road_id,
                geometry: Geometry::Point(LatLng::new(self.latitude, self.longitude)),
                curve_radius: self.curve_radius,
                road_slope: self.road_slope,
                num_lanes: self.num_lanes,
                speed_limit: self.speed_limit,
                junction_density: self.junction_density,
            },
            climate,
            TimeConditions::new(self.hour, self.day_type),
        )
    }
}

/// Accept integral JSON numbers written either way, so `22` and `22.0` both
/// decode while `22.5` does not.
fn whole_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(D::Error::custom(format!("expected a whole number, got {value}")));
    }
    T::try_from(value as i64).map_err(|_| D::Error::custom(format!("{value} is out of range")))
}

/// Reject NaN or infinite climate readings, naming the first offending field.
pub fn ensure_finite(climate: &ClimateConditions) -> Result<(), AppError> {
    let readings = [
        ("rain_intensity", climate.rain_intensity),
        ("visibility", climate.visibility),
        ("temperature", climate.temperature),
        ("humidity", climate.humidity),
        ("wind_speed", climate.wind_speed),
    ];
    match readings.iter().find(|(_, value)| !value.is_finite()) {
        Some((field, value)) => Err(AppError::InvalidRequest(format!(
            "{field} must be a finite number, got {value}"
        ))),
        None => Ok(()),
    }
}

/// Climate and time query parameters; absent values fall back to a clear noon.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClimateQuery {
    pub weather_type: WeatherType,
    pub rain_intensity: f64,
    pub visibility: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    #[serde(deserialize_with = "whole_number")]
    pub hour: i32,
    pub day_type: DayType,
}

impl Default for ClimateQuery {
    fn default() -> Self {
        let climate = ClimateConditions::default();
        Self {
            weather_type: climate.weather_type,
            rain_intensity: climate.rain_intensity,
            visibility: climate.visibility,
            temperature: climate.temperature,
            humidity: climate.humidity,
            wind_speed: climate.wind_speed,
            hour: 12,
            day_type: DayType::Weekday,
        }
    }
}

impl ClimateQuery {
    pub fn climate(&self) -> ClimateConditions {
        ClimateConditions {
            weather_type: self.weather_type,
            rain_intensity: self.rain_intensity,
            visibility: self.visibility,
            temperature: self.temperature,
            humidity: self.humidity,
            wind_speed: self.wind_speed,
        }
    }

    pub fn time(&self) -> TimeConditions {
        TimeConditions::new(self.hour, self.day_type)
    }

    pub fn ensure_finite(&self) -> Result<(), AppError> {
        ensure_finite(&self.climate())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionQuery {
    pub selected: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioRequest {
    pub base_climate: ClimateConditions,
    pub scenario_climate: ClimateConditions,
    #[serde(deserialize_with = "whole_number")]
    pub hour: i32,
    #[serde(default)]
    pub day_type: DayType,
}

impl ScenarioRequest {
    pub fn ensure_finite(&self) -> Result<(), AppError> {
        ensure_finite(&self.base_climate)?;
        ensure_finite(&self.scenario_climate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_body() -> Value {
        json!({
            "road_id": "NH48_101",
            "curve_radius": 35,
            "road_slope": 12,
            "num_lanes": 2,
            "speed_limit": 80,
            "junction_density": 4,
            "hour": 22,
            "weather_type": "rain",
            "rain_intensity": 8,
            "visibility": 150,
            "temperature": 18,
            "humidity": 85,
            "wind_speed": 20
        })
    }

    #[test]
    fn optional_fields_take_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let input = PredictionRequest::from_json(full_body())?.into_input();

        assert_eq!(input.time.day_type, DayType::Weekday);
        assert_eq!(input.segment.geometry, Geometry::Point(LatLng::new(0.0, 0.0)));
        assert_eq!(input.climate.weather_type, WeatherType::Rain);
        assert_eq!(input.segment.speed_limit, 80.0);
        Ok(())
    }

    #[test]
    fn missing_speed_limit_is_named() {
        let mut body = full_body();
        if let Some(object) = body.as_object_mut() {
            object.remove("speed_limit");
        }

        let result = PredictionRequest::from_json(body);

        assert!(matches!(result, Err(AppError::MissingField("speed_limit"))));
    }

    #[test]
    fn first_missing_field_in_order_is_reported() {
        let result = PredictionRequest::from_json(json!({ "road_id": "X", "wind_speed": 3 }));
        assert!(matches!(result, Err(AppError::MissingField("curve_radius"))));
    }

    #[test]
    fn null_counts_as_missing() {
        let mut body = full_body();
        body["humidity"] = Value::Null;

        let result = PredictionRequest::from_json(body);

        assert!(matches!(result, Err(AppError::MissingField("humidity"))));
    }

    #[test]
    fn unknown_weather_type_is_invalid() {
        let mut body = full_body();
        body["weather_type"] = json!("hail");

        let result = PredictionRequest::from_json(body);

        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[test]
    fn non_object_body_is_invalid() {
        let result = PredictionRequest::from_json(json!([1, 2, 3]));
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[test]
    fn climate_query_defaults_to_clear_noon() -> Result<(), Box<dyn std::error::Error>> {
        let query: ClimateQuery = serde_json::from_value(json!({ "weather_type": "fog" }))?;

        assert_eq!(query.climate().weather_type, WeatherType::Fog);
        assert_eq!(query.climate().visibility, 1000.0);
        assert_eq!(query.time(), TimeConditions::new(12, DayType::Weekday));
        Ok(())
    }

    #[test]
    fn nan_query_reading_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let uri: axum::http::Uri = "/api/road-segments?weather_type=rain&rain_intensity=NaN".parse()?;
        let axum::extract::Query(query) = axum::extract::Query::<ClimateQuery>::try_from_uri(&uri)?;

        assert!(query.rain_intensity.is_nan());
        match query.ensure_finite() {
            Err(AppError::InvalidRequest(message)) => assert!(message.contains("rain_intensity")),
            other => panic!("expected invalid request, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn infinite_scenario_reading_is_rejected() {
        let request = ScenarioRequest {
            base_climate: ClimateConditions::default(),
            scenario_climate: ClimateConditions {
                wind_speed: f64::INFINITY,
                ..ClimateConditions::default()
            },
            hour: 8,
            day_type: DayType::Weekday,
        };

        assert!(matches!(request.ensure_finite(), Err(AppError::InvalidRequest(_))));
        assert!(ClimateQuery::default().ensure_finite().is_ok());
    }

    #[test]
    fn integral_floats_are_accepted_for_counts_and_hour() -> Result<(), Box<dyn std::error::Error>> {
        let mut body = full_body();
        body["hour"] = json!(22.0);
        body["num_lanes"] = json!(2.0);
        body["junction_density"] = json!(4.0);

        let input = PredictionRequest::from_json(body)?.into_input();

        assert_eq!(input.time.hour, 22);
        assert_eq!(input.segment.num_lanes, 2);
        assert_eq!(input.segment.junction_density, 4);
        Ok(())
    }

    #[test]
    fn fractional_or_negative_counts_are_invalid() {
        let mut fractional = full_body();
        fractional["hour"] = json!(22.5);
        let mut negative = full_body();
        negative["num_lanes"] = json!(-1);

        assert!(matches!(
            PredictionRequest::from_json(fractional),
            Err(AppError::InvalidRequest(_))
        ));
        assert!(matches!(
            PredictionRequest::from_json(negative),
            Err(AppError::InvalidRequest(_))
        ));
    }
}
