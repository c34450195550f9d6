use crate::analysis::{assess_segments, compare_scenarios, generate_alerts, summarize};
use crate::api::requests::{ClimateQuery, PredictionRequest, ScenarioRequest, SelectionQuery};
use crate::api::responses::{
    ApiErrorCode, ErrorResponse, HealthStatus, HealthSuccessResponse, OverviewSuccessResponse,
    ScenarioSuccessResponse, SegmentRiskResponse, SegmentsSuccessResponse,
};
use crate::conditions::TimeConditions;
use crate::error::AppError;
use crate::render::renderer_for;
use crate::scoring::RiskPrediction;
use crate::state::AppState;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{debug, error};

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
enum TimestampError {
    Format(time::error::Format),
}

impl fmt::Display for TimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampError::Format(err) => write!(f, "timestamp format error: {err}"),
        }
    }
}

pub enum ApiResponse<T> {
    Success(T),
    Error {
        status: StatusCode,
        body: ErrorResponse,
    },
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match self {
            ApiResponse::Success(body) => (StatusCode::OK, Json(body)).into_response(),
            ApiResponse::Error { status, body } => (status, Json(body)).into_response(),
        }
    }
}

pub async fn get_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    build_health_response(&state, SystemTime::now())
}

pub async fn post_predict_risk(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let body = payload
        .map(|Json(value)| value)
        .map_err(|rejection| rejection.body_text());
    build_predict_response(&state, body, SystemTime::now())
}

pub async fn get_road_segments(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ClimateQuery>, QueryRejection>,
) -> impl IntoResponse {
    let query = query
        .map(|Query(query)| query)
        .map_err(|rejection| rejection.body_text());
    build_segments_response(&state, query, SystemTime::now())
}

pub async fn post_climate_scenario(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ScenarioRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = payload
        .map(|Json(request)| request)
        .map_err(|rejection| rejection.body_text());
    build_scenario_response(&state, request, SystemTime::now())
}

pub async fn get_overview(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ClimateQuery>, QueryRejection>,
) -> impl IntoResponse {
    let query = query
        .map(|Query(query)| query)
        .map_err(|rejection| rejection.body_text());
    build_overview_response(&state, query, SystemTime::now())
}

pub async fn get_map(
    State(state): State<Arc<AppState>>,
    Path(renderer): Path<String>,
    query: Result<Query<ClimateQuery>, QueryRejection>,
    Query(selection): Query<SelectionQuery>,
) -> impl IntoResponse {
    let query = query
        .map(|Query(query)| query)
        .map_err(|rejection| rejection.body_text());
    build_map_response(
        &state,
        &renderer,
        query,
        selection.selected.as_deref(),
        SystemTime::now(),
    )
}

fn build_health_response(state: &AppState, now: SystemTime) -> ApiResponse<HealthSuccessResponse> {
    let segments = match state.repository().segments() {
        Ok(segments) => segments,
        Err(err) => return internal_error("/api/health", &err.to_string()),
    };
    let timestamp = match format_timestamp(now) {
        Ok(formatted) => formatted,
        Err(_) => return internal_error("/api/health", "timestamp formatting failure"),
    };

    ApiResponse::Success(HealthSuccessResponse {
        status: HealthStatus::Ok,
        model: state.model().name(),
        segments: segments.len(),
        timestamp,
    })
}

fn build_predict_response(
    state: &AppState,
    body: Result<Value, String>,
    now: SystemTime,
) -> ApiResponse<RiskPrediction> {
    let body = match body {
        Ok(body) => body,
        Err(message) => return app_error("/api/predict-risk", AppError::InvalidRequest(message), now),
    };
    let request = match PredictionRequest::from_json(body) {
        Ok(request) => request,
        Err(err) => return app_error("/api/predict-risk", err, now),
    };

    let prediction = state.model().predict(&request.into_input());
    debug!(
        road_id = %prediction.road_id,
        risk_score = prediction.risk_score,
        climate_risk = prediction.climate_risk.as_str(),
        "Risk predicted"
    );
    ApiResponse::Success(prediction)
}

fn build_segments_response(
    state: &AppState,
    query: Result<ClimateQuery, String>,
    now: SystemTime,
) -> ApiResponse<SegmentsSuccessResponse> {
    let query = match query {
        Ok(query) => query,
        Err(message) => return app_error("/api/road-segments", AppError::InvalidRequest(message), now),
    };
    if let Err(err) = query.ensure_finite() {
        return app_error("/api/road-segments", err, now);
    }
    let segments = match state.repository().segments() {
        Ok(segments) => segments,
        Err(err) => return app_error("/api/road-segments", err, now),
    };
    let timestamp = match format_timestamp(now) {
        Ok(formatted) => formatted,
        Err(_) => return internal_error("/api/road-segments", "timestamp formatting failure"),
    };

    let climate = query.climate();
    let time = query.time();
    let assessed = assess_segments(state.model(), &segments, &climate, time);
    let weather_type = climate.weather_type;

    ApiResponse::Success(SegmentsSuccessResponse {
        total: assessed.len(),
        climate_conditions: climate,
        hour: time.hour,
        day_type: time.day_type,
        segments: assessed
            .into_iter()
            .map(|item| SegmentRiskResponse::from_assessed(item, weather_type))
            .collect(),
        timestamp,
    })
}

fn build_scenario_response(
    state: &AppState,
    request: Result<ScenarioRequest, String>,
    now: SystemTime,
) -> ApiResponse<ScenarioSuccessResponse> {
    let request = match request {
        Ok(request) => request,
        Err(message) => return app_error("/api/climate-scenario", AppError::InvalidRequest(message), now),
    };
    if let Err(err) = request.ensure_finite() {
        return app_error("/api/climate-scenario", err, now);
    }
    let segments = match state.repository().segments() {
        Ok(segments) => segments,
        Err(err) => return app_error("/api/climate-scenario", err, now),
    };
    let timestamp = match format_timestamp(now) {
        Ok(formatted) => formatted,
        Err(_) => return internal_error("/api/climate-scenario", "timestamp formatting failure"),
    };

    let comparison = compare_scenarios(
        state.model(),
        &segments,
        &request.base_climate,
        &request.scenario_climate,
        TimeConditions::new(request.hour, request.day_type),
    );

    ApiResponse::Success(ScenarioSuccessResponse {
        comparison,
        timestamp,
    })
}

fn build_overview_response(
    state: &AppState,
    query: Result<ClimateQuery, String>,
    now: SystemTime,
) -> ApiResponse<OverviewSuccessResponse> {
    let query = match query {
        Ok(query) => query,
        Err(message) => return app_error("/api/overview", AppError::InvalidRequest(message), now),
    };
    if let Err(err) = query.ensure_finite() {
        return app_error("/api/overview", err, now);
    }
    let segments = match state.repository().segments() {
        Ok(segments) => segments,
        Err(err) => return app_error("/api/overview", err, now),
    };
    let timestamp = match format_timestamp(now) {
        Ok(formatted) => formatted,
        Err(_) => return internal_error("/api/overview", "timestamp formatting failure"),
    };

    let climate = query.climate();
    let assessed = assess_segments(state.model(), &segments, &climate, query.time());

    ApiResponse::Success(OverviewSuccessResponse {
        stats: summarize(&assessed),
        alerts: generate_alerts(&assessed, &climate),
        timestamp,
    })
}

fn build_map_response(
    state: &AppState,
    renderer: &str,
    query: Result<ClimateQuery, String>,
    selected: Option<&str>,
    now: SystemTime,
) -> ApiResponse<Value> {
    let Some(renderer) = renderer_for(renderer) else {
        return client_error(
            StatusCode::NOT_FOUND,
            ApiErrorCode::UnknownRenderer,
            format!("unknown map renderer: {renderer}"),
            None,
            now,
        );
    };
    let query = match query {
        Ok(query) => query,
        Err(message) => return app_error("/api/map", AppError::InvalidRequest(message), now),
    };
    if let Err(err) = query.ensure_finite() {
        return app_error("/api/map", err, now);
    }
    let segments = match state.repository().segments() {
        Ok(segments) => segments,
        Err(err) => return app_error("/api/map", err, now),
    };

    let climate = query.climate();
    let assessed = assess_segments(state.model(), &segments, &climate, query.time());
    ApiResponse::Success(renderer.render(&assessed, climate.weather_type, selected))
}

fn app_error<T>(endpoint: &str, err: AppError, now: SystemTime) -> ApiResponse<T> {
    match err {
        AppError::MissingField(field) => client_error(
            StatusCode::BAD_REQUEST,
            ApiErrorCode::MissingField,
            err.to_string(),
            Some(field.to_string()),
            now,
        ),
        AppError::InvalidRequest(_) => {
            debug!(endpoint = endpoint, error = %err, "Rejected request");
            client_error(
                StatusCode::BAD_REQUEST,
                ApiErrorCode::InvalidRequest,
                err.to_string(),
                None,
                now,
            )
        }
        AppError::Repository(_) => internal_error(endpoint, &err.to_string()),
    }
}

fn client_error<T>(
    status: StatusCode,
    error_code: ApiErrorCode,
    error_message: String,
    field: Option<String>,
    now: SystemTime,
) -> ApiResponse<T> {
    ApiResponse::Error {
        status,
        body: ErrorResponse {
            error_code,
            error_message,
            field,
            timestamp: format_timestamp(now).unwrap_or_else(|_| fallback_timestamp()),
        },
    }
}

fn internal_error<T>(endpoint: &str, message: &str) -> ApiResponse<T> {
    error!(
        endpoint = endpoint,
        message = message,
        "Internal error while handling request"
    );
    let formatted = format_timestamp(SystemTime::now()).unwrap_or_else(|err| {
        error!(error = %err, "Failed to format internal error timestamp");
        fallback_timestamp()
    });
    ApiResponse::Error {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: ErrorResponse {
            error_code: ApiErrorCode::InternalError,
            error_message: INTERNAL_ERROR_MESSAGE.to_string(),
            field: None,
            timestamp: formatted,
        },
    }
}

fn fallback_timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}

fn format_timestamp(timestamp: SystemTime) -> Result<String, TimestampError> {
    let datetime = OffsetDateTime::from(timestamp);
    datetime.format(&Rfc3339).map_err(TimestampError::Format)
}
