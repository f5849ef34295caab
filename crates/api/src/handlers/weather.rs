//! Public current-weather endpoint.
//!
//! Responds with the bare normalized report rather than the `data`
//! envelope, and with `{error, details}` when the lookup fails.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// GET /api/v1/weather?lat=&lon=
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Response {
    let (Some(lat), Some(lon)) = (params.lat, params.lon) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Latitude and longitude are required" })),
        )
            .into_response();
    };

    match state.weather.lookup(lat, lon).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            tracing::error!(lat, lon, error = %e, "Weather lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to fetch weather data",
                    "details": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
