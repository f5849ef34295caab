//! Public outfit-advice chat endpoint.
//!
//! Answers 200 even when the model is unreachable; only a body without a
//! `messages` array is rejected.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use wardrobe_core::advice::{suggestions_for, ChatMessage, WeatherContext};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub message: String,
    pub suggestions: Vec<String>,
}

/// POST /api/v1/chat
///
/// Body: `{messages: [{role, content}], weather?: {...}, lat?, lon?}`.
/// Malformed message entries are skipped.
pub async fn chat(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let Some(raw) = body.get("messages").and_then(Value::as_array) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Messages array is required" })),
        )
            .into_response();
    };

    let messages: Vec<ChatMessage> = raw
        .iter()
        .filter_map(|m| serde_json::from_value(m.clone()).ok())
        .collect();

    let weather = resolve_weather(&state, &body).await;
    let message = state.advisor.advise(&messages, weather.as_ref()).await;

    Json(ChatReply {
        message,
        suggestions: suggestions_for(weather.as_ref()),
    })
    .into_response()
}

/// Weather for the prompt: an explicit `weather` object wins, otherwise
/// `lat`/`lon` are looked up. Lookup failures just mean no weather.
async fn resolve_weather(state: &AppState, body: &Value) -> Option<WeatherContext> {
    if let Some(ctx) = body
        .get("weather")
        .and_then(|w| serde_json::from_value::<WeatherContext>(w.clone()).ok())
    {
        return Some(ctx);
    }

    let lat = body.get("lat").and_then(Value::as_f64)?;
    let lon = body.get("lon").and_then(Value::as_f64)?;
    match state.weather.lookup(lat, lon).await {
        Ok(report) => Some(report.context()),
        Err(e) => {
            tracing::debug!(error = %e, "Chat continuing without weather");
            None
        }
    }
}
