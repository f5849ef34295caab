//! Current-weather lookup against the OpenWeather REST API.
//!
//! The upstream payload is normalized into a flat [`WeatherReport`] so the
//! client and the chat prompt never see OpenWeather's nesting.

use serde::{Deserialize, Serialize};
use wardrobe_core::advice::WeatherContext;

/// HTTP client for the current-weather endpoint.
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

/// Normalized current conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    /// Degrees Celsius, rounded to the nearest whole degree.
    pub temperature: f64,
    /// Short group name, e.g. `"Rain"` or `"Clear"`.
    pub condition: String,
    pub description: String,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Metres per second.
    pub wind_speed: f64,
    pub icon: String,
    pub location: String,
    pub country: String,
    /// Observation time (Unix seconds).
    pub timestamp: i64,
}

impl WeatherReport {
    /// The subset of the report used to steer outfit advice.
    pub fn context(&self) -> WeatherContext {
        WeatherContext {
            temperature: self.temperature,
            condition: self.condition.clone(),
            description: self.description.clone(),
            humidity: Some(self.humidity),
            wind_speed: Some(self.wind_speed),
            location: Some(self.location.clone()).filter(|l| !l.is_empty()),
        }
    }
}

/// Errors from the weather lookup.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// No API key configured.
    #[error("Weather API key is not configured")]
    MissingApiKey,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// OpenWeather returned a non-2xx status code.
    #[error("Weather API error ({status}): {body}")]
    Upstream { status: u16, body: String },

    /// The payload did not have the expected shape.
    #[error("Unexpected weather payload: {0}")]
    Decode(String),
}

// ---- upstream payload ----

#[derive(Debug, Deserialize)]
struct RawCurrent {
    #[serde(default)]
    weather: Vec<RawCondition>,
    main: RawMain,
    #[serde(default)]
    wind: Option<RawWind>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    sys: Option<RawSys>,
    #[serde(default)]
    dt: i64,
}

#[derive(Debug, Deserialize)]
struct RawCondition {
    main: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Deserialize)]
struct RawMain {
    temp: f64,
    #[serde(default)]
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct RawWind {
    #[serde(default)]
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct RawSys {
    #[serde(default)]
    country: String,
}

impl WeatherClient {
    /// * `base_url` - e.g. `https://api.openweathermap.org/data/2.5`.
    /// * `api_key` - `None` makes every lookup fail with
    ///   [`WeatherError::MissingApiKey`].
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    pub fn with_client(client: reqwest::Client, base_url: String, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch current conditions at `(lat, lon)` in metric units.
    pub async fn lookup(&self, lat: f64, lon: f64) -> Result<WeatherReport, WeatherError> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;

        let response = self
            .client
            .get(format!("{}/weather", self.base_url))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("units", "metric".to_string()),
                ("appid", api_key.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(WeatherError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let payload: serde_json::Value = response.json().await?;
        normalize(payload)
    }
}

/// Flatten an OpenWeather current-weather payload.
pub fn normalize(payload: serde_json::Value) -> Result<WeatherReport, WeatherError> {
    let raw: RawCurrent =
        serde_json::from_value(payload).map_err(|e| WeatherError::Decode(e.to_string()))?;

    let first = raw
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::Decode("missing weather conditions".into()))?;

    Ok(WeatherReport {
        temperature: raw.main.temp.round(),
        condition: first.main,
        description: first.description,
        humidity: raw.main.humidity,
        wind_speed: raw.wind.map(|w| w.speed).unwrap_or(0.0),
        icon: first.icon,
        location: raw.name,
        country: raw.sys.map(|s| s.country).unwrap_or_default(),
        timestamp: raw.dt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "coord": {"lon": 10.75, "lat": 59.91},
            "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
            "main": {"temp": 7.62, "feels_like": 5.1, "humidity": 87},
            "wind": {"speed": 4.12, "deg": 200},
            "dt": 1717236000,
            "sys": {"country": "NO"},
            "name": "Oslo"
        })
    }

    #[test]
    fn normalizes_current_weather() {
        let report = normalize(sample()).unwrap();
        assert_eq!(report.temperature, 8.0);
        assert_eq!(report.condition, "Rain");
        assert_eq!(report.description, "light rain");
        assert_eq!(report.humidity, 87.0);
        assert_eq!(report.wind_speed, 4.12);
        assert_eq!(report.icon, "10d");
        assert_eq!(report.location, "Oslo");
        assert_eq!(report.country, "NO");
        assert_eq!(report.timestamp, 1717236000);
    }

    #[test]
    fn report_serializes_camel_case() {
        let value = serde_json::to_value(normalize(sample()).unwrap()).unwrap();
        assert!(value.get("windSpeed").is_some());
        assert!(value.get("wind_speed").is_none());
    }

    #[test]
    fn missing_conditions_is_decode_error() {
        let mut payload = sample();
        payload["weather"] = json!([]);
        assert_matches!(normalize(payload), Err(WeatherError::Decode(_)));
    }

    #[test]
    fn missing_main_block_is_decode_error() {
        assert_matches!(
            normalize(json!({"weather": [{"main": "Clear"}]})),
            Err(WeatherError::Decode(_))
        );
    }

    #[test]
    fn context_carries_location() {
        let ctx = normalize(sample()).unwrap().context();
        assert_eq!(ctx.location.as_deref(), Some("Oslo"));
        assert_eq!(ctx.wind_speed, Some(4.12));
    }

    #[tokio::test]
    async fn lookup_without_key_fails_fast() {
        let client = WeatherClient::new("http://127.0.0.1:9".into(), Some("  ".into()));
        assert!(!client.is_configured());
        assert_matches!(
            client.lookup(1.0, 2.0).await,
            Err(WeatherError::MissingApiKey)
        );
    }
}
