use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT validation settings.
    pub jwt: JwtConfig,
    pub weather: WeatherConfig,
    pub advice: AdviceConfig,
    pub storage: StorageConfig,
}

/// Weather lookup settings. A missing key makes `/weather` fail loudly.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

/// Chat-completions settings. A missing key makes `/chat` answer with the
/// fallback reply.
#[derive(Debug, Clone)]
pub struct AdviceConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

/// Uploaded-object storage.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory objects are written under.
    pub dir: PathBuf,
    /// Public URL prefix the `/files` route is reachable at.
    pub public_url: String,
    /// Maximum request body size, which bounds uploads.
    pub max_upload_bytes: usize,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                   |
    /// |------------------------|-------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                 |
    /// | `PORT`                 | `3000`                                    |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                      |
    /// | `OPENWEATHER_API_KEY`  | unset                                     |
    /// | `OPENWEATHER_BASE_URL` | `https://api.openweathermap.org/data/2.5` |
    /// | `OPENAI_API_KEY`       | unset                                     |
    /// | `OPENAI_BASE_URL`      | `https://api.openai.com/v1`               |
    /// | `OPENAI_MODEL`         | `gpt-4o-mini`                             |
    /// | `STORAGE_DIR`          | `./storage`                               |
    /// | `STORAGE_PUBLIC_URL`   | `http://localhost:3000/files`             |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`                                |
    pub fn from_env() -> Self {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let weather = WeatherConfig {
            api_key: env_opt("OPENWEATHER_API_KEY"),
            base_url: env_or(
                "OPENWEATHER_BASE_URL",
                "https://api.openweathermap.org/data/2.5",
            ),
        };

        let advice = AdviceConfig {
            api_key: env_opt("OPENAI_API_KEY"),
            base_url: env_or("OPENAI_BASE_URL", "https://api.openai.com/v1"),
            model: env_or("OPENAI_MODEL", "gpt-4o-mini"),
        };

        let storage = StorageConfig {
            dir: PathBuf::from(env_or("STORAGE_DIR", "./storage")),
            public_url: env_or("STORAGE_PUBLIC_URL", "http://localhost:3000/files"),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", "10485760")
                .parse()
                .expect("MAX_UPLOAD_BYTES must be a valid usize"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            weather,
            advice,
            storage,
        }
    }
}
