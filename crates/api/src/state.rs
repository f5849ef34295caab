use std::sync::Arc;

use wardrobe_upstream::advice::AdviceClient;
use wardrobe_upstream::storage::FileStore;
use wardrobe_upstream::weather::WeatherClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: wardrobe_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Current-weather lookup.
    pub weather: Arc<WeatherClient>,
    /// Outfit-advice chat client.
    pub advisor: Arc<AdviceClient>,
    /// Uploaded image storage.
    pub storage: Arc<FileStore>,
}

impl AppState {
    /// Build the upstream clients from `config`.
    pub fn new(pool: wardrobe_db::DbPool, config: ServerConfig) -> Self {
        let weather = WeatherClient::new(
            config.weather.base_url.clone(),
            config.weather.api_key.clone(),
        );
        let advisor = AdviceClient::new(
            config.advice.base_url.clone(),
            config.advice.api_key.clone(),
            config.advice.model.clone(),
        );
        let storage = FileStore::new(config.storage.dir.clone(), &config.storage.public_url);

        Self {
            pool,
            config: Arc::new(config),
            weather: Arc::new(weather),
            advisor: Arc::new(advisor),
            storage: Arc::new(storage),
        }
    }
}
