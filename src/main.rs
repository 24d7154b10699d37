use std::path::PathBuf;

use anyhow::Result;
use sahayta::{GeocodeClient, SahaytaConfig, WeatherClient, api::AppState, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SAHAYTA_CONFIG").ok())
        .map(PathBuf::from);

    let config = SahaytaConfig::load_from_path(config_path)?;
    logging::init(&config.logging)?;

    tracing::info!("Starting Sahayta {}", sahayta::VERSION);

    let geocoder = GeocodeClient::new(&config.geocoding)?;

    // Reported once here; only the weather endpoint is affected
    let weather = WeatherClient::new(&config.weather, &config.geocoding.user_agent);
    if let Err(e) = &weather {
        tracing::error!("Weather lookups disabled: {}", e);
    }

    let state = AppState::new(geocoder, weather);
    web::run(&config.server.bind_address(), state).await
}
