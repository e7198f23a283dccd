mod app;
mod chart;
mod components;
mod config;
mod credentials;
mod error;
mod geolocation;
mod icons;
mod presentation;
mod units;
mod view;
mod weather;

use app::{AppFlags, WeatherApp};
use config::{AppConfig, CONFIG_FILE};
use geolocation::GeoLocator;
use iced::{window, Application, Settings, Size};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use weather::WeatherClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, config_error) = match AppConfig::load(Path::new(CONFIG_FILE)) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    if let Some(err) = config_error {
        warn!(error = %err, "ignoring config file, using defaults");
    }
    info!(?config, "starting");

    let api_key = credentials::load_api_key(&config.api_key_path).ok();

    let flags = AppFlags {
        weather: WeatherClient::new(&config.weather, api_key)?,
        locator: GeoLocator::new(config.geolocation_url.clone(), config.weather.timeout())?,
        icons_dir: config.icons_dir.clone(),
        api_key_path: config.api_key_path.clone(),
    };

    WeatherApp::run(Settings {
        window: window::Settings {
            size: Size::new(800.0, 800.0),
            ..window::Settings::default()
        },
        ..Settings::with_flags(flags)
    })?;
    Ok(())
}
