use crate::config::WeatherConfig;
use crate::error::WeatherError;
use crate::units::UnitSystem;
use chrono::{DateTime, Local};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Forecast feed resolution is 3 hours, so every 8th entry is one day apart.
pub const FORECAST_STRIDE: usize = 8;

// Provider payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OwCondition {
    description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OwMain {
    temp: f64,
    pressure: f64,
    humidity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OwForecastMain {
    temp: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OwClouds {
    all: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OwCurrentResponse {
    name: String,
    weather: Vec<OwCondition>,
    main: OwMain,
    wind: OwWind,
    visibility: Option<f64>,
    clouds: OwClouds,
    sys: OwSys,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    main: OwForecastMain,
    weather: Vec<OwCondition>,
    dt_txt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OwForecastResponse {
    list: Vec<ForecastEntry>,
}

fn first_description(conditions: &[OwCondition]) -> String {
    conditions
        .first()
        .map(|c| c.description.clone())
        .unwrap_or_default()
}

/// One point-in-time reading for a city.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub city: String,
    pub description: String,
    pub temperature: f64,
    pub pressure: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub visibility: Option<f64>,
    pub cloudiness: f64,
    pub sunrise: i64,
    pub sunset: i64,
}

impl From<OwCurrentResponse> for WeatherSnapshot {
    fn from(raw: OwCurrentResponse) -> Self {
        Self {
            description: first_description(&raw.weather),
            city: raw.name,
            temperature: raw.main.temp,
            pressure: raw.main.pressure,
            humidity: raw.main.humidity,
            wind_speed: raw.wind.speed,
            visibility: raw.visibility,
            cloudiness: raw.clouds.all,
            sunrise: raw.sys.sunrise,
            sunset: raw.sys.sunset,
        }
    }
}

/// One sampled forecast day.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub date: String,
    pub temperature: f64,
    pub description: String,
}

/// Take one entry per day (indices 0, 8, 16, ...) from the 3-hour feed.
pub fn sample_forecast(entries: &[ForecastEntry]) -> Vec<ForecastPoint> {
    entries
        .iter()
        .step_by(FORECAST_STRIDE)
        .map(|entry| ForecastPoint {
            date: entry
                .dt_txt
                .split(' ')
                .next()
                .unwrap_or_default()
                .to_string(),
            temperature: entry.main.temp,
            description: first_description(&entry.weather),
        })
        .collect()
}

/// Everything fetched by one query.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub query: String,
    pub units: UnitSystem,
    pub current: WeatherSnapshot,
    pub forecast: Vec<ForecastPoint>,
    pub fetched_at: DateTime<Local>,
}

/// OpenWeatherMap client for current conditions and the 5-day forecast
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl WeatherClient {
    pub fn new(config: &WeatherConfig, api_key: Option<String>) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch current conditions and forecast for `city`.
    #[instrument(skip(self))]
    pub async fn fetch(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<WeatherReport, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::EmptyInput);
        }
        let api_key = self.api_key.as_deref().ok_or(WeatherError::MissingCredential)?;

        let (current, forecast) = tokio::try_join!(
            self.get_json::<OwCurrentResponse>("weather", city, api_key, units),
            self.get_json::<OwForecastResponse>("forecast", city, api_key, units),
        )?;

        let report = WeatherReport {
            query: city.to_string(),
            units,
            current: current.into(),
            forecast: sample_forecast(&forecast.list),
            fetched_at: Local::now(),
        };
        info!(
            city = %report.current.city,
            temperature = report.current.temperature,
            forecast_points = report.forecast.len(),
            "weather fetched"
        );
        Ok(report)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        city: &str,
        api_key: &str,
        units: UnitSystem,
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, "requesting");

        let response = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", api_key), ("units", units.as_query())])
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint, error = %e, "request failed");
                WeatherError::from(e)
            })?;

        let status = response.status();
        debug!(endpoint, %status, "got response");
        if !status.is_success() {
            warn!(endpoint, %status, "provider returned an error status");
            return Err(WeatherError::Http {
                status: status.as_u16(),
                endpoint,
            });
        }

        response.json::<T>().await.map_err(|e| {
            warn!(endpoint, error = %e, "could not decode response");
            WeatherError::from(e)
        })
    }
}
