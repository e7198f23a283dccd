use crate::error::WeatherError;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, instrument, warn};

#[derive(Debug, Deserialize)]
struct IpInfo {
    city: Option<String>,
}

/// Guesses the user's city from their public IP address.
#[derive(Debug, Clone)]
pub struct GeoLocator {
    http: Client,
    url: String,
}

impl GeoLocator {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn locate(&self) -> Result<String, WeatherError> {
        let unavailable = |e: reqwest::Error| {
            warn!(error = %e, "geolocation request failed");
            WeatherError::LocationUnavailable(e.to_string())
        };

        let info = self
            .http
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(unavailable)?
            .json::<IpInfo>()
            .await
            .map_err(unavailable)?;

        match info.city.map(|c| c.trim().to_string()) {
            Some(city) if !city.is_empty() => {
                info!(%city, "detected location");
                Ok(city)
            }
            _ => Err(WeatherError::MissingLocation),
        }
    }
}
