use crate::error::WeatherError;
use std::{fs, path::Path};
use tracing::warn;

/// Read the API key from the first line of `path`.
pub fn load_api_key(path: &Path) -> Result<String, WeatherError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        warn!(path = %path.display(), error = %e, "API key is not available");
        WeatherError::MissingCredential
    })?;

    let key = contents.lines().next().unwrap_or_default().trim();
    if key.is_empty() {
        warn!(path = %path.display(), "API key file is empty");
        return Err(WeatherError::MissingCredential);
    }

    Ok(key.to_string())
}
