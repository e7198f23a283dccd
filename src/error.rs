use thiserror::Error;

/// Everything that can go wrong between the user pressing a button and the
/// result being shown. Kept `Clone` so it can travel inside a `Message`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeatherError {
    #[error("No API key is loaded, so weather data cannot be retrieved.")]
    MissingCredential,

    #[error("Please enter a city name.")]
    EmptyInput,

    #[error("Request timed out. Please check your internet connection.")]
    Timeout,

    #[error("An error occurred: {endpoint} request failed with HTTP {status}")]
    Http { status: u16, endpoint: &'static str },

    #[error("An error occurred: {0}")]
    Network(String),

    #[error("Could not retrieve weather data. Please check the city name and try again. ({0})")]
    Parse(String),

    #[error("Could not retrieve current location. Please check your internet connection.")]
    LocationUnavailable(String),

    #[error("City not found in location data.")]
    MissingLocation,
}

impl WeatherError {
    /// Title of the dialog the error is shown in.
    pub fn title(&self) -> &'static str {
        match self {
            WeatherError::EmptyInput => "Input Error",
            WeatherError::Timeout | WeatherError::LocationUnavailable(_) => "Network Error",
            WeatherError::MissingCredential | WeatherError::Parse(_) => "Data Error",
            WeatherError::Http { .. }
            | WeatherError::Network(_)
            | WeatherError::MissingLocation => "Error",
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            WeatherError::Timeout
        } else if err.is_decode() {
            WeatherError::Parse(err.to_string())
        } else {
            WeatherError::Network(err.to_string())
        }
    }
}
