use reqwest::Client;

pub mod forecast;
pub mod geocode;

/// Production forecast endpoint base.
pub const FORECAST_BASE: &str = "https://api.open-meteo.com";
/// Production reverse-geocoding endpoint base.
pub const GEOCODING_BASE: &str = "https://geocoding-api.open-meteo.com";

/// User-facing failure of a weather fetch. The `Display` strings are shown
/// verbatim in the error slot.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// Non-2xx status or an unparseable body.
    #[error("weather unavailable")]
    Unavailable,
    /// Transport failure, no usable response.
    #[error("connection error")]
    Connection(#[source] reqwest::Error),
}

/// HTTP client for both Open-Meteo endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    forecast_base: String,
    geocode_base: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_urls(FORECAST_BASE, GEOCODING_BASE)
    }

    /// Client with custom endpoint bases, used by tests.
    pub fn with_base_urls(
        forecast_base: impl Into<String>,
        geocode_base: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            forecast_base: forecast_base.into(),
            geocode_base: geocode_base.into(),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
