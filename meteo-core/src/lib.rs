//! Core library for the `meteo` weather display.
//!
//! This crate defines:
//! - Location resolution with a hardcoded fallback
//! - The Open-Meteo forecast and reverse-geocoding clients
//! - The hourly data model and nearest-hour selection
//! - UI state and its text rendering
//!
//! It is used by `meteo-cli`, but can also be reused by other binaries or services.

pub mod api;
pub mod app;
pub mod location;
pub mod model;
pub mod state;

pub use api::{ApiClient, WeatherError};
pub use app::App;
pub use location::{Coordinates, FALLBACK, FALLBACK_NAME, LocationError, LocationSource};
pub use model::{Forecast, HourSample, HourlyUnits, nearest_hour_index};
pub use state::UiState;
