use crate::api::WeatherError;
use crate::model::{Forecast, nearest_hour_index};
use chrono::NaiveDateTime;
use std::fmt::Write as _;

/// The single mutable container behind the display.
///
/// `error` and `weather` may both be set at once: a failed refetch does not
/// clear previously stored weather, and both render together.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub weather: Option<Forecast>,
    pub error: String,
    pub loading: bool,
    pub place_name: String,
}

impl UiState {
    /// Initial state at mount: loading, nothing resolved yet.
    pub fn new() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Entering a weather fetch: loading on, prior error cleared.
    pub fn begin_weather_fetch(&mut self) {
        self.loading = true;
        self.error.clear();
    }

    /// Record the outcome of a weather fetch. Success stores the forecast and
    /// clears any error; failure records the message and leaves prior weather
    /// untouched. Loading is cleared on every path.
    pub fn apply_weather(&mut self, outcome: Result<Forecast, WeatherError>) {
        match outcome {
            Ok(forecast) => {
                self.weather = Some(forecast);
                self.error.clear();
            }
            Err(err) => self.error = err.to_string(),
        }
        self.loading = false;
    }

    /// Advisory or error text for the error slot.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = message.into();
    }

    pub fn set_place_name(&mut self, name: impl Into<String>) {
        self.place_name = name.into();
    }

    /// Render the current state as display text.
    ///
    /// The nearest hour is recomputed from `now` on every call, so the shown
    /// hour advances with the wall clock across renders.
    pub fn render(&self, now: NaiveDateTime) -> String {
        let mut out = String::new();

        if self.loading {
            out.push_str("Fetching your location and the weather...\n");
        }

        if !self.error.is_empty() {
            let _ = writeln!(out, "{}", self.error);
        }

        if self.loading {
            return out;
        }

        if let Some(forecast) = &self.weather {
            out.push_str("Current weather (approx.)\n");

            if self.place_name.is_empty() {
                out.push_str("Location: Loading location...\n");
            } else {
                let _ = writeln!(out, "Location: {}", self.place_name);
            }

            let i = nearest_hour_index(&forecast.hourly, now);
            match forecast.hourly.get(i) {
                Some(hour) => {
                    let units = &forecast.units;
                    let _ = writeln!(out, "  {}{}", hour.temperature, units.temperature_2m);
                    let _ = writeln!(
                        out,
                        "Humidity: {}{}",
                        hour.relative_humidity, units.relative_humidity_2m
                    );
                    let _ = writeln!(
                        out,
                        "Rain chance: {}{}",
                        hour.precipitation_probability, units.precipitation_probability
                    );
                    let _ = writeln!(out, "Cloud cover: {}{}", hour.cloud_cover, units.cloud_cover);
                    let _ = writeln!(out, "UV index: {}", hour.uv_index);
                    let _ = writeln!(out, "(Data for hour: {})", hour.time);
                }
                None => out.push_str("No hourly data available.\n"),
            }
        }

        out
    }
}
