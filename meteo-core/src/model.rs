use chrono::NaiveDateTime;
use serde::Deserialize;

/// Timestamp format used by the Open-Meteo hourly series (local time, no offset).
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Unit strings reported by the forecast endpoint, one per measured field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HourlyUnits {
    #[serde(default)]
    pub temperature_2m: String,
    #[serde(default)]
    pub relative_humidity_2m: String,
    #[serde(default)]
    pub precipitation_probability: String,
    #[serde(default)]
    pub cloud_cover: String,
    #[serde(default)]
    pub uv_index: String,
}

/// One hour of forecast data.
///
/// The wire format is a set of parallel arrays joined by position; they are
/// zipped into these records at parse time so that a single index mix-up
/// cannot pair a timestamp with another hour's values.
#[derive(Debug, Clone, PartialEq)]
pub struct HourSample {
    pub time: String,
    pub temperature: f64,
    pub relative_humidity: f64,
    pub precipitation_probability: f64,
    pub cloud_cover: f64,
    pub uv_index: f64,
}

/// Parsed forecast response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawForecast")]
pub struct Forecast {
    pub hourly: Vec<HourSample>,
    pub units: HourlyUnits,
}

/// Wire shape of the forecast body, as documented by Open-Meteo.
#[derive(Debug, Deserialize)]
struct RawForecast {
    #[serde(default)]
    hourly: RawHourly,
    #[serde(default)]
    hourly_units: HourlyUnits,
}

#[derive(Debug, Default, Deserialize)]
struct RawHourly {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    temperature_2m: Vec<f64>,
    #[serde(default)]
    relative_humidity_2m: Vec<f64>,
    #[serde(default)]
    precipitation_probability: Vec<f64>,
    #[serde(default)]
    cloud_cover: Vec<f64>,
    #[serde(default)]
    uv_index: Vec<f64>,
}

impl From<RawForecast> for Forecast {
    fn from(raw: RawForecast) -> Self {
        let h = raw.hourly;

        // The endpoint guarantees equal lengths; truncate to the shortest
        // rather than fail if that ever breaks.
        let len = [
            h.time.len(),
            h.temperature_2m.len(),
            h.relative_humidity_2m.len(),
            h.precipitation_probability.len(),
            h.cloud_cover.len(),
            h.uv_index.len(),
        ]
        .into_iter()
        .min()
        .unwrap_or(0);

        let mut hourly = Vec::with_capacity(len);
        for i in 0..len {
            hourly.push(HourSample {
                time: h.time[i].clone(),
                temperature: h.temperature_2m[i],
                relative_humidity: h.relative_humidity_2m[i],
                precipitation_probability: h.precipitation_probability[i],
                cloud_cover: h.cloud_cover[i],
                uv_index: h.uv_index[i],
            });
        }

        Forecast { hourly, units: raw.hourly_units }
    }
}

/// Index of the hour whose timestamp is closest to `now`.
///
/// Returns 0 for an empty series. Ties keep the lowest index; entries with
/// unparseable timestamps are skipped. The result is always a valid index
/// into a non-empty series.
pub fn nearest_hour_index(samples: &[HourSample], now: NaiveDateTime) -> usize {
    let mut closest = 0;
    let mut min_diff = None;

    for (index, sample) in samples.iter().enumerate() {
        let Ok(time) = NaiveDateTime::parse_from_str(&sample.time, TIME_FORMAT) else {
            continue;
        };

        let diff = (now - time).abs();
        if min_diff.is_none_or(|min| diff < min) {
            min_diff = Some(diff);
            closest = index;
        }
    }

    closest
}
