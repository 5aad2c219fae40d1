use async_trait::async_trait;
use std::fmt::Debug;

/// A latitude/longitude pair. Immutable once resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Coordinates used when live geolocation is unavailable or denied.
pub const FALLBACK: Coordinates = Coordinates { latitude: 14.97, longitude: -89.54 };

/// Display name for the fallback coordinates.
pub const FALLBACK_NAME: &str = "Zacapa";

#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    /// Permission denied, sensor timeout, or any other failure to read a position.
    #[error("location unavailable")]
    Unavailable,
    /// The host environment has no geolocation capability at all.
    #[error("geolocation unsupported")]
    Unsupported,
}

/// Abstraction over the host environment's geolocation capability.
#[async_trait]
pub trait LocationSource: Send + Sync + Debug {
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Outcome of the one-shot location resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub coordinates: Coordinates,
    /// Advisory text explaining a fallback, shown in the error slot. `None` on a live fix.
    pub advisory: Option<String>,
}

/// Resolve coordinates exactly once per session.
///
/// `None` means the environment has no geolocation capability; a source that
/// fails (denied, timed out) is treated the same way except for the advisory
/// wording. Both substitute the Zacapa fallback and continue.
pub async fn resolve(source: Option<&dyn LocationSource>) -> Resolved {
    let Some(source) = source else {
        return Resolved {
            coordinates: FALLBACK,
            advisory: Some(format!(
                "Geolocation unsupported. Showing weather for {FALLBACK_NAME}."
            )),
        };
    };

    match source.current_position().await {
        Ok(coordinates) => Resolved { coordinates, advisory: None },
        Err(err) => {
            tracing::debug!("geolocation failed: {err}");
            Resolved {
                coordinates: FALLBACK,
                advisory: Some(format!(
                    "Could not determine your location. Showing weather for {FALLBACK_NAME}."
                )),
            }
        }
    }
}
