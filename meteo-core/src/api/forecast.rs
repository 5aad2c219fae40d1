use super::{ApiClient, WeatherError};
use crate::location::Coordinates;
use crate::model::Forecast;

/// Hourly variables requested from the forecast endpoint.
pub const HOURLY_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,precipitation_probability,cloud_cover,uv_index";

impl ApiClient {
    /// Fetch the hourly forecast for `coords`. Single attempt, no retry.
    pub async fn fetch_forecast(&self, coords: Coordinates) -> Result<Forecast, WeatherError> {
        let url = format!("{}/v1/forecast", self.forecast_base);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(WeatherError::Connection)?;

        let status = res.status();
        let body = res.text().await.map_err(WeatherError::Connection)?;

        if !status.is_success() {
            tracing::debug!("forecast request failed with status {status}");
            return Err(WeatherError::Unavailable);
        }

        serde_json::from_str(&body).map_err(|err| {
            tracing::debug!("forecast body did not parse: {err}");
            WeatherError::Unavailable
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn forecast_body() -> serde_json::Value {
        serde_json::json!({
            "hourly": {
                "time": ["2026-08-26T10:00", "2026-08-26T11:00"],
                "temperature_2m": [28.1, 29.4],
                "relative_humidity_2m": [60.0, 55.0],
                "precipitation_probability": [10.0, 20.0],
                "cloud_cover": [40.0, 35.0],
                "uv_index": [6.5, 7.0]
            },
            "hourly_units": {
                "temperature_2m": "°C",
                "relative_humidity_2m": "%",
                "precipitation_probability": "%",
                "cloud_cover": "%",
                "uv_index": ""
            }
        })
    }

    #[tokio::test]
    async fn success_parses_the_documented_body() {
        let server = MockServer::start().await;
        let body = forecast_body();

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "14.97"))
            .and(query_param("longitude", "-89.54"))
            .and(query_param("hourly", HOURLY_FIELDS))
            .and(query_param("timezone", "auto"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let client = ApiClient::with_base_urls(server.uri(), server.uri());
        let forecast = client
            .fetch_forecast(Coordinates { latitude: 14.97, longitude: -89.54 })
            .await
            .expect("2xx with well-formed body must succeed");

        let expected: Forecast = serde_json::from_value(body).expect("body must parse");
        assert_eq!(forecast, expected);
    }

    #[tokio::test]
    async fn server_error_is_weather_unavailable() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ApiClient::with_base_urls(server.uri(), server.uri());
        let err = client
            .fetch_forecast(Coordinates { latitude: 14.97, longitude: -89.54 })
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::Unavailable));
        assert_eq!(err.to_string(), "weather unavailable");
    }

    #[tokio::test]
    async fn malformed_body_is_weather_unavailable() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = ApiClient::with_base_urls(server.uri(), server.uri());
        let err = client
            .fetch_forecast(Coordinates { latitude: 14.97, longitude: -89.54 })
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::Unavailable));
    }

    #[tokio::test]
    async fn unreachable_host_is_connection_error() {
        // Nothing listens on the discard port.
        let client = ApiClient::with_base_urls("http://127.0.0.1:9", "http://127.0.0.1:9");
        let err = client
            .fetch_forecast(Coordinates { latitude: 14.97, longitude: -89.54 })
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::Connection(_)));
        assert_eq!(err.to_string(), "connection error");
    }
}
