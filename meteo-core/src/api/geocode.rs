use super::ApiClient;
use crate::location::Coordinates;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ReverseGeocodeResponse {
    name: Option<String>,
    admin1: Option<String>,
}

impl ApiClient {
    /// Resolve coordinates to a display name.
    ///
    /// Always yields a usable string: any failure (network, non-2xx, missing
    /// `name` field) falls back to the coordinates rounded to two decimals.
    /// Geocoding problems are logged, never surfaced as user errors.
    pub async fn place_name(&self, coords: Coordinates) -> String {
        match self.reverse_geocode(coords).await {
            Some(name) => name,
            None => format!("(Lat: {:.2}, Lon: {:.2})", coords.latitude, coords.longitude),
        }
    }

    async fn reverse_geocode(&self, coords: Coordinates) -> Option<String> {
        let url = format!("{}/v1/reverse", self.geocode_base);

        let response = match self
            .http
            .get(&url)
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("format", "json".to_string()),
            ])
            .send()
            .await
        {
            Ok(r) => r,
            Err(err) => {
                tracing::debug!("reverse geocode request failed: {err}");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("reverse geocode returned status {}", response.status());
            return None;
        }

        let body: ReverseGeocodeResponse = match response.json().await {
            Ok(b) => b,
            Err(err) => {
                tracing::debug!("reverse geocode parse error: {err}");
                return None;
            }
        };

        let name = body.name?;
        Some(format!("{}, {}", name, body.admin1.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ZACAPA: Coordinates = Coordinates { latitude: 14.97, longitude: -89.54 };

    #[tokio::test]
    async fn name_and_region_are_joined() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/reverse"))
            .and(query_param("latitude", "14.97"))
            .and(query_param("longitude", "-89.54"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "Zacapa",
                "admin1": "Zacapa"
            })))
            .mount(&server)
            .await;

        let client = ApiClient::with_base_urls(server.uri(), server.uri());
        assert_eq!(client.place_name(ZACAPA).await, "Zacapa, Zacapa");
    }

    #[tokio::test]
    async fn missing_region_leaves_it_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/reverse"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "name": "Zacapa" })),
            )
            .mount(&server)
            .await;

        let client = ApiClient::with_base_urls(server.uri(), server.uri());
        assert_eq!(client.place_name(ZACAPA).await, "Zacapa, ");
    }

    #[tokio::test]
    async fn missing_name_falls_back_to_coordinates() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/reverse"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = ApiClient::with_base_urls(server.uri(), server.uri());
        assert_eq!(client.place_name(ZACAPA).await, "(Lat: 14.97, Lon: -89.54)");
    }

    #[tokio::test]
    async fn server_error_falls_back_to_coordinates() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/reverse"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ApiClient::with_base_urls(server.uri(), server.uri());
        assert_eq!(client.place_name(ZACAPA).await, "(Lat: 14.97, Lon: -89.54)");
    }

    #[tokio::test]
    async fn unreachable_host_falls_back_to_coordinates() {
        let client = ApiClient::with_base_urls("http://127.0.0.1:9", "http://127.0.0.1:9");
        assert_eq!(client.place_name(ZACAPA).await, "(Lat: 14.97, Lon: -89.54)");
    }
}
