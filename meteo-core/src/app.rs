use crate::api::ApiClient;
use crate::location::{self, LocationSource, Resolved};
use crate::state::UiState;
use tokio_util::sync::CancellationToken;

/// One weather-display session: a location resolution followed by a weather
/// fetch and a place-name fetch running concurrently.
#[derive(Debug)]
pub struct App {
    client: ApiClient,
    state: UiState,
    cancel: CancellationToken,
}

impl App {
    pub fn new(client: ApiClient) -> Self {
        Self { client, state: UiState::new(), cancel: CancellationToken::new() }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Token that abandons the session. Once cancelled, no further state
    /// writes happen, even if a fetch is still in flight.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    fn apply_resolution(&mut self, resolved: &Resolved) {
        self.state.begin_weather_fetch();

        // After the fetch-start clear, so the advisory stays visible until
        // the weather outcome lands.
        if let Some(advisory) = &resolved.advisory {
            tracing::info!("{advisory}");
            self.state.set_error(advisory.clone());
        }
    }

    /// Run the session once. The two fetches complete in no defined order;
    /// each updates only its own slice of state.
    pub async fn run(&mut self, source: Option<&dyn LocationSource>) {
        let resolved = location::resolve(source).await;

        if self.cancel.is_cancelled() {
            return;
        }
        self.apply_resolution(&resolved);

        let coords = resolved.coordinates;
        let (weather, place) =
            tokio::join!(self.client.fetch_forecast(coords), self.client.place_name(coords));

        if self.cancel.is_cancelled() {
            return;
        }
        self.state.apply_weather(weather);

        if self.cancel.is_cancelled() {
            return;
        }
        self.state.set_place_name(place);
    }
}
