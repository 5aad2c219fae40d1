use async_trait::async_trait;
use chrono::Local;
use clap::Parser;
use meteo_core::{ApiClient, App, Coordinates, LocationError, LocationSource};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "Current weather for your location")]
pub struct Cli {
    /// Latitude of your position; with --longitude, used instead of the fallback location.
    #[arg(long, requires = "longitude", allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Longitude of your position.
    #[arg(long, requires = "latitude", allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// A position supplied on the command line, standing in for a live sensor.
#[derive(Debug)]
struct ArgPosition(Coordinates);

#[async_trait]
impl LocationSource for ArgPosition {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Ok(self.0)
    }
}

impl Cli {
    fn location_source(&self) -> Option<ArgPosition> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => {
                Some(ArgPosition(Coordinates { latitude, longitude }))
            }
            _ => None,
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let source = self.location_source();
        let mut app = App::new(ApiClient::new());

        print!("{}", app.state().render(Local::now().naive_local()));

        app.run(source.as_ref().map(|s| s as &dyn LocationSource)).await;

        print!("{}", app.state().render(Local::now().naive_local()));

        // Weather errors are advisory text in the view, not process failures.
        Ok(())
    }
}
