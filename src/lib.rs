use structopt::StructOpt;

pub mod fetcher;
pub mod report;
pub mod telemetry;

pub use unsplash_feed_api_structs as api;

use crate::fetcher::{FetcherConfig, PhotoFetcher};
use crate::report::OutputFormat;

#[derive(Debug)]
pub enum Error {
    TelemetryInitError(anyhow::Error),
    FetchError(fetcher::Error),
    ReportError(std::io::Error),
}

impl From<Error> for i32 {
    fn from(error: Error) -> i32 {
        match error {
            Error::TelemetryInitError(_) => 3,
            Error::FetchError(err) => match err {
                fetcher::Error::InvalidEndpoint { .. } => 4,
                fetcher::Error::Transport(_) => 5,
                fetcher::Error::UnexpectedStatus(_) => 6,
                fetcher::Error::Decode(_) => 7,
                fetcher::Error::Cancelled => 8,
            },
            Error::ReportError(_) => 9,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::TelemetryInitError(err) => {
                write!(f, "Failed to init telemetry: {:#}", err)
            },
            Error::FetchError(err) => {
                write!(f, "Failed to fetch photos: {}", report::error_chain(err))
            },
            Error::ReportError(err) => {
                write!(f, "Failed to write report: {}", err)
            },
        }
    }
}

#[derive(Debug, StructOpt)]
pub struct Args {
    /// Photo listing endpoint.
    #[structopt(
        long,
        default_value = "https://api.unsplash.com/photos/",
        env = "UNSPLASH_FEED_ENDPOINT"
    )]
    endpoint: String,

    /// Unsplash access key, sent as the `client_id` query parameter.
    #[structopt(long, env = "UNSPLASH_FEED_ACCESS_KEY", hide_env_values = true)]
    access_key: String,

    /// Output format.
    #[structopt(long, default_value = "plain", possible_values = OutputFormat::VARIANTS)]
    format: OutputFormat,
}

impl Args {
    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig::new(self.endpoint.clone(), self.access_key.clone())
    }
}

pub async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    let args = Args::from_args();

    telemetry::init().map_err(Error::TelemetryInitError)?;

    let fetcher = PhotoFetcher::new(args.fetcher_config());
    let result = fetcher.fetch_photos().await;

    let stdout = std::io::stdout();
    let mut reporter = args.format.reporter(stdout.lock());
    let reported = match &result {
        Ok(photos) => reporter.photos(photos),
        Err(err) => reporter.failure(err),
    };

    telemetry::shutdown();

    result.map_err(Error::FetchError)?;
    reported.map_err(Error::ReportError)
}
