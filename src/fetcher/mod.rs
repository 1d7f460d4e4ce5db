use std::future::Future;

use thiserror::Error;
use url::Url;

use unsplash_feed_api_structs::Photo;

pub mod transport;

pub use transport::{PhotoTransport, RawResponse, TransportError};

/// Query parameter the access key is sent in.
pub const ACCESS_KEY_PARAM: &str = "client_id";

#[derive(Error, Debug)]
pub enum EndpointError {
    #[error("couldn't parse URL")]
    Parse(#[from] url::ParseError),
    #[error("unsupported scheme {0:?}")]
    UnsupportedScheme(String),
    #[error("URL cannot carry a query string")]
    CannotBeABase,
    #[error("access key is empty")]
    MissingAccessKey,
}

/// A payload that did not match the photo schema, with the path to the offending value.
#[derive(Error, Debug)]
#[error("{path}: {error}")]
pub struct DecodeError {
    pub path: String,
    error: serde_json::Error,
}

impl From<serde_path_to_error::Error<serde_json::Error>> for DecodeError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        DecodeError {
            path: err.path().to_string(),
            error: err.into_inner(),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid endpoint {endpoint:?}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        reason: EndpointError,
    },
    #[error("request failed")]
    Transport(#[source] TransportError),
    #[error("unexpected HTTP status {0}")]
    UnexpectedStatus(u16),
    #[error("couldn't decode photos")]
    Decode(#[from] DecodeError),
    #[error("request cancelled")]
    Cancelled,
}

impl Error {
    /// Stable name of the failure kind, for logs and machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidEndpoint { .. } => "invalid_endpoint",
            Error::Transport(_) => "transport",
            Error::UnexpectedStatus(_) => "unexpected_status",
            Error::Decode(_) => "decode",
            Error::Cancelled => "cancelled",
        }
    }
}

#[derive(Clone)]
pub struct FetcherConfig {
    /// Base URL of the photo listing, e.g. `https://api.unsplash.com/photos/`.
    pub endpoint: String,
    pub access_key: String,
}

impl std::fmt::Debug for FetcherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetcherConfig")
            .field("endpoint", &self.endpoint)
            .field("access_key", &"<redacted>")
            .finish()
    }
}

impl FetcherConfig {
    pub fn new(endpoint: impl Into<String>, access_key: impl Into<String>) -> Self {
        FetcherConfig {
            endpoint: endpoint.into(),
            access_key: access_key.into(),
        }
    }

    /// Builds `<endpoint>?client_id=<access key>`.
    pub fn request_url(&self) -> Result<Url, Error> {
        self.try_request_url().map_err(|reason| Error::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason,
        })
    }

    fn try_request_url(&self) -> Result<Url, EndpointError> {
        let mut url = Url::parse(&self.endpoint)?;

        match url.scheme() {
            "http" | "https" => {},
            scheme => return Err(EndpointError::UnsupportedScheme(scheme.to_string())),
        }
        if url.cannot_be_a_base() {
            return Err(EndpointError::CannotBeABase);
        }
        if self.access_key.trim().is_empty() {
            return Err(EndpointError::MissingAccessKey);
        }

        url.query_pairs_mut()
            .append_pair(ACCESS_KEY_PARAM, &self.access_key);
        Ok(url)
    }
}

/// Fetches the photo listing. Holds no state between calls, so one fetcher can serve any number
/// of concurrent fetches.
#[derive(Debug)]
pub struct PhotoFetcher<T = surf::Client> {
    config: FetcherConfig,
    transport: T,
}

impl PhotoFetcher<surf::Client> {
    /// Uses a surf client that follows redirects, so the status checked is the final one.
    pub fn new(config: FetcherConfig) -> Self {
        let client = surf::Client::new().with(surf::middleware::Redirect::default());
        PhotoFetcher::with_transport(config, client)
    }
}

impl<T: PhotoTransport> PhotoFetcher<T> {
    pub fn with_transport(config: FetcherConfig, transport: T) -> Self {
        PhotoFetcher { config, transport }
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches and decodes one page of photos, in the order the server sent them.
    pub async fn fetch_photos(&self) -> Result<Vec<Photo>, Error> {
        self.fetch_photos_until(futures_lite::future::pending()).await
    }

    /// Like [`fetch_photos`](Self::fetch_photos), but gives up with [`Error::Cancelled`] as soon
    /// as `cancelled` completes. The in-flight request is dropped, which aborts it.
    #[tracing::instrument(skip_all, fields(endpoint = %self.config.endpoint))]
    pub async fn fetch_photos_until<C>(&self, cancelled: C) -> Result<Vec<Photo>, Error>
    where
        C: Future<Output = ()>,
    {
        let url = self.config.request_url()?;

        let request = async {
            self.transport
                .fetch(&url)
                .await
                .map_err(Error::Transport)
        };
        let cancellation = async {
            cancelled.await;
            tracing::debug!("Fetch cancelled before a response arrived");
            Err(Error::Cancelled)
        };
        let response = futures_lite::future::or(request, cancellation).await?;

        tracing::debug!(
            status = response.status,
            bytes = response.body.len(),
            "Received photo listing response"
        );

        if !(200..300).contains(&response.status) {
            return Err(Error::UnexpectedStatus(response.status));
        }

        let photos = decode_photos(&response.body)?;
        tracing::info!(count = photos.len(), "Decoded photo listing");

        Ok(photos)
    }
}

/// Decodes a JSON array of photos. Unknown fields are ignored, anything else that doesn't match
/// fails the whole payload.
pub fn decode_photos(body: &[u8]) -> Result<Vec<Photo>, DecodeError> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let photos = serde_path_to_error::deserialize(&mut deserializer)?;
    deserializer.end().map_err(|error| DecodeError {
        path: ".".to_string(),
        error,
    })?;

    Ok(photos)
}
