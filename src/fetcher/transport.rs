use url::Url;

pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Status and body of an HTTP response, as read off the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[async_trait::async_trait]
pub trait PhotoTransport {
    /// Sends a single `GET` for `url` and reads the whole response body.
    async fn fetch(&self, url: &Url) -> Result<RawResponse, TransportError>;
}

#[async_trait::async_trait]
impl PhotoTransport for surf::Client {
    async fn fetch(&self, url: &Url) -> Result<RawResponse, TransportError> {
        let mut res = self
            .get(url.as_str())
            .await
            .map_err(|err| err.into_inner())?;
        let status = u16::from(res.status());
        let body = res.body_bytes().await.map_err(|err| err.into_inner())?;

        Ok(RawResponse { status, body })
    }
}
