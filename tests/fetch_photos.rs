//! Drives `PhotoFetcher` through a scripted transport to pin down how each response is
//! classified.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use unsplash_feed::fetcher::{
    Error, FetcherConfig, PhotoFetcher, PhotoTransport, RawResponse, TransportError,
};
use url::Url;

enum Reply {
    Respond(RawResponse),
    RespondAfter(Duration, RawResponse),
    Fail(&'static str),
    Hang,
}

struct ScriptedTransport {
    reply: Reply,
    calls: AtomicUsize,
    urls: Mutex<Vec<Url>>,
}

impl ScriptedTransport {
    fn new(reply: Reply) -> Self {
        ScriptedTransport {
            reply,
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        }
    }

    fn respond(status: u16, body: &str) -> Self {
        ScriptedTransport::new(Reply::Respond(RawResponse {
            status,
            body: body.as_bytes().to_vec(),
        }))
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl PhotoTransport for ScriptedTransport {
    async fn fetch(&self, url: &Url) -> Result<RawResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.clone());

        match &self.reply {
            Reply::Respond(response) => Ok(response.clone()),
            Reply::RespondAfter(delay, response) => {
                async_std::task::sleep(*delay).await;
                Ok(response.clone())
            },
            Reply::Fail(message) => Err((*message).into()),
            Reply::Hang => futures_lite::future::pending().await,
        }
    }
}

fn fetcher(transport: ScriptedTransport) -> PhotoFetcher<ScriptedTransport> {
    PhotoFetcher::with_transport(
        FetcherConfig::new("https://api.unsplash.com/photos/", "test-key"),
        transport,
    )
}

const ONE_PHOTO: &str = r#"[{
    "id": "abc123",
    "slug": "a-photo",
    "liked_by_user": false,
    "urls": {"raw": "https://x/raw.jpg"},
    "breadcrumbs": [],
    "current_user_collections": []
}]"#;

#[async_std::test]
async fn returns_the_decoded_listing() {
    let fetcher = fetcher(ScriptedTransport::respond(200, ONE_PHOTO));

    let photos = fetcher.fetch_photos().await.unwrap();

    assert_eq!(photos.len(), 1);
    let photo = &photos[0];
    assert_eq!(photo.id.as_deref(), Some("abc123"));
    assert_eq!(photo.slug.as_deref(), Some("a-photo"));
    assert!(!photo.liked_by_user);
    assert_eq!(
        photo.urls.as_ref().and_then(|u| u.raw.as_ref()).map(Url::as_str),
        Some("https://x/raw.jpg")
    );
    assert_eq!(photo.alternative_slugs, None);
    assert_eq!(photo.created_at, None);
    assert_eq!(photo.width, None);
    assert_eq!(photo.links, None);
    assert_eq!(photo.likes, None);
    assert_eq!(photo.sponsorship, None);
    assert_eq!(photo.user, None);
}

#[async_std::test]
async fn sends_one_request_with_the_access_key() {
    let fetcher = fetcher(ScriptedTransport::respond(200, "[]"));

    fetcher.fetch_photos().await.unwrap();
    fetcher.fetch_photos().await.unwrap();

    let urls = fetcher.transport().urls.lock().unwrap();
    assert_eq!(urls.len(), 2);
    assert_eq!(
        urls[0].as_str(),
        "https://api.unsplash.com/photos/?client_id=test-key"
    );
}

#[async_std::test]
async fn invalid_endpoint_skips_the_network() {
    let fetcher = PhotoFetcher::with_transport(
        FetcherConfig::new("::not a url::", "test-key"),
        ScriptedTransport::respond(200, ONE_PHOTO),
    );

    let err = fetcher.fetch_photos().await.unwrap_err();

    assert!(matches!(err, Error::InvalidEndpoint { .. }), "{:?}", err);
    assert_eq!(fetcher.transport().calls(), 0);
}

#[async_std::test]
async fn transport_failures_keep_their_cause() {
    let fetcher = fetcher(ScriptedTransport::new(Reply::Fail("connection refused")));

    let err = fetcher.fetch_photos().await.unwrap_err();

    match err {
        Error::Transport(cause) => assert_eq!(cause.to_string(), "connection refused"),
        other => panic!("expected a transport error, got {:?}", other),
    }
}

#[async_std::test]
async fn non_success_status_is_not_decoded() {
    for status in [199, 300, 404, 429, 500].iter() {
        let fetcher = fetcher(ScriptedTransport::respond(*status, "<html>not json</html>"));

        let err = fetcher.fetch_photos().await.unwrap_err();

        assert!(
            matches!(err, Error::UnexpectedStatus(code) if code == *status),
            "{}: {:?}",
            status,
            err
        );
    }
}

#[async_std::test]
async fn any_2xx_status_is_decoded() {
    let fetcher = fetcher(ScriptedTransport::respond(203, ONE_PHOTO));

    assert_eq!(fetcher.fetch_photos().await.unwrap().len(), 1);
}

#[async_std::test]
async fn no_content_is_a_decode_error() {
    let fetcher = fetcher(ScriptedTransport::respond(204, ""));

    let err = fetcher.fetch_photos().await.unwrap_err();

    assert!(matches!(err, Error::Decode(_)), "{:?}", err);
}

#[async_std::test]
async fn bad_date_fails_the_whole_listing() {
    let body = r#"[
        {"id": "first", "liked_by_user": false},
        {"id": "second", "slug": "fine", "liked_by_user": false, "promoted_at": "2015-08-19"}
    ]"#;
    let fetcher = fetcher(ScriptedTransport::respond(200, body));

    let err = fetcher.fetch_photos().await.unwrap_err();

    match err {
        Error::Decode(decode) => assert_eq!(decode.path, "[1].promoted_at"),
        other => panic!("expected a decode error, got {:?}", other),
    }
}

#[async_std::test]
async fn missing_required_boolean_is_a_decode_error() {
    let body = r#"[{"id": "abc123", "user": {"username": "someone", "accepted_tos": true}}]"#;
    let fetcher = fetcher(ScriptedTransport::respond(200, body));

    let err = fetcher.fetch_photos().await.unwrap_err();

    assert!(matches!(err, Error::Decode(_)), "{:?}", err);
}

#[async_std::test]
async fn cancelling_a_hanging_request() {
    let fetcher = fetcher(ScriptedTransport::new(Reply::Hang));

    let err = fetcher
        .fetch_photos_until(async_std::task::sleep(Duration::from_millis(20)))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Cancelled), "{:?}", err);
    assert_eq!(fetcher.transport().calls(), 1);
}

#[async_std::test]
async fn cancellation_wins_over_a_late_response() {
    // The body would fail to decode, so a decode error here would mean the response was used.
    let fetcher = fetcher(ScriptedTransport::new(Reply::RespondAfter(
        Duration::from_millis(500),
        RawResponse {
            status: 200,
            body: b"not json".to_vec(),
        },
    )));

    let err = fetcher
        .fetch_photos_until(async_std::task::sleep(Duration::from_millis(10)))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Cancelled), "{:?}", err);
}

#[async_std::test]
async fn concurrent_fetches_are_independent() {
    let fetcher = fetcher(ScriptedTransport::respond(200, ONE_PHOTO));

    let (first, second) =
        futures_lite::future::zip(fetcher.fetch_photos(), fetcher.fetch_photos()).await;

    assert_eq!(first.unwrap(), second.unwrap());
    assert_eq!(fetcher.transport().calls(), 2);
}
