use std::io::{self, Write};
use std::str::FromStr;

use unsplash_feed_api_structs::Photo;

use crate::fetcher;

/// Receives the outcome of a fetch and presents it.
pub trait Reporter {
    fn photos(&mut self, photos: &[Photo]) -> io::Result<()>;
    fn failure(&mut self, error: &fetcher::Error) -> io::Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}

impl OutputFormat {
    pub const VARIANTS: &'static [&'static str] = &["plain", "json"];

    pub fn reporter<'a, W: Write + 'a>(self, out: W) -> Box<dyn Reporter + 'a> {
        match self {
            OutputFormat::Plain => Box::new(PlainReporter::new(out)),
            OutputFormat::Json => Box::new(JsonReporter::new(out)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

/// Writes each photo's id and slug, `nil` standing in for a missing value. Failures only go to the
/// log.
pub struct PlainReporter<W> {
    out: W,
}

impl<W: Write> PlainReporter<W> {
    pub fn new(out: W) -> Self {
        PlainReporter { out }
    }
}

impl<W: Write> Reporter for PlainReporter<W> {
    fn photos(&mut self, photos: &[Photo]) -> io::Result<()> {
        for photo in photos {
            writeln!(self.out, "id: {}", photo.id.as_deref().unwrap_or("nil"))?;
            writeln!(self.out, "slug: {}", photo.slug.as_deref().unwrap_or("nil"))?;
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    fn failure(&mut self, error: &fetcher::Error) -> io::Result<()> {
        tracing::error!(kind = error.kind(), "Fetching photos failed: {}", error_chain(error));
        Ok(())
    }
}

/// Re-encodes the photos as a JSON array; failures become an `{"error", "message"}` object.
pub struct JsonReporter<W> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        JsonReporter { out }
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn photos(&mut self, photos: &[Photo]) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, photos)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    fn failure(&mut self, error: &fetcher::Error) -> io::Result<()> {
        let body = serde_json::json!({
            "error": error.kind(),
            "message": error_chain(error),
        });
        serde_json::to_writer_pretty(&mut self.out, &body)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Joins an error and its sources as `outer: inner: innermost`.
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(err) = source {
        message.push_str(": ");
        message.push_str(&err.to_string());
        source = err.source();
    }
    message
}
