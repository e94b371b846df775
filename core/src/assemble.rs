//! Handing a parsed request to an HTTP client.
//!
//! # Design
//! Clients differ in how requests are built, but most follow the same
//! shape: create a request from method, URL and optional body, then set
//! headers on it one by one. `RequestSink` captures that shape so any client
//! can be driven by `HttpRequest::apply_to`. The `http` crate's
//! `request::Builder` is supported out of the box.

use crate::error::ParseError;
use crate::http::{HttpMethod, HttpRequest};

/// Request-construction entry point of an HTTP client.
pub trait RequestSink {
    type Output;
    type Error;

    /// Create the request. `body` is `None` when the text had no body.
    fn start(
        &mut self,
        method: HttpMethod,
        url: &str,
        body: Option<&[u8]>,
    ) -> Result<(), Self::Error>;

    /// Set one header on the request created by `start`.
    fn set_header(&mut self, name: &str, value: &str) -> Result<(), Self::Error>;

    /// Produce the finished request.
    fn finish(self) -> Result<Self::Output, Self::Error>;
}

impl HttpRequest {
    /// Drive `sink` with this request: `start`, one `set_header` per header
    /// in name order, then `finish`.
    pub fn apply_to<S: RequestSink>(&self, mut sink: S) -> Result<S::Output, S::Error> {
        sink.start(self.method, &self.url, self.body_bytes())?;
        for (name, value) in &self.headers {
            sink.set_header(name, value)?;
        }
        sink.finish()
    }
}

/// Builds an `http::Request` carrying the body as `Option<Vec<u8>>`.
#[derive(Debug, Default)]
pub struct HttpCrateSink {
    builder: Option<http::request::Builder>,
    body: Option<Vec<u8>>,
}

impl RequestSink for HttpCrateSink {
    type Output = http::Request<Option<Vec<u8>>>;
    type Error = ParseError;

    fn start(
        &mut self,
        method: HttpMethod,
        url: &str,
        body: Option<&[u8]>,
    ) -> Result<(), ParseError> {
        self.builder = Some(http::Request::builder().method(method.as_str()).uri(url));
        self.body = body.map(<[u8]>::to_vec);
        Ok(())
    }

    fn set_header(&mut self, name: &str, value: &str) -> Result<(), ParseError> {
        self.builder = self.builder.take().map(|b| b.header(name, value));
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, ParseError> {
        let builder = self.builder.unwrap_or_default();
        Ok(builder.body(self.body)?)
    }
}

impl TryFrom<HttpRequest> for http::Request<Option<Vec<u8>>> {
    type Error = ParseError;

    fn try_from(req: HttpRequest) -> Result<Self, Self::Error> {
        req.apply_to(HttpCrateSink::default())
    }
}
