//! HTTP request types produced by the parser.
//!
//! # Design
//! A parsed request is plain data. The core never sends it; the caller hands
//! it to whatever HTTP client it uses, either field by field through
//! [`RequestSink`](crate::assemble::RequestSink) or by converting it into an
//! `http::Request`.
//!
//! All fields use owned types (`String`, `BTreeMap`) so values can cross FFI
//! boundaries without lifetime concerns and outlive the raw text they were
//! parsed from.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Header names (lowercased) mapped to their trimmed values.
///
/// Keys are unique; a later header with the same name replaces the earlier
/// value. `BTreeMap` keeps iteration order stable across runs.
pub type HeaderMap = BTreeMap<String, String>;

/// HTTP method accepted on a request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Connect,
    Head,
    Options,
    Post,
    Get,
    Put,
    Patch,
    Delete,
    Trace,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 9] = [
        HttpMethod::Connect,
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Post,
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Trace,
    ];

    /// The method token exactly as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Connect => "CONNECT",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Post => "POST",
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Trace => "TRACE",
        }
    }

    /// Match a method token. Case-sensitive: `get` is not a method.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == token)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `HttpMethod::from_str` for tokens outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported method: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

/// A request parsed from raw text.
///
/// `body` is `None` when the text had no header/body boundary or nothing
/// after it. A single empty line after the boundary gives `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Look up a header by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The body as raw bytes, if any.
    pub fn body_bytes(&self) -> Option<&[u8]> {
        self.body.as_deref().map(str::as_bytes)
    }

    /// Whether `url` carries a scheme and host, i.e. can be sent as is.
    pub fn has_absolute_url(&self) -> bool {
        url::Url::parse(&self.url).is_ok_and(|u| u.host().is_some())
    }
}
