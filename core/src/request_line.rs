//! Matching the request line: `METHOD SP target SP HTTP/version`.

use crate::http::HttpMethod;

const VERSION_PREFIX: &str = "HTTP/";

/// The first line of a request, split into its three parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: HttpMethod,
    pub target: String,
    /// The version token after `HTTP/`, e.g. `1.1`.
    pub version: String,
}

impl RequestLine {
    /// Match `line` against the request-line grammar.
    ///
    /// The whole line must match. The method is split off at the first space
    /// and the version at the last, so the target is everything in between
    /// and may itself contain spaces.
    pub fn parse(line: &str) -> Option<Self> {
        let (method, rest) = line.split_once(' ')?;
        let method = HttpMethod::from_token(method)?;

        let (target, version) = rest.rsplit_once(' ')?;
        if target.is_empty() {
            return None;
        }

        let version = version.strip_prefix(VERSION_PREFIX)?;
        if version.is_empty() || version.chars().any(char::is_whitespace) {
            return None;
        }

        Some(Self {
            method,
            target: target.to_string(),
            version: version.to_string(),
        })
    }
}
