//! Stateless parser from raw request text to `HttpRequest`.
//!
//! # Design
//! `RequestParser` holds only its `ParserConfig` and carries no mutable state
//! between calls, so one parser can be shared freely across threads. Each
//! call runs the whole pipeline in a single pass: split lines, match the
//! request line, feed the rest through the header section, then resolve the
//! target URL.

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::headers::HeaderSection;
use crate::http::HttpRequest;
use crate::lines::split_lines;
use crate::request_line::RequestLine;
use crate::resolve::resolve_target;

/// Parses raw HTTP/1.x request text.
#[derive(Debug, Clone, Default)]
pub struct RequestParser {
    config: ParserConfig,
}

impl RequestParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `raw` into a request.
    ///
    /// `raw` is a request line, optionally followed by `name: value` headers,
    /// a blank line and a body. The returned request owns all of its data.
    pub fn parse(&self, raw: &str) -> Result<HttpRequest, ParseError> {
        let mut lines = split_lines(raw);

        let first = lines.next().ok_or(ParseError::EmptyInput)?;
        let request_line = RequestLine::parse(first).ok_or_else(|| ParseError::MalformedRequest {
            line: first.to_string(),
        })?;

        let mut section = HeaderSection::new(self.config.header_policy);
        for (i, line) in lines.enumerate() {
            // Line 1 is the request line.
            section.feed(i + 2, line)?;
        }
        let (headers, body) = section.finish();

        let url = resolve_target(&request_line.target, &headers, &self.config.default_scheme)?;

        Ok(HttpRequest {
            method: request_line.method,
            url,
            headers,
            body,
        })
    }
}

/// Parse `raw` with the default, lenient configuration.
pub fn parse(raw: &str) -> Result<HttpRequest, ParseError> {
    RequestParser::new().parse(raw)
}
