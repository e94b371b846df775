//! Error types for request parsing.
//!
//! # Design
//! Each failure the parser can hit is its own variant so callers can react
//! to the kind without matching on message text. Nothing here is logged by
//! the parser; every error goes straight back to the caller.

use thiserror::Error;

/// Errors returned by `RequestParser::parse`.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The raw text contained no lines at all.
    #[error("unexpected end of input: no request line")]
    EmptyInput,

    /// The first line is not `METHOD target HTTP/version`.
    #[error("malformed request line: {line:?}")]
    MalformedRequest { line: String },

    /// The target, or the URL built from it and the `Host` header, is not a
    /// valid URL.
    #[error("invalid target URL {target:?}: {source}")]
    InvalidTargetUrl {
        target: String,
        #[source]
        source: url::ParseError,
    },

    /// A non-blank line in the header section is not `name: value`.
    /// Only raised under `HeaderPolicy::Strict`.
    #[error("malformed header on line {line}: {content:?}")]
    MalformedHeader { line: usize, content: String },

    /// The `http` crate rejected the request during conversion.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] http::Error),
}
