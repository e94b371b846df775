//! Parser for hand-written HTTP/1.x requests.
//!
//! # Overview
//! Turns request text such as
//!
//! ```text
//! POST /items HTTP/1.1
//! Host: localhost:3000
//! Content-Type: application/json
//!
//! {"name":"widget"}
//! ```
//!
//! into an `HttpRequest` with an absolute URL, lowercased headers and an
//! optional body. Nothing is sent: the caller executes the request with the
//! HTTP client of its choice (host-does-IO pattern).
//!
//! # Design
//! - `RequestParser` is stateless apart from its `ParserConfig`; parsing is
//!   a pure function of the input text.
//! - The request line and header lines are matched by explicit grammars
//!   (`request_line`, `headers`), not regular expressions.
//! - A bare path target is resolved against the `Host` header (`resolve`).
//! - `assemble` hands the result to a client through `RequestSink` or
//!   converts it into an `http::Request`.
//! - Enabling the `log` feature routes diagnostics through the `log` facade.

mod log;

pub mod assemble;
pub mod config;
pub mod error;
pub mod headers;
pub mod http;
pub mod lines;
pub mod parser;
pub mod request_line;
pub mod resolve;

pub use assemble::{HttpCrateSink, RequestSink};
pub use config::{HeaderPolicy, ParserConfig};
pub use error::ParseError;
pub use self::http::{HeaderMap, HttpMethod, HttpRequest};
pub use parser::{parse, RequestParser};
pub use request_line::RequestLine;
