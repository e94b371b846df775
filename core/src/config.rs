//! Parser configuration.
//!
//! # Design
//! The defaults reproduce the lenient behaviour: unrecognised lines in the
//! header section are dropped, and a bare path is resolved against `Host`
//! with the `http` scheme. Both are plain data so host applications can load
//! them from JSON alongside their own settings.

use serde::{Deserialize, Serialize};

/// What to do with a non-blank line in the header section that is not
/// `name: value`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderPolicy {
    /// Drop the line and keep reading headers.
    #[default]
    Lenient,
    /// Fail with `ParseError::MalformedHeader`.
    Strict,
}

/// Settings for `RequestParser`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub header_policy: HeaderPolicy,
    /// Scheme used when the URL is built from a path and the `Host` header.
    pub default_scheme: String,
}

impl ParserConfig {
    pub fn strict() -> Self {
        Self {
            header_policy: HeaderPolicy::Strict,
            ..Self::default()
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            header_policy: HeaderPolicy::Lenient,
            default_scheme: "http".to_string(),
        }
    }
}
