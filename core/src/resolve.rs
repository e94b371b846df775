//! Resolving the request target to the URL the request is sent to.
//!
//! # Design
//! An absolute target (one with a host) is used exactly as written, and so
//! is a scheme-relative `//host/path` target. A bare path is combined with
//! the `Host` header and the configured scheme; the scheme is never inferred
//! from the port. The combined string is validated but not rewritten.
//! Without a `Host` header the path is returned unchanged and the caller's
//! HTTP client decides what to do with a relative URL.

use url::Url;

use crate::error::ParseError;
use crate::http::HeaderMap;
use crate::log::trace;

/// Resolve `target` against `headers`.
pub fn resolve_target(
    target: &str,
    headers: &HeaderMap,
    scheme: &str,
) -> Result<String, ParseError> {
    let path = match Url::parse(target) {
        Ok(url) if url.host().is_some() => {
            trace!("target {target:?} is absolute");
            return Ok(target.to_string());
        }
        Ok(url) => path_and_query(&url),
        Err(url::ParseError::RelativeUrlWithoutBase) if has_authority(target) => {
            validate_scheme_relative(target)?;
            trace!("target {target:?} is scheme-relative");
            return Ok(target.to_string());
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => target.to_string(),
        Err(source) => {
            return Err(ParseError::InvalidTargetUrl {
                target: target.to_string(),
                source,
            })
        }
    };

    let Some(host) = headers.get("host") else {
        trace!("target {target:?} is relative and no host header is set");
        return Ok(target.to_string());
    };

    let slash = if path.starts_with('/') { "" } else { "/" };
    let synthesized = format!("{scheme}://{host}{slash}{path}");
    trace!("resolved {target:?} against host {host:?} as {synthesized:?}");

    // `http:///path` would otherwise parse with `path` as the host.
    if host.is_empty() {
        return Err(ParseError::InvalidTargetUrl {
            target: synthesized,
            source: url::ParseError::EmptyHost,
        });
    }

    match Url::parse(&synthesized) {
        Ok(_) => Ok(synthesized),
        Err(source) => Err(ParseError::InvalidTargetUrl {
            target: synthesized,
            source,
        }),
    }
}

/// Whether `target` is `//authority...` with a non-empty authority.
fn has_authority(target: &str) -> bool {
    target
        .strip_prefix("//")
        .and_then(|rest| rest.split(['/', '?', '#']).next())
        .is_some_and(|authority| !authority.is_empty())
}

/// Check a `//host/path` target by resolving it against a placeholder base.
fn validate_scheme_relative(target: &str) -> Result<(), ParseError> {
    let invalid = |source| ParseError::InvalidTargetUrl {
        target: target.to_string(),
        source,
    };
    let base = Url::parse("http://placeholder.invalid/").map_err(invalid)?;
    let url = base.join(target).map_err(invalid)?;
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(invalid(url::ParseError::EmptyHost)),
    }
}

/// Path plus query of a host-less URL such as `mailto:` or `urn:`.
fn path_and_query(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{query}", url.path()),
        None => url.path().to_string(),
    }
}
