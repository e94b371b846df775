//! Header section and body collection.
//!
//! # Design
//! Lines after the request line go through a two-state machine. While in
//! `InHeaders`, `name: value` lines are recorded and the first exactly-empty
//! line switches to `InBody`. Every later line belongs to the body verbatim,
//! even if it looks like a header.
//!
//! A non-blank line that is not a header while still in `InHeaders` is
//! dropped under `HeaderPolicy::Lenient` and rejected under
//! `HeaderPolicy::Strict`.

use crate::config::HeaderPolicy;
use crate::error::ParseError;
use crate::http::HeaderMap;
use crate::log::debug;

/// Split a header line at its first colon.
///
/// Returns the lowercased, trimmed name and the trimmed value. The name must
/// be non-empty and the value must have at least one character before
/// trimming; further colons stay in the value.
pub fn match_header(line: &str) -> Option<(String, &str)> {
    let (name, value) = line.split_once(':')?;
    if name.is_empty() || value.is_empty() {
        return None;
    }
    Some((name.trim().to_lowercase(), value.trim()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    InHeaders,
    InBody,
}

/// Accumulates headers and body lines, one line at a time.
#[derive(Debug)]
pub struct HeaderSection<'a> {
    policy: HeaderPolicy,
    state: State,
    headers: HeaderMap,
    body_lines: Vec<&'a str>,
}

impl<'a> HeaderSection<'a> {
    pub fn new(policy: HeaderPolicy) -> Self {
        Self {
            policy,
            state: State::InHeaders,
            headers: HeaderMap::new(),
            body_lines: Vec::new(),
        }
    }

    /// Whether the header/body boundary has been seen.
    pub fn in_body(&self) -> bool {
        self.state == State::InBody
    }

    /// Consume the next line. `number` is its 1-based position in the raw
    /// text and is only used for error reporting.
    pub fn feed(&mut self, number: usize, line: &'a str) -> Result<(), ParseError> {
        if self.state == State::InBody {
            self.body_lines.push(line);
            return Ok(());
        }

        if let Some((name, value)) = match_header(line) {
            self.headers.insert(name, value.to_string());
        } else if line.is_empty() {
            self.state = State::InBody;
        } else {
            match self.policy {
                HeaderPolicy::Lenient => {
                    debug!("dropping unrecognised header line {number}: {line:?}");
                }
                HeaderPolicy::Strict => {
                    return Err(ParseError::MalformedHeader {
                        line: number,
                        content: line.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Finish the section, returning the headers and the joined body.
    pub fn finish(self) -> (HeaderMap, Option<String>) {
        (self.headers, collect_body(&self.body_lines))
    }
}

/// Join body lines with `\n`. No lines means no body.
pub fn collect_body(lines: &[&str]) -> Option<String> {
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
