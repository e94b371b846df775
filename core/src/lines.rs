//! Splitting raw request text into lines.

/// Lazy, restartable iterator over the lines of a request.
pub type Lines<'a> = std::str::Lines<'a>;

/// Split `raw` on `\n` or `\r\n`, keeping empty lines.
///
/// A single trailing terminator does not produce an extra empty line, so
/// `"GET / HTTP/1.1\n"` and `"GET / HTTP/1.1"` split the same way. Empty
/// input yields no lines.
pub fn split_lines(raw: &str) -> Lines<'_> {
    raw.lines()
}
