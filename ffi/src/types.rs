//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of collections,
//! and enums with explicit discriminants. Conversion functions live here to
//! keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use reqtext_core::{HttpMethod, HttpRequest, ParseError};

/// Opaque handle to a `RequestParser`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiRequestParser {
    pub(crate) inner: reqtext_core::RequestParser,
}

/// Copy `s` into a heap-allocated C string. Interior NULs cannot come from
/// C input, so they only truncate to an empty string.
pub(crate) fn to_c_string(s: impl Into<Vec<u8>>) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiHttpMethod {
    Connect = 0,
    Head = 1,
    Options = 2,
    Post = 3,
    Get = 4,
    Put = 5,
    Patch = 6,
    Delete = 7,
    Trace = 8,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Connect => FfiHttpMethod::Connect,
            HttpMethod::Head => FfiHttpMethod::Head,
            HttpMethod::Options => FfiHttpMethod::Options,
            HttpMethod::Post => FfiHttpMethod::Post,
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Put => FfiHttpMethod::Put,
            HttpMethod::Patch => FfiHttpMethod::Patch,
            HttpMethod::Delete => FfiHttpMethod::Delete,
            HttpMethod::Trace => FfiHttpMethod::Trace,
        }
    }
}

/// A single header as a key-value pair of C strings. Keys are lowercase.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// A parsed request described as C-compatible plain data.
///
/// `body` is null when the text had no body; an empty body is a non-null
/// empty string. `headers` is null when `headers_len` is 0.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub method_name: *mut c_char,
    pub url: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
    pub body_len: u32,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: HttpRequest) -> *mut Self {
        let url = to_c_string(req.url);
        let (body, body_len) = match req.body {
            Some(b) => {
                let len = b.len() as u32;
                (to_c_string(b), len)
            }
            None => (std::ptr::null_mut(), 0),
        };

        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_headers: Box<[FfiHeader]> = req
                .headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: to_c_string(k),
                    value: to_c_string(v),
                })
                .collect();
            Box::into_raw(ffi_headers) as *mut FfiHeader
        };

        let ffi_req = Box::new(FfiHttpRequest {
            method: req.method.into(),
            method_name: to_c_string(req.method.as_str()),
            url,
            headers,
            headers_len,
            body,
            body_len,
        });
        Box::into_raw(ffi_req)
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiParseResult`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    EmptyInput = 1,
    MalformedRequest = 2,
    InvalidTargetUrl = 3,
    MalformedHeader = 4,
    /// Reserved: only the `http::Request` conversion in the core raises
    /// this, and `reqtext_parse` never performs that conversion.
    InvalidRequest = 5,
    Panic = 6,
    NullArg = 7,
    InvalidUtf8 = 8,
}

/// Result envelope for `reqtext_parse`.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `request`
/// points to the parsed request.
/// On failure `error_code` describes the category, `error_message` is a
/// human-readable C string, and `request` is null. `error_line` is the
/// 1-based line of a `MalformedHeader`, 0 otherwise.
#[repr(C)]
pub struct FfiParseResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub error_line: u32,
    pub request: *mut FfiHttpRequest,
}

impl FfiParseResult {
    /// Build a success result carrying a request.
    pub(crate) fn ok(req: HttpRequest) -> *mut Self {
        let result = Box::new(FfiParseResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            error_line: 0,
            request: FfiHttpRequest::from_core(req),
        });
        Box::into_raw(result)
    }

    /// Build an error result from a `ParseError`.
    pub(crate) fn from_error(err: ParseError) -> *mut Self {
        let (error_code, error_line) = match &err {
            ParseError::EmptyInput => (FfiErrorCode::EmptyInput, 0),
            ParseError::MalformedRequest { .. } => (FfiErrorCode::MalformedRequest, 0),
            ParseError::InvalidTargetUrl { .. } => (FfiErrorCode::InvalidTargetUrl, 0),
            ParseError::MalformedHeader { line, .. } => {
                (FfiErrorCode::MalformedHeader, *line as u32)
            }
            ParseError::InvalidRequest(_) => (FfiErrorCode::InvalidRequest, 0),
        };
        Self::error(error_code, error_line, &err.to_string())
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::error(FfiErrorCode::NullArg, 0, &format!("null argument: {name}"))
    }

    /// Build an error result for input that is not UTF-8.
    pub(crate) fn invalid_utf8(name: &str) -> *mut Self {
        Self::error(FfiErrorCode::InvalidUtf8, 0, &format!("argument is not UTF-8: {name}"))
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::error(FfiErrorCode::Panic, 0, msg)
    }

    fn error(error_code: FfiErrorCode, error_line: u32, msg: &str) -> *mut Self {
        let result = Box::new(FfiParseResult {
            error_code,
            error_message: to_c_string(msg),
            error_line,
            request: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }
}
