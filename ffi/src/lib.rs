//! C-ABI wrapper around `reqtext-core`.
//!
//! # Overview
//! Exposes request parsing through `extern "C"` functions so any language
//! with a C FFI can turn request text into method, URL, headers and body,
//! then send it with its own HTTP client.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - A parser handle carries the configuration; `reqtext_parse` mirrors
//!   `RequestParser::parse` 1:1.
//! - A single `FfiParseResult` envelope conveys the parsed request or the
//!   error kind and message.
//! - The C caller owns all returned pointers and must call the matching
//!   `reqtext_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use reqtext_core::{HeaderPolicy, ParserConfig, RequestParser};

use types::*;

// ---------------------------------------------------------------------------
// Parser lifecycle
// ---------------------------------------------------------------------------

/// Create a new parser.
///
/// `strict` rejects unrecognised lines in the header section instead of
/// dropping them. `scheme` is used when the URL is built from a path and the
/// `Host` header; null keeps the default `http`.
/// Returns null if `scheme` is not UTF-8 or if an internal panic occurs.
/// The caller must free the returned pointer with `reqtext_parser_free`.
#[unsafe(no_mangle)]
pub extern "C" fn reqtext_parser_new(strict: bool, scheme: *const c_char) -> *mut FfiRequestParser {
    catch_unwind(|| {
        let mut config = ParserConfig::default();
        if strict {
            config.header_policy = HeaderPolicy::Strict;
        }
        if !scheme.is_null() {
            match unsafe { CStr::from_ptr(scheme) }.to_str() {
                Ok(s) => config.default_scheme = s.to_string(),
                Err(_) => return std::ptr::null_mut(),
            }
        }
        let parser = RequestParser::with_config(config);
        Box::into_raw(Box::new(FfiRequestParser { inner: parser }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a parser created by `reqtext_parser_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn reqtext_parser_free(parser: *mut FfiRequestParser) {
    if !parser.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(parser) });
        });
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse NUL-terminated request text.
///
/// Always returns a result; check `error_code` before reading `request`.
/// The caller must free the returned pointer with `reqtext_free_result`.
#[unsafe(no_mangle)]
pub extern "C" fn reqtext_parse(
    parser: *const FfiRequestParser,
    raw: *const c_char,
) -> *mut FfiParseResult {
    catch_unwind(|| {
        if parser.is_null() {
            return FfiParseResult::null_arg("parser");
        }
        if raw.is_null() {
            return FfiParseResult::null_arg("raw");
        }
        let parser = unsafe { &*parser };
        let raw = match unsafe { CStr::from_ptr(raw) }.to_str() {
            Ok(s) => s,
            Err(_) => return FfiParseResult::invalid_utf8("raw"),
        };
        match parser.inner.parse(raw) {
            Ok(req) => FfiParseResult::ok(req),
            Err(e) => FfiParseResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiParseResult::panic("panic in reqtext_parse"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiParseResult` returned by `reqtext_parse`, including the
/// request it carries. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn reqtext_free_result(result: *mut FfiParseResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
        if !result.request.is_null() {
            free_request(unsafe { Box::from_raw(result.request) });
        }
    });
}

/// Free the fields of an `FfiHttpRequest` and the struct itself.
fn free_request(req: Box<FfiHttpRequest>) {
    free_c_string(req.method_name);
    free_c_string(req.url);
    free_c_string(req.body);
    if !req.headers.is_null() && req.headers_len > 0 {
        let slice = std::ptr::slice_from_raw_parts_mut(req.headers, req.headers_len as usize);
        let headers = unsafe { Box::from_raw(slice) };
        for h in headers.iter() {
            free_c_string(h.key);
            free_c_string(h.value);
        }
    }
}

fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn reqtext_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| free_c_string(s));
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn c_str<'a>(ptr: *const c_char) -> &'a str {
        unsafe { CStr::from_ptr(ptr) }.to_str().unwrap()
    }

    fn parse_with(parser: *const FfiRequestParser, raw: &str) -> *mut FfiParseResult {
        let raw = CString::new(raw).unwrap();
        reqtext_parse(parser, raw.as_ptr())
    }

    #[test]
    fn parser_new_and_free() {
        let parser = reqtext_parser_new(false, std::ptr::null());
        assert!(!parser.is_null());
        reqtext_parser_free(parser);
    }

    #[test]
    fn parser_free_null_is_safe() {
        reqtext_parser_free(std::ptr::null_mut());
    }

    #[test]
    fn parser_new_invalid_utf8_scheme_returns_null() {
        let scheme = CString::new(vec![0xffu8, 0xfe]).unwrap();
        let parser = reqtext_parser_new(false, scheme.as_ptr());
        assert!(parser.is_null());
    }

    #[test]
    fn parse_get_with_host_header() {
        let parser = reqtext_parser_new(false, std::ptr::null());
        let result = parse_with(parser, "GET /path HTTP/1.0\nHost: localhost:1234");
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);
        assert!(r.error_message.is_null());
        assert!(!r.request.is_null());

        let req = unsafe { &*r.request };
        assert_eq!(req.method, FfiHttpMethod::Get);
        assert_eq!(c_str(req.method_name), "GET");
        assert_eq!(c_str(req.url), "http://localhost:1234/path");
        assert!(req.body.is_null());
        assert_eq!(req.body_len, 0);
        assert_eq!(req.headers_len, 1);

        let headers = unsafe { std::slice::from_raw_parts(req.headers, req.headers_len as usize) };
        assert_eq!(c_str(headers[0].key), "host");
        assert_eq!(c_str(headers[0].value), "localhost:1234");

        reqtext_free_result(result);
        reqtext_parser_free(parser);
    }

    #[test]
    fn parse_post_with_body() {
        let parser = reqtext_parser_new(false, std::ptr::null());
        let result = parse_with(
            parser,
            "POST https://localhost:1234/path HTTP/1.0\n\
             Content-Type: application/json\n\n{\"key\":\"value\"}",
        );
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);

        let req = unsafe { &*r.request };
        assert_eq!(req.method, FfiHttpMethod::Post);
        assert_eq!(c_str(req.url), "https://localhost:1234/path");
        assert_eq!(c_str(req.body), r#"{"key":"value"}"#);
        assert_eq!(req.body_len, 15);

        reqtext_free_result(result);
        reqtext_parser_free(parser);
    }

    #[test]
    fn parse_without_headers_has_null_header_array() {
        let parser = reqtext_parser_new(false, std::ptr::null());
        let result = parse_with(parser, "TRACE http://h/ HTTP/1.1");
        let req = unsafe { &*(*result).request };
        assert_eq!(req.method, FfiHttpMethod::Trace);
        assert!(req.headers.is_null());
        assert_eq!(req.headers_len, 0);

        reqtext_free_result(result);
        reqtext_parser_free(parser);
    }

    #[test]
    fn custom_scheme_is_used() {
        let scheme = CString::new("https").unwrap();
        let parser = reqtext_parser_new(false, scheme.as_ptr());
        let result = parse_with(parser, "GET /x HTTP/1.1\nHost: h");
        let req = unsafe { &*(*result).request };
        assert_eq!(c_str(req.url), "https://h/x");

        reqtext_free_result(result);
        reqtext_parser_free(parser);
    }

    #[test]
    fn empty_input_is_reported() {
        let parser = reqtext_parser_new(false, std::ptr::null());
        let result = parse_with(parser, "");
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::EmptyInput);
        assert!(!r.error_message.is_null());
        assert!(r.request.is_null());

        reqtext_free_result(result);
        reqtext_parser_free(parser);
    }

    #[test]
    fn malformed_request_line_is_reported() {
        let parser = reqtext_parser_new(false, std::ptr::null());
        let result = parse_with(parser, "get /x HTTP/1.1");
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::MalformedRequest);
        assert!(c_str(r.error_message).contains("get /x HTTP/1.1"));

        reqtext_free_result(result);
        reqtext_parser_free(parser);
    }

    #[test]
    fn invalid_target_is_reported() {
        let parser = reqtext_parser_new(false, std::ptr::null());
        let result = parse_with(parser, "GET http://[::1/x HTTP/1.1");
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::InvalidTargetUrl);

        reqtext_free_result(result);
        reqtext_parser_free(parser);
    }

    #[test]
    fn strict_parser_reports_header_line() {
        let parser = reqtext_parser_new(true, std::ptr::null());
        let result = parse_with(parser, "GET /x HTTP/1.1\nHost: h\nbogus");
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::MalformedHeader);
        assert_eq!(r.error_line, 3);

        reqtext_free_result(result);
        reqtext_parser_free(parser);
    }

    #[test]
    fn lenient_parser_accepts_same_input() {
        let parser = reqtext_parser_new(false, std::ptr::null());
        let result = parse_with(parser, "GET /x HTTP/1.1\nHost: h\nbogus");
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);

        reqtext_free_result(result);
        reqtext_parser_free(parser);
    }

    #[test]
    fn parse_null_parser_returns_null_arg() {
        let raw = CString::new("GET /x HTTP/1.1").unwrap();
        let result = reqtext_parse(std::ptr::null(), raw.as_ptr());
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::NullArg);
        assert_eq!(c_str(r.error_message), "null argument: parser");

        reqtext_free_result(result);
    }

    #[test]
    fn parse_null_raw_returns_null_arg() {
        let parser = reqtext_parser_new(false, std::ptr::null());
        let result = reqtext_parse(parser, std::ptr::null());
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::NullArg);

        reqtext_free_result(result);
        reqtext_parser_free(parser);
    }

    #[test]
    fn parse_invalid_utf8_is_reported() {
        let parser = reqtext_parser_new(false, std::ptr::null());
        let raw = CString::new(vec![b'G', b'E', b'T', b' ', 0xff]).unwrap();
        let result = reqtext_parse(parser, raw.as_ptr());
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::InvalidUtf8);

        reqtext_free_result(result);
        reqtext_parser_free(parser);
    }

    #[test]
    fn free_result_null_is_safe() {
        reqtext_free_result(std::ptr::null_mut());
    }

    #[test]
    fn free_string_null_is_safe() {
        reqtext_free_string(std::ptr::null_mut());
    }
}
