//! Buffered response metadata.
//!
//! The terminal operations consume the transport's response body (decoding
//! it, copying it to a sink, or draining it for connection reuse), so what
//! they hand back is a plain-data snapshot taken before the body was
//! touched: final URL, status code, and headers.

use reqwest::header::HeaderMap;
use url::Url;

/// Metadata of a completed HTTP exchange.
///
/// Returned by every terminal operation, including for non-2xx outcomes —
/// a 404 from the server is a response, not an error. Whether a status
/// warrants an application-level failure is the caller's call.
#[derive(Debug, Clone)]
pub struct Response {
    /// Final URL of the response (after redirects, if any).
    pub url: Url,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Response headers as a case-insensitive map.
    pub headers: HeaderMap,
}

impl Response {
    pub(crate) fn from_reqwest(response: &reqwest::Response) -> Self {
        Self {
            url: response.url().clone(),
            status: response.status().as_u16(),
            headers: response.headers().clone(),
        }
    }

    /// Returns `true` for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success_bounds() {
        let mut response = Response {
            url: Url::parse("http://localhost/").unwrap(),
            status: 200,
            headers: HeaderMap::new(),
        };
        assert!(response.is_success());
        response.status = 299;
        assert!(response.is_success());
        response.status = 301;
        assert!(!response.is_success());
        response.status = 404;
        assert!(!response.is_success());
    }
}
