//! Error types for request construction, dispatch, and response handling.

use thiserror::Error;

use crate::content::ContentType;

/// Errors returned by the terminal operations of a
/// [`RequestBuilder`](crate::RequestBuilder).
///
/// Every failure propagates to the caller; nothing is logged-and-swallowed.
/// No retries happen at this layer — retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// The request body could not be serialized into its declared
    /// content type.
    #[error("failed to encode {content_type} request body: {message}")]
    Encode {
        /// The content family the body was declared as.
        content_type: ContentType,
        /// The serializer's failure message.
        message: String,
    },
    /// The target URL could not be parsed, or could not be resolved
    /// against the client's base URL.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
    /// The target URL is relative but the client has no base URL to
    /// resolve it against.
    #[error("relative URL {url:?} requires a base URL on the client")]
    MissingBaseUrl {
        /// The relative target URL as supplied.
        url: String,
    },
    /// A caller-supplied header has an invalid name or value.
    #[error("invalid header {name:?}: {message}")]
    Header {
        /// The offending header name.
        name: String,
        /// Why it was rejected.
        message: String,
    },
    /// The transport failed during dispatch (network, DNS, TLS). Any URL
    /// embedded in the error has its userinfo stripped before surfacing.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// The caller's cancellation token fired. Takes priority over a
    /// transport error reported for the same dispatch.
    #[error("request cancelled")]
    Cancelled,
    /// The response body could not be parsed as JSON.
    #[error("failed to decode JSON response: {0}")]
    DecodeJson(#[from] serde_json::Error),
    /// The response body could not be parsed as XML.
    #[error("failed to decode XML response: {0}")]
    DecodeXml(#[from] quick_xml::DeError),
    /// The response body could not be read from the transport.
    #[error("failed to read response body: {0}")]
    BodyRead(reqwest::Error),
    /// Copying the response body into the caller's sink failed.
    #[error("failed to write response body to sink: {0}")]
    Sink(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_display_names_content_type() {
        let err = Error::Encode {
            content_type: ContentType::Xml,
            message: "unsupported value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to encode xml request body: unsupported value"
        );
    }

    #[test]
    fn test_missing_base_url_display() {
        let err = Error::MissingBaseUrl {
            url: "/users".to_string(),
        };
        assert!(err.to_string().contains("/users"));
        assert!(err.to_string().contains("base URL"));
    }

    #[test]
    fn test_url_parse_error_converts() {
        let parse_err = url::Url::parse("http://[invalid").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Url(_)));
    }
}
