//! Request content families and their wire-level header values.

use strum::Display;

/// The declared encoding family for a request body.
///
/// Governs both request-body serialization and, by this crate's contract,
/// response-body deserialization: [`end_into`](crate::RequestBuilder::end_into)
/// decodes with XML only when the *request* was XML, and JSON otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ContentType {
    /// `application/json` body, serialized with serde_json.
    Json,
    /// `application/xml` body, serialized with quick-xml.
    Xml,
    /// `text/plain` body, written through without transformation.
    Text,
}

impl ContentType {
    /// The `Content-Type` header value sent for this family.
    pub fn header_value(&self) -> &'static str {
        match self {
            Self::Json => "application/json;charset=utf-8",
            Self::Xml => "application/xml;charset=utf-8",
            Self::Text => "text/plain;charset=utf-8",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_values() {
        assert_eq!(ContentType::Json.header_value(), "application/json;charset=utf-8");
        assert_eq!(ContentType::Xml.header_value(), "application/xml;charset=utf-8");
        assert_eq!(ContentType::Text.header_value(), "text/plain;charset=utf-8");
    }

    #[test]
    fn test_display() {
        assert_eq!(ContentType::Json.to_string(), "json");
        assert_eq!(ContentType::Xml.to_string(), "xml");
        assert_eq!(ContentType::Text.to_string(), "text");
    }
}
