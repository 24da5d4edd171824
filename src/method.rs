//! HTTP method types for the request builder.

use strum::{Display, EnumIter, EnumString};

/// HTTP methods the builder can dispatch.
///
/// Only the methods exposed by the [`Client`](crate::Client) factories are
/// represented; there is no way to build a request with anything else.
///
/// ## Examples
///
/// ```rust
/// use superagent::Method;
///
/// let method = Method::Get;
/// assert!(!method.has_body());
///
/// // Parse from string
/// let parsed: Method = "POST".parse().unwrap();
/// assert_eq!(parsed, Method::Post);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    /// HTTP GET - Retrieve a resource.
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
    /// HTTP PUT - Replace a resource entirely.
    Put,
    /// HTTP DELETE - Remove a resource.
    Delete,
}

impl Method {
    /// Returns `true` if this method typically carries a request body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        method.to_reqwest()
    }
}
