//! The reusable client and its configuration builder.
//!
//! A [`Client`] holds a shared `reqwest::Client` (the transport), an
//! optional base URL for resolving relative request targets, and a verbose
//! flag controlling diagnostic body logging. Construct one per logical
//! backend and reuse it across many requests; the transport's connection
//! pool is shared and safe for concurrent use.

mod request;

pub use request::RequestBuilder;

use std::env;

use url::Url;

use crate::method::Method;

/// Environment variable consulted by [`verbose_from_env`].
const NET_MODE_VAR: &str = "NET_MODE";

/// Reads the `NET_MODE` environment toggle for verbose body logging.
///
/// Returns `false` only when `NET_MODE` is the literal string `release`;
/// an absent variable or any other value means verbose. The client never
/// reads the environment itself — call this at your composition boundary
/// and pass the result to [`ClientBuilder::verbose`] if you want the
/// toggle wired up.
pub fn verbose_from_env() -> bool {
    !matches!(env::var(NET_MODE_VAR).as_deref(), Ok("release"))
}

/// Builder for configuring a [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    transport: Option<reqwest::Client>,
    base_url: Option<Url>,
    verbose: bool,
}

impl ClientBuilder {
    /// Injects a caller-provided transport.
    ///
    /// Use this to customize timeouts, TLS, or proxies via
    /// `reqwest::Client::builder()`, or to share one transport across
    /// several clients. When unset, a default transport is constructed.
    pub fn transport(mut self, transport: reqwest::Client) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets the base URL that relative request targets resolve against.
    ///
    /// Resolution follows RFC 3986 reference semantics: an absolute
    /// target URL ignores the base entirely. Without a base URL, every
    /// request target must be absolute.
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Enables logging of raw response bodies at debug level during
    /// decoding. Defaults to `false`; see [`verbose_from_env`] for the
    /// conventional environment toggle.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Builds the [`Client`].
    pub fn build(self) -> Client {
        Client {
            transport: self.transport.unwrap_or_default(),
            base_url: self.base_url,
            verbose: self.verbose,
        }
    }
}

/// A reusable handle to one logical HTTP backend.
///
/// Cheap to clone (the transport is internally reference-counted) and safe
/// for concurrent use: any number of request builders may dispatch through
/// the same client simultaneously.
///
/// ## Examples
///
/// ```rust,ignore
/// use superagent::Client;
/// use url::Url;
///
/// #[derive(serde::Serialize)]
/// struct NewUser<'a> { name: &'a str }
///
/// #[derive(Default, serde::Deserialize)]
/// struct Created { name: String, status: String }
///
/// let client = Client::builder()
///     .base_url(Url::parse("https://api.example.com")?)
///     .verbose(superagent::verbose_from_env())
///     .build();
///
/// let mut created = Created::default();
/// let response = client
///     .post("/users")
///     .json(&NewUser { name: "a" })
///     .end_into(None, &mut created)
///     .await?;
/// assert!(response.is_success());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Client {
    transport: reqwest::Client,
    base_url: Option<Url>,
    verbose: bool,
}

impl Client {
    /// Creates a client with a default transport, no base URL, and
    /// verbose logging off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new builder for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &reqwest::Client {
        &self.transport
    }

    /// Returns the configured base URL, if any.
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    pub(crate) fn verbose(&self) -> bool {
        self.verbose
    }

    /// Starts a GET request to `url` (relative or absolute).
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::Get, url.into())
    }

    /// Starts a POST request to `url` (relative or absolute).
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::Post, url.into())
    }

    /// Starts a PUT request to `url` (relative or absolute).
    pub fn put(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::Put, url.into())
    }

    /// Starts a DELETE request to `url` (relative or absolute).
    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::Delete, url.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_base_url_and_is_quiet() {
        let client = Client::new();
        assert!(client.base_url().is_none());
        assert!(!client.verbose());
    }

    #[test]
    fn test_builder_sets_all_fields() {
        let base = Url::parse("https://api.example.com").unwrap();
        let transport = reqwest::Client::new();
        let client = Client::builder()
            .transport(transport)
            .base_url(base.clone())
            .verbose(true)
            .build();
        assert_eq!(client.base_url(), Some(&base));
        assert!(client.verbose());
    }

    #[test]
    fn test_verbose_from_env_modes() {
        // Single test so the env mutations cannot race each other.
        std::env::remove_var(NET_MODE_VAR);
        assert!(verbose_from_env());
        std::env::set_var(NET_MODE_VAR, "debug");
        assert!(verbose_from_env());
        std::env::set_var(NET_MODE_VAR, "release");
        assert!(!verbose_from_env());
        std::env::remove_var(NET_MODE_VAR);
    }

    #[test]
    fn test_method_factories() {
        let client = Client::new();
        assert_eq!(client.get("/a").method(), Method::Get);
        assert_eq!(client.post("/a").method(), Method::Post);
        assert_eq!(client.put("/a").method(), Method::Put);
        assert_eq!(client.delete("/a").method(), Method::Delete);
    }
}
