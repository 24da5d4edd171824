//! superagent - Fluent request builder around a shared HTTP transport
//!
//! Chain method, URL, content-type, header, and body declarations onto a
//! [`RequestBuilder`], then execute once with an optional cancellation
//! token and an optional decode destination. The [`Client`] holds the
//! reusable pieces: a pooled `reqwest::Client`, an optional base URL that
//! relative request targets resolve against (RFC 3986), and a verbose
//! flag for diagnostic body logging.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use superagent::Client;
//! use url::Url;
//!
//! #[derive(Default, serde::Deserialize)]
//! struct User { name: String, status: String }
//!
//! let client = Client::builder()
//!     .base_url(Url::parse("https://api.example.com")?)
//!     .build();
//!
//! let mut user = User::default();
//! let response = client
//!     .post("/users")
//!     .json(&serde_json::json!({ "name": "a" }))
//!     .end_into(None, &mut user)
//!     .await?;
//! assert_eq!(response.status, 200);
//! ```
//!
//! Connection pooling, retries, TLS configuration, and timeouts are the
//! transport's (or the caller's) concern: inject a customized
//! `reqwest::Client` via [`ClientBuilder::transport`] and bound request
//! lifetimes with a `CancellationToken` or a transport timeout.

pub mod client;
pub mod content;
pub mod error;
pub mod method;
pub mod response;

pub use client::{verbose_from_env, Client, ClientBuilder, RequestBuilder};
pub use content::ContentType;
pub use error::Error;
pub use method::Method;
pub use response::Response;
