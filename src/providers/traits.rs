//! Transport seam between the provider adapters and the network.
//!
//! Adapters only ever see a [`JsonTransport`]. Production code hands them the
//! shared [`HttpSession`](super::session::HttpSession); tests substitute
//! [`mocks::MockTransport`] so no request leaves the process.
//!
//! # Example
//!
//! ```ignore
//! use tunebot::providers::traits::JsonTransport;
//!
//! async fn first_title<T: JsonTransport + ?Sized>(transport: &T) -> Option<String> {
//!     let body = transport.fetch_json("https://api.example.com/top", &[]).await?;
//!     body["title"].as_str().map(String::from)
//! }
//! ```

use async_trait::async_trait;
use serde_json::Value;

/// Query parameters for a GET request, in the order they should be sent.
pub type QueryParams<'a> = [(&'a str, &'a str)];

/// A source of JSON documents fetched by HTTP GET.
///
/// Implementations must never fail loudly: every problem (transport error,
/// timeout, non-200 status, undecodable body) collapses into `None`.
#[async_trait]
pub trait JsonTransport: Send + Sync {
    /// GET `url` with `params` and return the decoded body on HTTP 200.
    async fn fetch_json(&self, url: &str, params: &QueryParams<'_>) -> Option<Value>;

    /// Release any pooled connections. Further calls may reopen them.
    fn close(&self) {}
}
