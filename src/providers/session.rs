//! Shared HTTP session.
//!
//! One pooled `reqwest::Client` per session, created on first use and
//! dropped on [`HttpSession::close`]. A closed session reopens itself the
//! next time a request goes through it, so teardown followed by late
//! requests is harmless.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::StatusCode;
use serde_json::Value;

use super::domain::ProviderError;
use super::traits::{JsonTransport, QueryParams};

/// Total time budget for a single request, connect through body
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// User agent string - MusicBrainz rejects anonymous clients
pub const USER_AGENT: &str = concat!(
    "TuneBot/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/tunebot/tunebot)"
);

/// Settings applied every time the pool is (re)built
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Lazily-initialized, closable HTTP connection pool
pub struct HttpSession {
    config: SessionConfig,
    client: Mutex<Option<reqwest::Client>>,
    generation: AtomicU64,
}

impl HttpSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            client: Mutex::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// Make sure a live client exists and return a handle to it.
    ///
    /// Cheap when the pool is already open: the handle is reference counted.
    pub fn ensure_open(&self) -> Result<reqwest::Client, ProviderError> {
        let mut slot = self.client.lock();
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }

        let client = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .user_agent(self.config.user_agent.as_str())
            .gzip(true)
            // Connections are not kept alive between requests
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ProviderError::ClientBuild(e.to_string()))?;

        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(generation, "Opened HTTP session");

        *slot = Some(client.clone());
        Ok(client)
    }

    /// Drop the pool if it is open. Calling this on a closed session does nothing.
    pub fn close(&self) {
        if self.client.lock().take().is_some() {
            tracing::info!("Closed HTTP session");
        }
    }

    pub fn is_open(&self) -> bool {
        self.client.lock().is_some()
    }

    /// Number of pools allocated over the session's lifetime
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Relaxed)
    }

    async fn try_fetch(&self, url: &str, params: &QueryParams<'_>) -> Result<Value, ProviderError> {
        let client = self.ensure_open()?;

        let response = client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProviderError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(url.to_string())
            } else {
                ProviderError::Parse(e.to_string())
            }
        })
    }
}

impl Default for HttpSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

fn classify(url: &str, err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout(url.to_string())
    } else {
        ProviderError::Network(err.to_string())
    }
}

#[async_trait]
impl JsonTransport for HttpSession {
    async fn fetch_json(&self, url: &str, params: &QueryParams<'_>) -> Option<Value> {
        match self.try_fetch(url, params).await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::error!("{}", e);
                None
            }
        }
    }

    fn close(&self) {
        HttpSession::close(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve `status` and `body` to every connection; returns the base URL
    async fn serve(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let mut request: Vec<u8> = Vec::new();
                    let mut buf = [0u8; 1024];
                    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut buf).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => request.extend_from_slice(&buf[..n]),
                        }
                    }
                    let response = format!(
                        "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
                         Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        format!("http://{}", addr)
    }

    #[test]
    fn test_new_session_is_closed() {
        let session = HttpSession::default();
        assert!(!session.is_open());
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_ensure_open_is_idempotent() {
        let session = HttpSession::default();
        session.ensure_open().unwrap();
        session.ensure_open().unwrap();

        assert!(session.is_open());
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn test_close_twice_is_noop() {
        let session = HttpSession::default();
        session.ensure_open().unwrap();

        session.close();
        session.close();

        assert!(!session.is_open());
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn test_close_without_open_is_noop() {
        let session = HttpSession::default();
        session.close();
        assert!(!session.is_open());
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_reopens_after_close() {
        let session = HttpSession::default();
        session.ensure_open().unwrap();
        session.close();
        session.ensure_open().unwrap();

        assert!(session.is_open());
        assert_eq!(session.generation(), 2);
    }

    #[test]
    fn test_user_agent_format() {
        assert!(USER_AGENT.starts_with("TuneBot/"));
    }

    #[tokio::test]
    async fn test_unreachable_host_yields_none() {
        let session = HttpSession::new(SessionConfig {
            timeout: Duration::from_secs(2),
            ..Default::default()
        });

        // Port 9 (discard) is closed on test machines
        let body = session.fetch_json("http://127.0.0.1:9/nothing", &[]).await;

        assert!(body.is_none());
        // The failed request still opened the pool
        assert_eq!(session.generation(), 1);
    }

    #[tokio::test]
    async fn test_ok_response_is_parsed() {
        let base = serve("200 OK", r#"{"a":1}"#).await;
        let session = HttpSession::default();

        let body = session
            .fetch_json(&format!("{}/chart", base), &[("limit", "1")])
            .await;

        assert_eq!(body, Some(serde_json::json!({"a": 1})));
        assert_eq!(session.generation(), 1);
    }

    #[tokio::test]
    async fn test_non_ok_status_yields_none() {
        let base = serve("404 Not Found", r#"{"error":"missing"}"#).await;
        let session = HttpSession::default();

        assert!(session.fetch_json(&base, &[]).await.is_none());
        assert_eq!(session.generation(), 1);
    }

    #[tokio::test]
    async fn test_undecodable_body_yields_none() {
        let base = serve("200 OK", "not json").await;
        let session = HttpSession::default();

        assert!(session.fetch_json(&base, &[]).await.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_fetches_share_one_pool() {
        let base = serve("200 OK", r#"{"ok":true}"#).await;
        let session = Arc::new(HttpSession::default());

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let session = session.clone();
                let url = base.clone();
                tokio::spawn(async move { session.fetch_json(&url, &[]).await })
            })
            .collect();
        for handle in handles {
            assert!(handle.await.unwrap().is_some());
        }
        assert_eq!(session.generation(), 1);

        session.close();
        assert!(session.fetch_json(&base, &[]).await.is_some());
        assert_eq!(session.generation(), 2);
    }
}
