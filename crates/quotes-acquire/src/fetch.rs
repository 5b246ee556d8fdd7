use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use std::future::Future;
use url::Url;

/// Something that can return the raw bytes of a page.
///
/// The paginator only talks to this trait, so a crawl can run against the
/// live site ([`HttpFetcher`]) or an in-memory set of pages.
pub trait PageSource {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<Vec<u8>, ScrapeError>> + Send;
}

/// Single-GET HTTP fetcher. No retries: one failure fails the page.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &ScrapeConfig) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self { client })
    }

    /// Wrap an already-configured client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, ScrapeError> {
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ScrapeError::fetch(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::fetch(url.as_str(), format!("HTTP {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ScrapeError::fetch(url.as_str(), format!("failed to read response body: {e}")))?;

        tracing::debug!(url = %url, bytes = body.len(), "Received page");
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned HTTP response on a loopback port; returns its base URL.
    fn serve_once(response: &'static str) -> (Url, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request);
            stream.write_all(response.as_bytes()).unwrap();
        });
        (Url::parse(&format!("http://{addr}/")).unwrap(), handle)
    }

    fn fetcher() -> HttpFetcher {
        // Loopback must not be routed through a proxy from the environment.
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpFetcher::from_client(client)
    }

    #[tokio::test]
    async fn test_success_returns_body_bytes() {
        let (base, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 13\r\nConnection: close\r\n\r\n<p>quotes</p>",
        );
        let url = base.join("/page/1/").unwrap();

        let body = fetcher().fetch(&url).await.unwrap();
        server.join().unwrap();
        assert_eq!(body, b"<p>quotes</p>");
    }

    #[tokio::test]
    async fn test_non_success_status_is_fetch_error() {
        let (base, server) = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        let url = base.join("/page/1/").unwrap();

        let err = fetcher().fetch(&url).await.unwrap_err();
        server.join().unwrap();
        match err {
            ScrapeError::Fetch { url: failed, reason } => {
                assert_eq!(failed, url.as_str());
                assert!(reason.contains("503"), "{reason}");
            }
            other => panic!("expected fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_fetch_error() {
        // Bind then drop to get a port nothing listens on.
        let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let url = Url::parse(&format!("http://127.0.0.1:{port}/page/1/")).unwrap();

        let err = fetcher().fetch(&url).await.unwrap_err();
        assert!(matches!(err, ScrapeError::Fetch { .. }), "{err:?}");
    }

    #[test]
    fn test_default_config_builds() {
        assert!(HttpFetcher::new(&ScrapeConfig::new(DEFAULT_BASE_URL).unwrap()).is_ok());
    }

    #[test]
    fn test_bad_user_agent_is_client_error() {
        let mut config = ScrapeConfig::new(DEFAULT_BASE_URL).unwrap();
        config.user_agent = "quotes\nbroken".to_string();

        let err = HttpFetcher::new(&config).unwrap_err();
        assert!(matches!(err, ScrapeError::Client(_)), "{err:?}");
    }
}
