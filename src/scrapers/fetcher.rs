use crate::config::FetcherConfig;
use crate::error::{Result, ScoutError};
use crate::scrapers::traits::PageFetcher;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::redirect::Policy;
use reqwest::Client;
use tracing::{debug, warn};

/// Plain HTTP fetcher with browser-like headers
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default headers and 30 second timeout
    pub fn new() -> anyhow::Result<Self> {
        Self::with_config(&FetcherConfig::default())
    }

    pub fn with_config(config: &FetcherConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_str(&config.accept).context("Invalid Accept header")?,
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language)
                .context("Invalid Accept-Language header")?,
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .redirect(Policy::limited(config.max_redirects))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScoutError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned status: {}", url, status);
            return Err(ScoutError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let html = response.text().await.map_err(|e| ScoutError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        debug!("Downloaded {} bytes of HTML", html.len());
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer one connection with `status_line` and hand back the raw request
    async fn serve_once(status_line: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response =
                format!("{status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{addr}/search/sss"), handle)
    }

    #[tokio::test]
    async fn non_success_status_maps_to_http_status() {
        let (url, server) = serve_once("HTTP/1.1 404 Not Found").await;
        let fetcher = HttpFetcher::new().unwrap();

        let err = fetcher.fetch(&url).await.unwrap_err();
        match &err {
            ScoutError::HttpStatus {
                url: failed,
                status,
                reason,
            } => {
                assert_eq!(failed, &url);
                assert_eq!(*status, 404);
                assert_eq!(reason, "Not Found");
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
        assert_eq!(err.to_string(), "HTTP error 404: Not Found");

        let request = server.await.unwrap().to_ascii_lowercase();
        let config = FetcherConfig::default();
        assert!(request.contains(&format!(
            "accept-language: {}",
            config.accept_language.to_ascii_lowercase()
        )));
        assert!(request.contains("user-agent: mozilla/5.0"));
    }

    #[tokio::test]
    async fn refused_connection_maps_to_transport() {
        let url = "http://127.0.0.1:1/search/sss";
        let err = HttpFetcher::new().unwrap().fetch(url).await.unwrap_err();

        assert!(matches!(err, ScoutError::Transport { .. }));
        assert_eq!(err.url(), Some(url));
        assert!(err.to_string().starts_with("Request failed: "));
    }
}
