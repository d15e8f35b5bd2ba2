//! Example-files service client implementation.

use async_trait::async_trait;
use nimbus_types::{Example, ExampleSource, ExampleVersion, NimbusError, Result};
use reqwest::{header, Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Example client configuration.
#[derive(Debug, Clone)]
pub struct ExampleClientConfig {
    /// Service base URL
    pub url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ExampleClientConfig {
    fn default() -> Self {
        Self {
            url: "https://examples.nimbus.sh/".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for listing and downloading examples.
#[derive(Clone)]
pub struct ExampleClient {
    config: ExampleClientConfig,
    client: Client,
    base_url: Url,
}

impl ExampleClient {
    /// Create a new example client.
    pub fn new(config: ExampleClientConfig) -> Result<Self> {
        let base_url = normalize_base(&config.url)?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("nimbus/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| NimbusError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            client,
            base_url,
        })
    }

    fn list_url(&self) -> Result<Url> {
        self.endpoint("v2/list.json")
    }

    fn download_url(&self, name: &str, version: ExampleVersion) -> Result<Url> {
        self.endpoint(&format!("{}/download/{}.tar.gz", version, name))
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| NimbusError::Bug(format!("Cannot build URL for '{}': {}", path, e)))
    }
}

/// Parse the base URL and make sure relative joins append to its path.
fn normalize_base(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)
        .map_err(|e| NimbusError::Config(format!("Invalid examples URL '{}': {}", raw, e)))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn list_unavailable() -> NimbusError {
    NimbusError::Example("Could not fetch example list.".to_string())
}

#[async_trait]
impl ExampleSource for ExampleClient {
    async fn list(&self) -> Result<Vec<Example>> {
        let url = self.list_url()?;
        debug!("Fetching example list from {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            debug!("Example list request failed: {}", e);
            list_unavailable()
        })?;

        if !response.status().is_success() {
            debug!("Example list request returned {}", response.status());
            return Err(list_unavailable());
        }

        let examples: Vec<Example> = response.json().await.map_err(|e| {
            debug!("Example list is not valid JSON: {}", e);
            list_unavailable()
        })?;

        info!("Fetched {} examples", examples.len());
        Ok(examples)
    }

    async fn download(&self, name: &str, version: ExampleVersion) -> Result<Vec<u8>> {
        let url = self.download_url(name, version)?;
        debug!("Downloading {}", url);

        let response = self.client.get(url).send().await
            .map_err(|e| NimbusError::Network(format!("Failed to download {}: {}", name, e)))?;

        if response.status() != StatusCode::OK {
            debug!("Download of {} returned {}", name, response.status());
            return Err(NimbusError::Example(format!("Could not get {}.tar.gz", name)));
        }

        let bytes = response.bytes().await
            .map_err(|e| NimbusError::Network(format!("Failed to read {}.tar.gz: {}", name, e)))?;

        Ok(bytes.to_vec())
    }

    fn base_url(&self) -> &str {
        &self.config.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn client_for(url: &str) -> ExampleClient {
        ExampleClient::new(ExampleClientConfig {
            url: url.to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    /// Serve a single canned HTTP response and report the request line.
    async fn serve_once(status: &'static str, body: Vec<u8>) -> (String, JoinHandle<String>) {
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

            let head = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                body.len()
            );
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(&body).await.unwrap();
            socket.shutdown().await.unwrap();

            let request = String::from_utf8_lossy(&request).to_string();
            request.lines().next().unwrap_or_default().to_string()
        });

        (format!("http://{}", addr), handle)
    }

    #[test]
    fn test_endpoints() {
        let client = client_for("https://examples.nimbus.sh");
        assert_eq!(
            client.list_url().unwrap().as_str(),
            "https://examples.nimbus.sh/v2/list.json"
        );
        assert_eq!(
            client.download_url("hugo", ExampleVersion::V1).unwrap().as_str(),
            "https://examples.nimbus.sh/v1/download/hugo.tar.gz"
        );
    }

    #[test]
    fn test_base_path_is_kept() {
        let client = client_for("https://mirror.example/files");
        assert_eq!(
            client.download_url("nextjs", ExampleVersion::V2).unwrap().as_str(),
            "https://mirror.example/files/v2/download/nextjs.tar.gz"
        );
        assert_eq!(client.base_url(), "https://mirror.example/files");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = ExampleClient::new(ExampleClientConfig {
            url: "examples".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(NimbusError::Config(_))));
    }

    #[tokio::test]
    async fn test_list_parses_examples() {
        let body = br#"[{"name":"nextjs","visible":true},{"name":"legacy","visible":false}]"#;
        let (url, server) = serve_once("200 OK", body.to_vec()).await;

        let examples = client_for(&url).list().await.unwrap();
        assert_eq!(examples, vec![Example::visible("nextjs"), Example::hidden("legacy")]);
        assert_eq!(server.await.unwrap(), "GET /v2/list.json HTTP/1.1");
    }

    #[tokio::test]
    async fn test_list_failure() {
        let (url, _server) = serve_once("500 Internal Server Error", Vec::new()).await;

        let err = client_for(&url).list().await.unwrap_err();
        assert_eq!(err.to_string(), "Could not fetch example list.");
    }

    #[tokio::test]
    async fn test_list_unreachable_service() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = client_for(&url).list().await.unwrap_err();
        assert!(matches!(err, NimbusError::Example(_)));
        assert_eq!(err.to_string(), "Could not fetch example list.");
    }

    #[tokio::test]
    async fn test_list_invalid_body() {
        let (url, _server) = serve_once("200 OK", b"<html>maintenance</html>".to_vec()).await;

        let err = client_for(&url).list().await.unwrap_err();
        assert!(matches!(err, NimbusError::Example(_)));
        assert_eq!(err.to_string(), "Could not fetch example list.");
    }

    #[tokio::test]
    async fn test_download_returns_body() {
        let (url, server) = serve_once("200 OK", vec![0x1f, 0x8b, 0x08]).await;

        let bytes = client_for(&url).download("hugo", ExampleVersion::V2).await.unwrap();
        assert_eq!(bytes, vec![0x1f, 0x8b, 0x08]);
        assert_eq!(server.await.unwrap(), "GET /v2/download/hugo.tar.gz HTTP/1.1");
    }

    #[tokio::test]
    async fn test_download_missing_example() {
        let (url, _server) = serve_once("404 Not Found", Vec::new()).await;

        let err = client_for(&url).download("nope", ExampleVersion::V2).await.unwrap_err();
        assert_eq!(err.to_string(), "Could not get nope.tar.gz");
    }
}
