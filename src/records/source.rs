/// Where record files come from
///
/// The loader only ever asks for a file name relative to the records root
/// (`index.json`, `2025-08.json`, ...). Sources map that name to a URL or a path.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::config::RECORDS_PREFIX;
use crate::error::{GalleryError, GalleryResult};

#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Human readable location, used in logs and the status line
    fn describe(&self) -> String;

    /// Fetch the raw text of a record file
    async fn fetch_text(&self, name: &str) -> GalleryResult<String>;
}

/// Records served over HTTP under `<base_url>/records/`
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Full URL of a record file
    pub fn url_for(&self, name: &str) -> String {
        format!("{}/{}/{}", self.base_url, RECORDS_PREFIX, name)
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    fn describe(&self) -> String {
        format!("{}/{}/", self.base_url, RECORDS_PREFIX)
    }

    async fn fetch_text(&self, name: &str) -> GalleryResult<String> {
        let url = self.url_for(name);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| GalleryError::Network { url: url.clone(), source })?;

        if !response.status().is_success() {
            return Err(GalleryError::Status {
                url,
                status: response.status().as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| GalleryError::Network { url, source })
    }
}

/// Records read from a local directory (a checkout of the records folder)
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl RecordSource for DirSource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    async fn fetch_text(&self, name: &str) -> GalleryResult<String> {
        let path = self.root.join(name);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| GalleryError::Io { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response on a local port
    async fn serve_once(response: &'static str) -> (String, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await.unwrap();
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        (format!("http://{}", addr), server)
    }

    fn local_client() -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().unwrap()
    }

    #[test]
    fn test_url_for_trims_trailing_slash() {
        let source = HttpSource::new(reqwest::Client::new(), "http://127.0.0.1:8080/");
        assert_eq!(source.url_for("index.json"), "http://127.0.0.1:8080/records/index.json");
        assert_eq!(source.describe(), "http://127.0.0.1:8080/records/");
    }

    #[tokio::test]
    async fn test_dir_source_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.json"), r#"["2025-08.json"]"#).unwrap();

        let source = DirSource::new(dir.path());
        let text = source.fetch_text("index.json").await.unwrap();
        assert_eq!(text, r#"["2025-08.json"]"#);
    }

    #[tokio::test]
    async fn test_dir_source_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirSource::new(dir.path());

        let result = source.fetch_text("missing.json").await;
        assert!(matches!(result, Err(GalleryError::Io { .. })));
    }

    #[tokio::test]
    async fn test_http_error_status_maps_to_status_error() {
        let (base_url, server) =
            serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n").await;
        let source = HttpSource::new(local_client(), base_url.as_str());

        let err = source.fetch_text("index.json").await.unwrap_err();
        match &err {
            GalleryError::Status { url, status } => {
                assert_eq!(*status, 404);
                assert_eq!(url, &format!("{}/records/index.json", base_url));
            }
            other => panic!("expected a status error, got {:?}", other),
        }
        assert_eq!(err.to_string(), format!("{}/records/index.json returned HTTP 404", base_url));

        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_http_success_returns_body() {
        let (base_url, server) =
            serve_once("HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\n[]").await;
        let source = HttpSource::new(local_client(), base_url.as_str());

        assert_eq!(source.fetch_text("index.json").await.unwrap(), "[]");
        server.await.unwrap();
    }
}
