//! Where the collection CSV comes from.

use super::CollectionError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

/// A place the raw collection export can be fetched from.
#[async_trait]
pub trait CollectionSource: Send + Sync {
    /// Human-readable location, used in logs and error messages.
    fn describe(&self) -> String;

    /// Fetch the whole export as text.
    async fn fetch(&self) -> Result<String, CollectionError>;
}

/// Collection export stored on the local filesystem.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> FileSource {
        FileSource { path: path.into() }
    }
}

#[async_trait]
impl CollectionSource for FileSource {
    fn describe(&self) -> String {
        format!("file://{}", self.path.display())
    }

    async fn fetch(&self) -> Result<String, CollectionError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::InvalidData => {
                    CollectionError::Malformed(format!("{}: {}", self.describe(), err))
                }
                _ => CollectionError::Unreachable {
                    source_name: self.describe(),
                    reason: err.to_string(),
                },
            })
    }
}

/// Collection export served over HTTP(S), e.g. a pre-signed bucket URL.
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<HttpSource, CollectionError> {
        let url = url.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| CollectionError::Unreachable {
                source_name: url.clone(),
                reason: format!("could not build HTTP client: {}", err),
            })?;
        Ok(HttpSource { url, client })
    }
}

#[async_trait]
impl CollectionSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String, CollectionError> {
        let unreachable = |err: reqwest::Error| CollectionError::Unreachable {
            source_name: self.describe(),
            reason: err.to_string(),
        };

        self.client
            .get(&self.url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(unreachable)?
            .text()
            .await
            .map_err(unreachable)
    }
}

/// In-memory export, handy for embedding a fixed collection.
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> StaticSource {
        StaticSource { text: text.into() }
    }
}

#[async_trait]
impl CollectionSource for StaticSource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn fetch(&self) -> Result<String, CollectionError> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn file_source_reads_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Artist,Title,Label,Released\n").unwrap();

        let source = FileSource::new(file.path());
        assert_eq!(source.fetch().await.unwrap(), "Artist,Title,Label,Released\n");
        assert!(source.describe().starts_with("file://"));
    }

    #[tokio::test]
    async fn missing_file_is_unreachable() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("nope.csv"));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, CollectionError::Unreachable { .. }));
    }

    #[tokio::test]
    async fn file_with_invalid_utf8_is_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Artist,Title\n\xff\xfe,Visions\n").unwrap();

        let err = FileSource::new(file.path()).fetch().await.unwrap_err();
        assert!(matches!(err, CollectionError::Malformed(_)));
    }

    /// Serves `router` on an ephemeral local port and returns its base URL.
    async fn serve(router: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn http_source_fetches_body() {
        let router = axum::Router::new().route(
            "/discogs.csv",
            axum::routing::get(|| async { "Artist,Title,Label,Released\nGrimes,Visions,4AD,2012\n" }),
        );
        let base_url = serve(router).await;

        let source = HttpSource::new(format!("{}/discogs.csv", base_url), Duration::from_secs(5)).unwrap();
        assert_eq!(
            source.fetch().await.unwrap(),
            "Artist,Title,Label,Released\nGrimes,Visions,4AD,2012\n"
        );
    }

    #[tokio::test]
    async fn http_source_rejects_error_status() {
        let router = axum::Router::new().route(
            "/discogs.csv",
            axum::routing::get(|| async { (axum::http::StatusCode::NOT_FOUND, "gone") }),
        );
        let base_url = serve(router).await;

        let source = HttpSource::new(format!("{}/discogs.csv", base_url), Duration::from_secs(5)).unwrap();
        let err = source.fetch().await.unwrap_err();
        match err {
            CollectionError::Unreachable { source_name, reason } => {
                assert!(source_name.ends_with("/discogs.csv"));
                assert!(reason.contains("404"), "reason {:?}", reason);
            }
            other => panic!("expected Unreachable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn http_source_reports_unreachable_host() {
        let source = HttpSource::new("http://127.0.0.1:9/discogs.csv", Duration::from_secs(2)).unwrap();
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, CollectionError::Unreachable { .. }));
    }
}
