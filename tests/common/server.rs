//! Test server lifecycle management
//!
//! Each test gets an isolated server reading its own collection file.

use super::constants::*;
use super::fixtures::{write_collection_csv, FIXTURE_CSV};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;
use vinyl_chat_server::collection::{CollectionStore, FileSource};
use vinyl_chat_server::{make_app, ChatService, RequestsLoggingLevel, ServerConfig};

/// Test server instance over a temporary collection file
///
/// When dropped, the server shuts down and the file is removed.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// Store behind the server, for reloads and load checks in tests
    pub store: Arc<CollectionStore>,

    /// Path of the collection file the server reads
    pub collection_path: PathBuf,

    // Private fields - keep resources alive until drop
    _temp_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a server over the fixture collection on a random port
    pub async fn spawn() -> Self {
        Self::spawn_with_csv(FIXTURE_CSV).await
    }

    /// Spawns a server over the given collection text
    ///
    /// # Panics
    ///
    /// Panics if the collection file cannot be written, the port cannot be
    /// bound or the server doesn't become ready in time.
    pub async fn spawn_with_csv(csv: &str) -> Self {
        let (temp_dir, collection_path) =
            write_collection_csv(csv).expect("Failed to write collection file");

        let store = Arc::new(CollectionStore::new(Arc::new(FileSource::new(
            collection_path.clone(),
        ))));
        let chat_service = Arc::new(ChatService::new(store.clone()));

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
        };
        let app = make_app(config, chat_service);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            store,
            collection_path,
            _temp_dir: temp_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Overwrites the collection file; the server only sees it after a reload
    pub fn rewrite_collection(&self, csv: &str) {
        std::fs::write(&self.collection_path, csv).expect("Failed to rewrite collection file");
    }

    /// Waits for the server to become ready by polling /health
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/health", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
