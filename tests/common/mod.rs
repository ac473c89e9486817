//! Common test infrastructure
//!
//! Spawns the real app on an ephemeral port over a fixture collection and
//! talks to it with a small reqwest client. Tests should only import from
//! this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{TestClient, TestServer};
//!
//! #[tokio::test]
//! async fn test_stats() {
//!     let server = TestServer::spawn().await;
//!     let client = TestClient::new(server.base_url.clone());
//!
//!     let body = client.chat_json("collection stats").await;
//!     assert_eq!(body["toolName"], "stats_summary");
//! }
//! ```

mod client;
mod constants;
mod fixtures;
mod server;

// Public API - this is what tests import
pub use client::TestClient;
pub use constants::*;
pub use server::TestServer;

#[allow(unused_imports)]
pub use fixtures::{write_collection_csv, FIXTURE_CSV};
