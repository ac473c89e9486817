use super::csv_reader::parse_records;
use super::source::CollectionSource;
use super::{Collection, CollectionError};
use std::sync::{Arc, RwLock};
use std::time::Instant;
use tracing::{error, info};

/// Owns the collection source and the currently published `Collection`.
///
/// The collection is fetched at most once unless `reload` is called. Loads are
/// serialized, and a new collection is only published after it parsed
/// successfully, so readers always see a complete record sequence.
pub struct CollectionStore {
    source: Arc<dyn CollectionSource>,
    current: RwLock<Option<Arc<Collection>>>,
    load_lock: tokio::sync::Mutex<()>,
}

impl CollectionStore {
    pub fn new(source: Arc<dyn CollectionSource>) -> CollectionStore {
        CollectionStore {
            source,
            current: RwLock::new(None),
            load_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// The published collection, if one was loaded already.
    pub fn loaded(&self) -> Option<Arc<Collection>> {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded().is_some()
    }

    /// Load the collection unless it is already loaded.
    pub async fn load(&self) -> Result<Arc<Collection>, CollectionError> {
        if let Some(collection) = self.loaded() {
            return Ok(collection);
        }
        let _guard = self.load_lock.lock().await;
        // Another caller may have finished loading while we waited.
        if let Some(collection) = self.loaded() {
            return Ok(collection);
        }
        self.fetch_and_publish().await
    }

    /// Fetch the source again and replace the published collection.
    ///
    /// On failure the previous collection stays in place.
    pub async fn reload(&self) -> Result<Arc<Collection>, CollectionError> {
        let _guard = self.load_lock.lock().await;
        self.fetch_and_publish().await
    }

    /// The collection to query, loading it first if needed.
    pub async fn collection(&self) -> Result<Arc<Collection>, CollectionError> {
        self.load().await
    }

    async fn fetch_and_publish(&self) -> Result<Arc<Collection>, CollectionError> {
        let source_name = self.source.describe();
        info!("Loading collection from {}...", source_name);
        let start = Instant::now();

        let records = match self.source.fetch().await {
            Ok(text) => parse_records(&text),
            Err(err) => Err(err),
        };
        let records = records.map_err(|err| {
            error!("Failed to load collection from {}: {}", source_name, err);
            err
        })?;

        let collection = Arc::new(Collection::new(records));
        match self.current.write() {
            Ok(mut guard) => *guard = Some(collection.clone()),
            Err(poisoned) => *poisoned.into_inner() = Some(collection.clone()),
        }
        info!(
            "Loaded {} records from {} in {}ms",
            collection.len(),
            source_name,
            start.elapsed().as_millis()
        );
        Ok(collection)
    }
}
