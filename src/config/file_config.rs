use super::ConfigError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct FileConfig {
    // Collection source, at most one of the two
    pub collection_path: Option<String>,
    pub collection_url: Option<String>,
    pub fetch_timeout_sec: Option<u64>,
    pub preload: Option<bool>,

    // Server
    pub port: Option<u16>,
    pub logging_level: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        toml::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }

    fn has_source(&self) -> bool {
        self.collection_path.is_some() || self.collection_url.is_some()
    }

    pub(super) fn source_fields(&self) -> Option<(Option<&str>, Option<&str>)> {
        self.has_source().then(|| {
            (
                self.collection_path.as_deref(),
                self.collection_url.as_deref(),
            )
        })
    }
}
