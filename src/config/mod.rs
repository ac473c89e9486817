mod file_config;

pub use file_config::FileConfig;

use crate::collection::{CollectionError, CollectionSource, FileSource, HttpSource};
use crate::server::RequestsLoggingLevel;
use clap::ValueEnum;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No collection source configured, use --collection-path or --collection-url")]
    MissingSource,

    #[error("Both a collection path and a collection URL are configured, use only one")]
    ConflictingSources,

    #[error("Failed to read config file {path:?}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Failed to parse config file {path:?}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub collection_path: Option<PathBuf>,
    pub collection_url: Option<String>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub fetch_timeout_sec: u64,
    pub preload: bool,
}

/// Where the collection CSV is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    File(PathBuf),
    Url(String),
}

impl SourceConfig {
    fn from_fields(path: Option<PathBuf>, url: Option<String>) -> Result<Self, ConfigError> {
        let path = path.filter(|p| !p.as_os_str().is_empty());
        let url = url.filter(|u| !u.trim().is_empty());
        match (path, url) {
            (Some(path), None) => Ok(SourceConfig::File(path)),
            (None, Some(url)) => Ok(SourceConfig::Url(url.trim().to_string())),
            (Some(_), Some(_)) => Err(ConfigError::ConflictingSources),
            (None, None) => Err(ConfigError::MissingSource),
        }
    }

    pub fn build(&self, fetch_timeout: Duration) -> Result<Arc<dyn CollectionSource>, CollectionError> {
        Ok(match self {
            SourceConfig::File(path) => Arc::new(FileSource::new(path.clone())),
            SourceConfig::Url(url) => Arc::new(HttpSource::new(url.clone(), fetch_timeout)?),
        })
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub fetch_timeout_sec: u64,
    pub preload: bool,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present. The collection source is
    /// taken as a whole from the file if the file names one.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self, ConfigError> {
        let file = file_config.unwrap_or_default();

        let source = match file.source_fields() {
            Some((path, url)) => {
                SourceConfig::from_fields(path.map(PathBuf::from), url.map(str::to_string))?
            }
            None => SourceConfig::from_fields(cli.collection_path.clone(), cli.collection_url.clone())?,
        };

        let port = file.port.unwrap_or(cli.port);

        let logging_level = match file.logging_level {
            Some(value) => parse_logging_level(&value).ok_or(ConfigError::InvalidValue {
                field: "logging_level",
                value,
            })?,
            None => cli.logging_level.clone(),
        };

        let fetch_timeout_sec = file.fetch_timeout_sec.unwrap_or(cli.fetch_timeout_sec);
        if fetch_timeout_sec == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fetch_timeout_sec",
                value: "0".to_string(),
            });
        }

        let preload = file.preload.unwrap_or(cli.preload);

        Ok(Self {
            source,
            port,
            logging_level,
            fetch_timeout_sec,
            preload,
        })
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_sec)
    }

    pub fn collection_source(&self) -> Result<Arc<dyn CollectionSource>, CollectionError> {
        self.source.build(self.fetch_timeout())
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_with_path() -> CliConfig {
        CliConfig {
            collection_path: Some(PathBuf::from("/data/collection.csv")),
            port: 3001,
            logging_level: RequestsLoggingLevel::Path,
            fetch_timeout_sec: 30,
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_logging_level() {
        assert!(matches!(
            parse_logging_level("none"),
            Some(RequestsLoggingLevel::None)
        ));
        assert!(matches!(
            parse_logging_level("body"),
            Some(RequestsLoggingLevel::Body)
        ));
        assert!(matches!(
            parse_logging_level("HEADERS"),
            Some(RequestsLoggingLevel::Headers)
        ));
        assert!(parse_logging_level("verbose").is_none());
    }

    #[test]
    fn test_resolve_cli_only() {
        let config = AppConfig::resolve(&cli_with_path(), None).unwrap();

        assert_eq!(
            config.source,
            SourceConfig::File(PathBuf::from("/data/collection.csv"))
        );
        assert_eq!(config.port, 3001);
        assert_eq!(config.logging_level, RequestsLoggingLevel::Path);
        assert_eq!(config.fetch_timeout(), Duration::from_secs(30));
        assert!(!config.preload);
    }

    #[test]
    fn test_resolve_toml_overrides_cli() {
        let file_config = FileConfig {
            collection_url: Some("https://example.com/discogs.csv".to_string()),
            port: Some(4000),
            logging_level: Some("headers".to_string()),
            preload: Some(true),
            ..Default::default()
        };

        let config = AppConfig::resolve(&cli_with_path(), Some(file_config)).unwrap();

        // The file's source replaces the CLI path instead of conflicting with it
        assert_eq!(
            config.source,
            SourceConfig::Url("https://example.com/discogs.csv".to_string())
        );
        assert_eq!(config.port, 4000);
        assert_eq!(config.logging_level, RequestsLoggingLevel::Headers);
        assert!(config.preload);
        // CLI value used when TOML doesn't specify
        assert_eq!(config.fetch_timeout_sec, 30);
    }

    #[test]
    fn test_resolve_missing_source_error() {
        let cli = CliConfig {
            fetch_timeout_sec: 30,
            collection_url: Some("  ".to_string()),
            ..Default::default()
        };
        let result = AppConfig::resolve(&cli, None);
        assert!(matches!(result, Err(ConfigError::MissingSource)));
    }

    #[test]
    fn test_resolve_conflicting_sources_error() {
        let cli = CliConfig {
            collection_url: Some("http://localhost/collection.csv".to_string()),
            ..cli_with_path()
        };
        assert!(matches!(
            AppConfig::resolve(&cli, None),
            Err(ConfigError::ConflictingSources)
        ));

        let file_config = FileConfig {
            collection_path: Some("/a.csv".to_string()),
            collection_url: Some("http://localhost/b.csv".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            AppConfig::resolve(&CliConfig::default(), Some(file_config)),
            Err(ConfigError::ConflictingSources)
        ));
    }

    #[test]
    fn test_resolve_invalid_values() {
        let file_config = FileConfig {
            logging_level: Some("loud".to_string()),
            ..Default::default()
        };
        let err = AppConfig::resolve(&cli_with_path(), Some(file_config)).unwrap_err();
        assert!(err.to_string().contains("logging_level"));

        let cli = CliConfig {
            fetch_timeout_sec: 0,
            ..cli_with_path()
        };
        assert!(matches!(
            AppConfig::resolve(&cli, None),
            Err(ConfigError::InvalidValue { field: "fetch_timeout_sec", .. })
        ));
    }

    #[test]
    fn test_collection_source_from_config() {
        let config = AppConfig::resolve(&cli_with_path(), None).unwrap();
        let source = config.collection_source().unwrap();
        assert_eq!(source.describe(), "file:///data/collection.csv");
    }
}
