use thiserror::Error;

/// Errors raised while fetching or parsing the collection.
///
/// Both variants are load failures: they are fatal for the invocation that hit
/// them and are reported separately from an empty result set.
#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("Collection source {source_name} is unreachable: {reason}")]
    Unreachable { source_name: String, reason: String },

    #[error("Collection data is malformed: {0}")]
    Malformed(String),
}

impl From<csv::Error> for CollectionError {
    fn from(err: csv::Error) -> Self {
        CollectionError::Malformed(err.to_string())
    }
}
