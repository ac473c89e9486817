//! In-memory vinyl collection: records, CSV parsing, queries and statistics.

mod collection;
mod csv_reader;
mod error;
mod record;
mod source;
mod store;

pub use collection::{
    ArtistCount, Collection, LabelCount, QueryType, RecordFilter, StatsSummary,
};
pub use csv_reader::parse_records;
pub use error::CollectionError;
pub use record::{normalize, parse_year, Record, REQUIRED_FIELDS};
pub use source::{CollectionSource, FileSource, HttpSource, StaticSource};
pub use store::CollectionStore;
