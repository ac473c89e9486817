//! Discogs CSV export parsing.

use super::record::{Record, REQUIRED_FIELDS};
use super::CollectionError;
use std::collections::BTreeMap;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parse a header-row CSV document into records, preserving row order.
///
/// Short rows are padded with empty strings, cells past the header width are
/// dropped.
pub fn parse_records(text: &str) -> Result<Vec<Record>, CollectionError> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();
    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|required| !headers.iter().any(|h| h == required))
        .collect();
    if !missing.is_empty() {
        return Err(CollectionError::Malformed(format!(
            "missing required column(s): {}",
            missing.join(", ")
        )));
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let fields: BTreeMap<String, String> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), row.get(i).unwrap_or("").to_owned()))
            .collect();
        records.push(Record::new(fields));
    }
    Ok(records)
}
