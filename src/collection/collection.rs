use super::record::{normalize, Record};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

const TOP_ENTRIES_COUNT: usize = 5;

/// Field a `Collection::query` call matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    Artist,
    Title,
    Label,
    Year,
    All,
}

impl QueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Artist => "artist",
            QueryType::Title => "title",
            QueryType::Label => "label",
            QueryType::Year => "year",
            QueryType::All => "all",
        }
    }
}

impl std::fmt::Display for QueryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Optional criteria for `Collection::filter_records`, AND-combined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub artist: Option<String>,
    pub label: Option<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistCount {
    pub artist: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    pub total_records: usize,
    pub unique_artists: usize,
    pub unique_labels: usize,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub top_artists: Vec<ArtistCount>,
    pub top_labels: Vec<LabelCount>,
}

/// The loaded collection. Immutable; a reload builds a new one.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    records: Vec<Record>,
}

impl Collection {
    pub fn new(records: Vec<Record>) -> Collection {
        Collection { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose `query_type` field matches `search_term`, in source order,
    /// at most `limit` of them.
    pub fn query(&self, query_type: QueryType, search_term: &str, limit: usize) -> Vec<&Record> {
        let term = normalize(search_term);
        let year_term = search_term.trim().parse::<i32>().ok();
        // "grimes" also matches the Discogs disambiguation form "Grimes (4)".
        let disambiguated = format!("{} (", term);

        self.records
            .iter()
            .filter(|record| match query_type {
                QueryType::Artist => {
                    let artist = normalize(record.artist());
                    artist.contains(&term) || artist.starts_with(&disambiguated)
                }
                QueryType::Title => normalize(record.title()).contains(&term),
                QueryType::Label => normalize(record.label()).contains(&term),
                QueryType::Year => match (record.year(), year_term) {
                    (Some(year), Some(wanted)) => year == wanted,
                    _ => false,
                },
                QueryType::All => {
                    normalize(record.artist()).contains(&term)
                        || normalize(record.title()).contains(&term)
                        || normalize(record.label()).contains(&term)
                }
            })
            .take(limit)
            .collect()
    }

    /// Records matching every supplied criterion, in source order.
    ///
    /// When either year bound is set, records without a parseable year are
    /// left out. An inverted range matches nothing.
    pub fn filter_records(&self, filter: &RecordFilter, limit: usize) -> Vec<&Record> {
        let artist = filter.artist.as_deref().map(normalize).filter(|s| !s.is_empty());
        let label = filter.label.as_deref().map(normalize).filter(|s| !s.is_empty());
        let checks_year = filter.year_from.is_some() || filter.year_to.is_some();

        self.records
            .iter()
            .filter(|record| {
                if let Some(artist) = &artist {
                    if !normalize(record.artist()).contains(artist.as_str()) {
                        return false;
                    }
                }
                if let Some(label) = &label {
                    if !normalize(record.label()).contains(label.as_str()) {
                        return false;
                    }
                }
                if checks_year {
                    let Some(year) = record.year() else {
                        return false;
                    };
                    if filter.year_from.is_some_and(|from| year < from) {
                        return false;
                    }
                    if filter.year_to.is_some_and(|to| year > to) {
                        return false;
                    }
                }
                true
            })
            .take(limit)
            .collect()
    }

    /// Distinct artist names, sorted, optionally restricted to a prefix.
    pub fn get_artists(&self, starts_with: Option<&str>, limit: usize) -> Vec<String> {
        let prefix = starts_with.map(normalize).filter(|p| !p.is_empty());

        let artists: BTreeSet<&str> = self
            .records
            .iter()
            .map(|record| record.artist().trim())
            .filter(|artist| !artist.is_empty())
            .filter(|artist| match &prefix {
                Some(prefix) => normalize(artist).starts_with(prefix.as_str()),
                None => true,
            })
            .collect();

        artists.into_iter().take(limit).map(str::to_owned).collect()
    }

    pub fn get_stats(&self) -> StatsSummary {
        let mut artists = OccurrenceCounter::default();
        let mut labels = OccurrenceCounter::default();
        let mut year_min: Option<i32> = None;
        let mut year_max: Option<i32> = None;

        for record in &self.records {
            artists.add(record.artist().trim());
            labels.add(record.label().trim());
            if let Some(year) = record.year() {
                year_min = Some(year_min.map_or(year, |min| min.min(year)));
                year_max = Some(year_max.map_or(year, |max| max.max(year)));
            }
        }

        StatsSummary {
            total_records: self.records.len(),
            unique_artists: artists.distinct(),
            unique_labels: labels.distinct(),
            year_min,
            year_max,
            top_artists: artists
                .top(TOP_ENTRIES_COUNT)
                .into_iter()
                .map(|(artist, count)| ArtistCount { artist, count })
                .collect(),
            top_labels: labels
                .top(TOP_ENTRIES_COUNT)
                .into_iter()
                .map(|(label, count)| LabelCount { label, count })
                .collect(),
        }
    }
}

/// Counts non-empty values, remembering the order they were first seen.
#[derive(Default)]
struct OccurrenceCounter {
    positions: HashMap<String, usize>,
    counts: Vec<(String, usize)>,
}

impl OccurrenceCounter {
    fn add(&mut self, value: &str) {
        if value.is_empty() {
            return;
        }
        match self.positions.get(value) {
            Some(&position) => self.counts[position].1 += 1,
            None => {
                self.positions.insert(value.to_owned(), self.counts.len());
                self.counts.push((value.to_owned(), 1));
            }
        }
    }

    fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Highest counts first; the stable sort keeps first-seen order among ties.
    fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut sorted = self.counts.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.truncate(n);
        sorted
    }
}
