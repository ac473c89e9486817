use crate::collection::QueryType;
use serde::{Deserialize, Serialize};

/// What a message is asking for. Declaration order is routing precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// "between 2010 and 2020", "2010-2015"
    YearRange,
    /// "how many records", "collection stats"
    Stats,
    /// "list artists", "who's in my collection"
    ListArtists,
    /// "records from 2016", "2020 releases"
    Year,
    /// "what do i have by Grimes", "show me Girl Talk"
    Artist,
    /// "anything on 4AD", "4AD releases"
    Label,
    /// "search for electronic", "find jazz"
    SearchAll,
    Unknown,
}

impl Intent {
    /// Every intent, in precedence order.
    pub const ALL: [Intent; 8] = [
        Intent::YearRange,
        Intent::Stats,
        Intent::ListArtists,
        Intent::Year,
        Intent::Artist,
        Intent::Label,
        Intent::SearchAll,
        Intent::Unknown,
    ];

    /// Fixed confidence reported with a decision of this intent.
    pub fn confidence(&self) -> f64 {
        match self {
            Intent::Stats => 0.95,
            Intent::YearRange
            | Intent::ListArtists
            | Intent::Year
            | Intent::Artist
            | Intent::Label => 0.9,
            Intent::SearchAll => 0.7,
            Intent::Unknown => 0.0,
        }
    }

    /// The query type used by intents that resolve to a collection query.
    pub fn query_type(&self) -> Option<QueryType> {
        match self {
            Intent::Year => Some(QueryType::Year),
            Intent::Artist => Some(QueryType::Artist),
            Intent::Label => Some(QueryType::Label),
            Intent::SearchAll => Some(QueryType::All),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::YearRange => "year_range",
            Intent::Stats => "stats",
            Intent::ListArtists => "list_artists",
            Intent::Year => "year",
            Intent::Artist => "artist",
            Intent::Label => "label",
            Intent::SearchAll => "search_all",
            Intent::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
