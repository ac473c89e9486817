use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

pub const ARTIST_FIELD: &str = "Artist";
pub const TITLE_FIELD: &str = "Title";
pub const LABEL_FIELD: &str = "Label";
pub const RELEASED_FIELD: &str = "Released";

/// Columns every collection export must carry.
pub const REQUIRED_FIELDS: [&str; 4] = [ARTIST_FIELD, TITLE_FIELD, LABEL_FIELD, RELEASED_FIELD];

lazy_static! {
    static ref YEAR_REGEX: Regex = Regex::new(r"\b(19[0-9]{2}|20[0-9]{2})\b")
        .expect("Invalid Regex, this should be fixed at compile time.");
}

/// Trim and lowercase, the form every text comparison is made in.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Extract the release year from free text such as "2016-03-01" or "Released 2016".
///
/// The first standalone 4-digit token in 1900-2099 wins. There is no calendar
/// validation, so "1999 remaster of 2003" parses as 1999.
pub fn parse_year(released: &str) -> Option<i32> {
    YEAR_REGEX
        .captures(released)
        .and_then(|captures| captures.get(1))
        .and_then(|m| m.as_str().parse::<i32>().ok())
}

/// One row of the collection export, keyed by column name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new(fields: BTreeMap<String, String>) -> Record {
        Record { fields }
    }

    /// Field value, or an empty string if the column is missing.
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn artist(&self) -> &str {
        self.get(ARTIST_FIELD)
    }

    pub fn title(&self) -> &str {
        self.get(TITLE_FIELD)
    }

    pub fn label(&self) -> &str {
        self.get(LABEL_FIELD)
    }

    pub fn released(&self) -> &str {
        self.get(RELEASED_FIELD)
    }

    pub fn year(&self) -> Option<i32> {
        parse_year(self.released())
    }

    /// "Artist - Title (Label, Released)", with placeholders for blank fields.
    pub fn display_line(&self) -> String {
        format!(
            "{} - {} ({}, {})",
            or_placeholder(self.artist(), "Unknown Artist"),
            or_placeholder(self.title(), "Unknown Title"),
            or_placeholder(self.label(), "Unknown Label"),
            self.released(),
        )
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

#[cfg(test)]
impl Record {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Record {
        Record::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}
