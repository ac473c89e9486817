//! The pattern bank: an ordered table of (intent, pattern, extraction) rows.
//!
//! Rows are tried top to bottom and the first match wins, so the table order
//! is the routing precedence. Patterns run against the trimmed, lowercased
//! message and are unanchored unless they say otherwise. Later intents have
//! broader patterns; moving a row up can shadow a more specific one below.

use super::Intent;

/// How a matched pattern turns its captures into tool arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// No captures, the intent alone decides the call.
    Nothing,
    /// Group 1 is a free-text search term.
    Term,
    /// Group 1 is an artist name, possibly followed by "records", "albums"...
    ArtistName,
    /// Group 1 is a 4-digit year.
    Year,
    /// Groups 1 and 2 are the first and last year, as written.
    YearRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRule {
    pub intent: Intent,
    pub pattern: &'static str,
    pub extraction: Extraction,
}

const fn rule(intent: Intent, pattern: &'static str, extraction: Extraction) -> PatternRule {
    PatternRule {
        intent,
        pattern,
        extraction,
    }
}

pub const PATTERN_BANK: &[PatternRule] = &[
    // Before Year, or "2010-2015" would be read as a single year.
    rule(Intent::YearRange, r"between ([0-9]{4}) and ([0-9]{4})", Extraction::YearRange),
    rule(Intent::YearRange, r"from ([0-9]{4}) to ([0-9]{4})", Extraction::YearRange),
    rule(Intent::YearRange, r"([0-9]{4})\s*-\s*([0-9]{4})", Extraction::YearRange),
    rule(Intent::Stats, r"how many records", Extraction::Nothing),
    rule(Intent::Stats, r"collection stats", Extraction::Nothing),
    rule(
        Intent::Stats,
        r"(?:give me a )?(?:quick )?(?:stats|statistics|summary)",
        Extraction::Nothing,
    ),
    rule(Intent::Stats, r"tell me about my collection", Extraction::Nothing),
    rule(Intent::Stats, r"what(?:'s| is) in my collection", Extraction::Nothing),
    rule(Intent::ListArtists, r"list (?:all )?(?:the )?artists", Extraction::Nothing),
    rule(
        Intent::ListArtists,
        r"show (?:me )?(?:all )?(?:the )?artists",
        Extraction::Nothing,
    ),
    rule(Intent::ListArtists, r"what artists (?:do i have)?", Extraction::Nothing),
    rule(Intent::ListArtists, r"who(?:'s| is) in my collection", Extraction::Nothing),
    // Before Label, or "2020 releases" would be read as a label.
    rule(Intent::Year, r"(?:records|albums|stuff) from ([0-9]{4})", Extraction::Year),
    rule(Intent::Year, r"([0-9]{4}) (?:releases|records|albums)", Extraction::Year),
    rule(Intent::Year, r"what (?:do i have|records) from ([0-9]{4})", Extraction::Year),
    rule(
        Intent::Artist,
        r"what (?:do i have|records do i have|albums do i have) by (.+)",
        Extraction::ArtistName,
    ),
    rule(
        Intent::Artist,
        r"(?:show me|find|get) (.+?)(?:'s)? (?:records|albums|music)",
        Extraction::ArtistName,
    ),
    rule(Intent::Artist, r"records by (.+)", Extraction::ArtistName),
    rule(Intent::Artist, r"albums by (.+)", Extraction::ArtistName),
    rule(
        Intent::Artist,
        r"(?:do i have|got) (?:any )?(.+?) (?:records|albums)",
        Extraction::ArtistName,
    ),
    rule(Intent::Artist, r"show me (.+)", Extraction::ArtistName),
    rule(
        Intent::Label,
        r"(?:do i have )?anything on (?:the )?(.+?)(?:\s+label)?$",
        Extraction::Term,
    ),
    rule(Intent::Label, r"records on (?:the )?(.+?)(?:\s+label)?$", Extraction::Term),
    rule(
        Intent::Label,
        r"what(?:'s| is) on (?:the )?(.+?)(?:\s+label)?$",
        Extraction::Term,
    ),
    rule(Intent::Label, r"^(.+?)\s+releases$", Extraction::Term),
    rule(Intent::SearchAll, r"search (?:for )?(.+)", Extraction::Term),
    rule(Intent::SearchAll, r"find (.+)", Extraction::Term),
    rule(Intent::SearchAll, r"look for (.+)", Extraction::Term),
];
