use super::patterns::{Extraction, PatternRule, PATTERN_BANK};
use super::{Intent, RoutingDecision};
use crate::tools::ToolCall;
use lazy_static::lazy_static;
use regex::{Captures, Regex, RegexBuilder};
use tracing::debug;

lazy_static! {
    static ref ARTIST_SUFFIX_REGEX: Regex =
        Regex::new(r"\s+(?:records|albums|music|stuff)$")
            .expect("Invalid Regex, this should be fixed at compile time.");
}

struct CompiledRule {
    intent: Intent,
    regex: Regex,
    extraction: Extraction,
}

/// Maps a free-text message to a tool call, or to the fallback help text.
pub struct DeterministicRouter {
    rules: Vec<CompiledRule>,
}

impl DeterministicRouter {
    /// A router over the built-in pattern bank.
    pub fn new() -> Self {
        // The built-in bank is covered by tests; a bad pattern there is a bug.
        Self::with_rules(PATTERN_BANK).expect("built-in pattern bank must compile")
    }

    pub fn with_rules(rules: &[PatternRule]) -> Result<Self, regex::Error> {
        let rules = rules
            .iter()
            .map(|rule| {
                let regex = RegexBuilder::new(rule.pattern)
                    .case_insensitive(true)
                    .build()?;
                Ok(CompiledRule {
                    intent: rule.intent,
                    regex,
                    extraction: rule.extraction,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { rules })
    }

    pub fn route(&self, message: &str) -> RoutingDecision {
        let message = message.trim().to_lowercase();

        for rule in &self.rules {
            let Some(captures) = rule.regex.captures(&message) else {
                continue;
            };
            if let Some(call) = Self::extract(rule, &captures) {
                debug!(
                    "Routed {:?} to {} via /{}/",
                    message,
                    rule.intent,
                    rule.regex.as_str()
                );
                return RoutingDecision::resolved(rule.intent, call);
            }
        }

        debug!("No pattern matched {:?}", message);
        RoutingDecision::fallback()
    }

    fn extract(rule: &CompiledRule, captures: &Captures) -> Option<ToolCall> {
        let group = |index: usize| captures.get(index).map(|m| m.as_str().trim());

        match rule.extraction {
            Extraction::Nothing => match rule.intent {
                Intent::Stats => Some(ToolCall::StatsSummary),
                Intent::ListArtists => Some(ToolCall::list_artists()),
                _ => None,
            },
            Extraction::YearRange => {
                let year_from = group(1)?.parse().ok()?;
                let year_to = group(2)?.parse().ok()?;
                Some(ToolCall::year_range(year_from, year_to))
            }
            Extraction::Year => {
                let digits = group(1)?;
                digits.parse::<i32>().ok()?;
                Some(ToolCall::query(rule.intent.query_type()?, digits))
            }
            Extraction::ArtistName => {
                let name = ARTIST_SUFFIX_REGEX.replace(group(1)?, "");
                Some(ToolCall::query(rule.intent.query_type()?, name.trim()))
            }
            Extraction::Term => Some(ToolCall::query(rule.intent.query_type()?, group(1)?)),
        }
    }
}

impl Default for DeterministicRouter {
    fn default() -> Self {
        Self::new()
    }
}
