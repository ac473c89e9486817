//! Deterministic intent routing.
//!
//! A message is matched against an ordered pattern bank; the first matching
//! row decides the intent and how its captures become a `ToolCall`. Messages
//! that match nothing get a fixed help text instead.

mod decision;
mod intent;
mod patterns;
#[allow(clippy::module_inception)]
mod router;

pub use decision::{RoutingDecision, FALLBACK_TEXT};
pub use intent::Intent;
pub use patterns::{Extraction, PatternRule, PATTERN_BANK};
pub use router::DeterministicRouter;
