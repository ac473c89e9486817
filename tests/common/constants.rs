//! Shared constants for end-to-end tests
//!
//! When the fixture collection changes, update the counts here as well.

// ============================================================================
// Fixture Collection
// ============================================================================

/// Rows in the fixture collection
pub const TOTAL_RECORDS: u64 = 12;

/// Distinct non-empty artists in the fixture collection
pub const UNIQUE_ARTISTS: u64 = 8;

/// Distinct non-empty labels in the fixture collection
pub const UNIQUE_LABELS: u64 = 7;

pub const YEAR_MIN: i64 = 1988;
pub const YEAR_MAX: i64 = 2021;

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for a spawned server to answer /health
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 10;

/// Timeout applied to every request of the test client
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
