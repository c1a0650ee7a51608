//! Shared constants for end-to-end tests
//!
//! When the seeded test data changes, update only this file.

// ============================================================================
// Seeded Courses
// ============================================================================

/// Id of the first course written by the fixtures.
#[allow(dead_code)]
pub const SEEDED_COURSE_1_ID: i64 = 1;
#[allow(dead_code)]
pub const SEEDED_COURSE_1_TITLE: &str = "Java Fundamentals";
#[allow(dead_code)]
pub const SEEDED_COURSE_1_CATEGORY: &str = "Programação";
#[allow(dead_code)]
pub const SEEDED_COURSE_1_HOURS: i64 = 40;

#[allow(dead_code)]
pub const SEEDED_COURSE_2_TITLE: &str = "Advanced Java";
#[allow(dead_code)]
pub const SEEDED_COURSE_2_HOURS: i64 = 30;

#[allow(dead_code)]
pub const SEEDED_COURSE_3_TITLE: &str = "Angular Basics";
#[allow(dead_code)]
pub const SEEDED_COURSE_3_CATEGORY: &str = "Frontend";
#[allow(dead_code)]
pub const SEEDED_COURSE_3_HOURS: i64 = 35;

#[allow(dead_code)]
pub const SEEDED_COURSES_COUNT: usize = 3;

/// An id no seeded course uses.
#[allow(dead_code)]
pub const MISSING_COURSE_ID: i64 = 9_999;

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for the test server to answer its first request.
pub const SERVER_READY_TIMEOUT_MS: u64 = 5_000;

/// Delay between readiness polls.
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 10;

/// Timeout for every request made by the test client.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
