// system-tests/src/config.rs
// ============================================================================
// Module: System Test Configuration
// Description: Timeouts shared across system-test suites.
// Purpose: Keep server startup and polling bounds in one place.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Timeouts for spawning and polling the live test server. The bounds are
//! generous so slow CI machines do not flake the suites.

use std::time::Duration;

/// Maximum time to wait for the spawned server to accept requests.
pub const SERVER_START_TIMEOUT: Duration = Duration::from_secs(10);

/// Interval between readiness polls.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Per-request timeout for test HTTP calls.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
