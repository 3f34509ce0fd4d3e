// system-tests/src/lib.rs
// ============================================================================
// Module: Superlists System Tests Library
// Description: Shared configuration for system test scenarios.
// Purpose: Provide common timeouts for the system-test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration used by the Superlists system-test
//! binaries in `system-tests/tests`. The suites spawn a live server on a
//! free loopback port and drive it over plain HTTP.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
