// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for Superlists system-tests.
// Purpose: Provide the live-server harness and the HTTP test client.
// Dependencies: system-tests, superlists-core, superlists-web
// ============================================================================

//! ## Overview
//! Shared helpers for Superlists system-tests: a harness that spawns the
//! web server in-process on a free loopback port, and a redirect-aware HTTP
//! client for driving the pages the way a browser would.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod web_client;
