// system-tests/tests/suites/smoke.rs
// ============================================================================
// Module: Smoke Tests
// Description: End-to-end startup checks for the Superlists server.
// Purpose: Ensure a spawned server answers its routes before deeper suites.
// Dependencies: system-tests helpers
// ============================================================================

//! Server startup and routing smoke tests.

use helpers::harness::spawn_server;
use reqwest::StatusCode;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn home_page_renders_after_startup() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_server().await?;
    let client = server.client()?;

    let body = client.page_text("/").await?;
    assert!(body.contains("<title>To-Do lists</title>"));
    assert!(body.contains("Start a new To-Do list"));
    assert!(body.contains("id=\"id_text\""));

    server.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_list_answers_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_server().await?;
    let client = server.client()?;

    let response = client.get("/lists/99/").await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client.get("/lists/0/").await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    server.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_path_answers_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_server().await?;
    let client = server.client()?;

    let response = client.get("/no-such-page").await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    server.shutdown().await;
    Ok(())
}
