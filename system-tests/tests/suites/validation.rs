// system-tests/tests/suites/validation.rs
// ============================================================================
// Module: Validation Tests
// Description: End-to-end validation for item submissions.
// Purpose: Ensure invalid submissions re-render with errors and save nothing.
// Dependencies: system-tests helpers
// ============================================================================

//! Form validation behavior driven through the HTTP surface.

use helpers::harness::spawn_server;
use reqwest::StatusCode;
use superlists_core::DUPLICATE_ITEM_ERROR;
use superlists_core::EMPTY_ITEM_ERROR;
use superlists_core::ListStore;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn empty_first_item_is_rejected_without_saving() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_server().await?;
    let client = server.client()?;

    let response = client.post_item("/lists/new", "").await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await?;
    assert!(body.contains(EMPTY_ITEM_ERROR));
    assert!(body.contains("Start a new To-Do list"));

    assert_eq!(server.store().list_count()?, 0);
    assert_eq!(server.store().item_count()?, 0);

    server.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn blank_item_on_existing_list_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_server().await?;
    let client = server.client()?;

    let list_path = client.start_list("Buy milk").await?;

    let response = client.post_item(&list_path, "   ").await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await?;
    assert!(body.contains(EMPTY_ITEM_ERROR));
    // The page still shows the saved items around the rejected form.
    assert!(body.contains("1: Buy milk"));

    assert_eq!(server.store().item_count()?, 1);

    server.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_item_is_rejected_without_saving() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_server().await?;
    let client = server.client()?;

    let list_path = client.start_list("Buy wellies").await?;

    let response = client.post_item(&list_path, "Buy wellies").await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await?;
    assert!(body.contains(DUPLICATE_ITEM_ERROR));
    assert!(body.contains("1: Buy wellies"));
    assert!(!body.contains("2: Buy wellies"));

    assert_eq!(server.store().item_count()?, 1);

    server.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn submitted_text_is_trimmed_before_saving() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_server().await?;
    let client = server.client()?;

    let list_path = client.start_list("  Buy milk  ").await?;

    let body = client.page_text(&list_path).await?;
    assert!(body.contains("1: Buy milk"));

    // The padded resubmission trims to the same text and is a duplicate.
    let response = client.post_item(&list_path, " Buy milk ").await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await?;
    assert!(body.contains(DUPLICATE_ITEM_ERROR));

    assert_eq!(server.store().item_count()?, 1);

    server.shutdown().await;
    Ok(())
}
