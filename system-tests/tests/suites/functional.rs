// system-tests/tests/suites/functional.rs
// ============================================================================
// Module: Functional Tests
// Description: End-to-end to-do workflows against a live server.
// Purpose: Ensure a visitor can start a list, extend it, and return to it.
// Dependencies: system-tests helpers
// ============================================================================

//! Full to-do list workflows driven through the HTTP surface.

use helpers::harness::spawn_server;
use helpers::web_client::redirect_target;
use superlists_core::ListStore;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn visitor_can_start_a_list_and_retrieve_it_later() -> Result<(), Box<dyn std::error::Error>>
{
    let server = spawn_server().await?;
    let client = server.client()?;

    // The first submission creates the list and lands on its own URL.
    let list_path = client.start_list("Buy peacock feathers").await?;
    assert!(list_path.starts_with("/lists/"));
    assert!(list_path.ends_with('/'));

    let body = client.page_text(&list_path).await?;
    assert!(body.contains("1: Buy peacock feathers"));
    assert!(body.contains("Your To-Do list"));

    // A second item appends after the first and redirects back to the list.
    let response = client.post_item(&list_path, "Use peacock feathers to make a fly").await?;
    assert_eq!(redirect_target(&response)?, list_path);

    let body = client.page_text(&list_path).await?;
    assert!(body.contains("1: Buy peacock feathers"));
    assert!(body.contains("2: Use peacock feathers to make a fly"));

    assert_eq!(server.store().list_count()?, 1);
    assert_eq!(server.store().item_count()?, 2);

    server.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn saved_list_survives_leaving_and_returning() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_server().await?;
    let client = server.client()?;

    let list_path = client.start_list("Buy milk").await?;

    // Returning via the home page leaves the saved list untouched.
    let home = client.page_text("/").await?;
    assert!(!home.contains("Buy milk"));

    let body = client.page_text(&list_path).await?;
    assert!(body.contains("1: Buy milk"));

    server.shutdown().await;
    Ok(())
}
