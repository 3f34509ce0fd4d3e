// system-tests/tests/suites/isolation.rs
// ============================================================================
// Module: Isolation Tests
// Description: End-to-end checks that lists do not leak into each other.
// Purpose: Ensure multiple visitors get their own lists at their own URLs.
// Dependencies: system-tests helpers
// ============================================================================

//! Per-list isolation driven through the HTTP surface.

use helpers::harness::spawn_server;
use superlists_core::ListStore;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn two_visitors_get_separate_lists() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_server().await?;
    let client = server.client()?;

    let first_path = client.start_list("Buy peacock feathers").await?;
    let second_path = client.start_list("Buy milk").await?;
    assert_ne!(first_path, second_path);

    let first = client.page_text(&first_path).await?;
    assert!(first.contains("Buy peacock feathers"));
    assert!(!first.contains("Buy milk"));

    let second = client.page_text(&second_path).await?;
    assert!(second.contains("Buy milk"));
    assert!(!second.contains("Buy peacock feathers"));

    assert_eq!(server.store().list_count()?, 2);

    server.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn same_text_is_allowed_on_different_lists() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_server().await?;
    let client = server.client()?;

    let first_path = client.start_list("Buy milk").await?;
    let second_path = client.start_list("Buy milk").await?;

    let first = client.page_text(&first_path).await?;
    assert!(first.contains("1: Buy milk"));
    let second = client.page_text(&second_path).await?;
    assert!(second.contains("1: Buy milk"));

    assert_eq!(server.store().item_count()?, 2);

    server.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn items_append_only_to_their_own_list() -> Result<(), Box<dyn std::error::Error>> {
    let server = spawn_server().await?;
    let client = server.client()?;

    let first_path = client.start_list("itemey 1").await?;
    client.post_item(&first_path, "itemey 2").await?;
    let second_path = client.start_list("other list item").await?;

    let first = client.page_text(&first_path).await?;
    assert!(first.contains("1: itemey 1"));
    assert!(first.contains("2: itemey 2"));
    assert!(!first.contains("other list item"));

    let second = client.page_text(&second_path).await?;
    assert!(second.contains("1: other list item"));
    assert!(!second.contains("itemey"));

    server.shutdown().await;
    Ok(())
}
