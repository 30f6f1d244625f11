// ============================================================================
// Feed Client Tests
// ============================================================================
//
// Drives FeedClient against a spawned wall server: the same round trips the
// terminal feed performs on every poll and submit.
//
// ============================================================================

mod test_utils;
use test_utils::spawn_app;

use wall_server::feed::{FeedClient, FeedView};

#[tokio::test]
async fn fetch_on_an_empty_wall_returns_no_messages() {
    let app = spawn_app().await;
    let client = FeedClient::new(&format!("http://{}", app.address)).unwrap();

    let messages = client.fetch_messages().await.unwrap();

    assert!(messages.is_empty());
}

#[tokio::test]
async fn post_and_fetch_round_trip() {
    let app = spawn_app().await;
    let client = FeedClient::new(&format!("http://{}", app.address)).unwrap();

    let created = client.post_message("  hello wall  ").await.unwrap();
    assert_eq!(created.content, "hello wall");

    let messages = client.fetch_messages().await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, created.id);
    assert_eq!(messages[0].content, "hello wall");
}

#[tokio::test]
async fn blank_content_is_rejected_by_the_server() {
    let app = spawn_app().await;
    let client = FeedClient::new(&format!("http://{}", app.address)).unwrap();

    assert!(client.post_message("   ").await.is_err());
    assert!(client.fetch_messages().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_removes_the_message_from_the_feed() {
    let app = spawn_app().await;
    let client = FeedClient::new(&format!("http://{}", app.address)).unwrap();

    let created = client.post_message("short-lived").await.unwrap();
    client.delete_message(created.id).await.unwrap();

    let messages = client.fetch_messages().await.unwrap();
    assert!(messages.is_empty());
}

#[tokio::test]
async fn a_snapshot_refreshes_the_view_wholesale() {
    let app = spawn_app().await;
    let client = FeedClient::new(&format!("http://{}", app.address)).unwrap();
    let mut view = FeedView::new();

    client.post_message("one").await.unwrap();
    let snapshot = client.fetch_messages().await.unwrap();
    assert!(view.replace(snapshot.clone()));

    // An identical poll result leaves the view untouched.
    assert!(!view.replace(snapshot));

    client.post_message("two").await.unwrap();
    assert!(view.replace(client.fetch_messages().await.unwrap()));
}
