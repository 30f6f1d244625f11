// ============================================================================
// REST API Health Endpoint Tests
// ============================================================================

use serde_json::Value;

mod test_utils;
use test_utils::spawn_app;

#[tokio::test]
async fn health_check_reports_ok_when_the_store_is_reachable() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/health", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}
