// ============================================================================
// Test Utilities
// ============================================================================
//
// Spawns the real router on an ephemeral port over an isolated in-memory
// store, so every test drives the API exactly the way a client would.
//
// ============================================================================

#![allow(dead_code)]

use std::sync::Arc;
use tokio::net::TcpListener;

use wall_server::config::{Config, DbConfig, FeedConfig};
use wall_server::context::AppContext;
use wall_server::db::{self, DbPool};
use wall_server::routes::create_router;

/// A running wall server under test
pub struct TestApp {
    pub address: String,
    pub db_pool: Arc<DbPool>,
}

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        bind_address: "127.0.0.1:0".to_string(),
        rust_log: "warn".to_string(),
        // A single connection keeps every statement on the same in-memory
        // database for the life of the test app.
        db: DbConfig {
            max_connections: 1,
            acquire_timeout_secs: 5,
            idle_timeout_secs: 600,
        },
        feed: FeedConfig {
            server_url: String::new(),
            poll_interval_ms: 2000,
        },
    }
}

/// Spawn a wall server with a fresh store; returns its address and pool.
pub async fn spawn_app() -> TestApp {
    let config = Arc::new(test_config());

    let db_pool = Arc::new(
        db::create_pool(&config.database_url, &config.db)
            .await
            .expect("Failed to create test pool"),
    );

    sqlx::migrate!()
        .run(&*db_pool)
        .await
        .expect("Failed to apply migrations");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let address = format!("127.0.0.1:{}", port);

    let context = Arc::new(AppContext::new(db_pool.clone(), config));
    let app = create_router(context);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp { address, db_pool }
}
