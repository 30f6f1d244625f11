// ============================================================================
// Feed Client
// ============================================================================
//
// Terminal client for the wall:
// - client.rs: HTTP access to the messages resource
// - view.rs: the rendered feed and the poll/submit loop
//
// ============================================================================

mod client;
mod view;

pub use client::FeedClient;
pub use view::{run_feed, FeedView};
