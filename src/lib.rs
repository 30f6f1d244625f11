//! # Wall Server
//!
//! A minimal public message wall: clients post short text messages and poll
//! for new ones. The server exposes one collection endpoint over three HTTP
//! verbs, backed by a single SQLite table; the feed client polls it on an
//! interval and renders the result.

pub mod config;
pub mod context;
pub mod db;
pub mod error;
pub mod feed;
pub mod routes;
