//! Marquee Engine library.
//!
//! HTTP catalogue of movies backed by a document store.
//!
//! ## Structure
//!
//! - `infrastructure/` - Config loading, store port and its SQLite adapter
//! - `api/` - HTTP routes and JSON response envelopes
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;

/// End-to-end tests over a real SQLite store.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
