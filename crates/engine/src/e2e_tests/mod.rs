//! Backend E2E integration tests.
//!
//! These tests drive the full router (with tracing layer) against a real
//! SQLite document store in a temporary directory.
//!
//! ```bash
//! cargo test -p marquee-engine --lib e2e_tests
//! ```

mod e2e_helpers;

pub use e2e_helpers::*;
