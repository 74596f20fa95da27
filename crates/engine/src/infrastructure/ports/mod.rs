//! Port traits for infrastructure boundaries.
//!
//! The store is the only abstraction in the engine. Everything else is a
//! concrete type. The port exists so the SQLite adapter can be swapped and so
//! handlers can be tested against a mock.

mod error;
mod repos;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::MovieStore;

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::MockMovieStore;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
