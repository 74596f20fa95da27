//! Repository port traits for database access.

use async_trait::async_trait;
use marquee_domain::{Movie, MovieId};

use super::error::RepoError;

// =============================================================================
// Movie Collection
// =============================================================================

/// Persistence gateway for the `movies` collection.
///
/// Every call touches at most one record, except `find_all`. Implementations
/// surface driver failures as `RepoError` without retrying.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Every record, in store-native order. Empty collection is `Ok(vec![])`.
    async fn find_all(&self) -> Result<Vec<Movie>, RepoError>;

    /// Fails with `RepoError::NotFound` when nothing matches.
    async fn find_by_id(&self, id: MovieId) -> Result<Movie, RepoError>;

    /// Writes a new record. The caller assigns the identifier beforehand.
    async fn insert(&self, movie: &Movie) -> Result<(), RepoError>;

    /// Replaces the record with the same identifier wholesale.
    async fn update(&self, movie: &Movie) -> Result<(), RepoError>;

    /// Removes the record with the same identifier.
    async fn delete(&self, movie: &Movie) -> Result<(), RepoError>;
}
