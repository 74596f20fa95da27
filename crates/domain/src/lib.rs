//! Marquee domain types.
//!
//! Holds the `Movie` record and its identifier. No I/O lives here.

pub mod entities;
pub mod error;
pub mod ids;

pub use entities::Movie;
pub use error::DomainError;
pub use ids::MovieId;
