//! Domain entities - Core business objects with identity

mod movie;

pub use movie::Movie;
