//! Movie entity - the single record type held in the `movies` collection
//!
//! Only the identifier and title are known to the engine. Every other
//! attribute a client sends (year, director, cover image, ...) is kept
//! verbatim in `details` and written back out flattened into the record.
//!
//! # Identity
//! - The identifier is assigned once, on creation, and never rewritten.
//! - Uniqueness is enforced by the store, not here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::MovieId;

/// A movie document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Unset until the record is created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MovieId>,

    #[serde(default)]
    pub title: String,

    /// Descriptive attributes the engine does not interpret
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Movie {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            details: Map::new(),
        }
    }

    /// Assign a fresh identifier unless one is already present.
    pub fn with_generated_id(mut self) -> Self {
        if self.id.is_none() {
            self.id = Some(MovieId::new());
        }
        self
    }

    pub fn has_id(&self) -> bool {
        self.id.is_some()
    }
}
