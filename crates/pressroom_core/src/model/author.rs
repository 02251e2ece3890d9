//! Author domain model.
//!
//! # Invariants
//! - `name` is trimmed, never empty, and unique in the store.
//! - `name` is read-only after construction.
//! - `id` is `None` until the first save assigns a row id.

use super::{require_trimmed, ValidationError};
use serde::{Deserialize, Serialize};

/// A writer owning zero or more articles by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub(crate) id: Option<i64>,
    pub(crate) name: String,
}

impl Author {
    /// Creates an unpersisted author with a validated, trimmed name.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            name: require_trimmed(name, "Author", "name")?,
        })
    }

    /// Rebuilds an author from already-validated stored fields.
    ///
    /// Write paths validated the data; no re-validation happens here.
    pub(crate) fn from_parts(id: i64, name: String) -> Self {
        Self { id: Some(id), name }
    }

    /// Store-assigned identifier, `None` until first save.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
