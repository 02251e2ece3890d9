//! Magazine domain model.
//!
//! # Invariants
//! - `name` is trimmed, never empty, and unique in the store.
//! - `category`, when present, is trimmed and never empty.
//! - `id` is `None` until the first save assigns a row id.

use super::{optional_trimmed, require_trimmed, ValidationError};
use serde::{Deserialize, Serialize};

/// A publication owning zero or more articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    pub(crate) id: Option<i64>,
    pub(crate) name: String,
    pub(crate) category: Option<String>,
}

impl Magazine {
    /// Creates an unpersisted magazine with validated, trimmed fields.
    pub fn new(name: &str, category: Option<&str>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            name: require_trimmed(name, "Magazine", "name")?,
            category: optional_trimmed(category, "Magazine", "category")?,
        })
    }

    /// Rebuilds a magazine from already-validated stored fields.
    pub(crate) fn from_parts(id: i64, name: String, category: Option<String>) -> Self {
        Self {
            id: Some(id),
            name,
            category,
        }
    }

    /// Store-assigned identifier, `None` until first save.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Replaces the name; the same non-empty rule as construction applies.
    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = require_trimmed(name, "Magazine", "name")?;
        Ok(())
    }

    /// Replaces the category; `None` clears it, `Some` must be non-empty.
    pub fn set_category(&mut self, category: Option<&str>) -> Result<(), ValidationError> {
        self.category = optional_trimmed(category, "Magazine", "category")?;
        Ok(())
    }
}
