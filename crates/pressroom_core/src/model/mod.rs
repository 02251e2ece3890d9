//! Validated domain entities for the publishing archive.
//!
//! # Responsibility
//! - Define the canonical Author/Magazine/Article records.
//! - Enforce field invariants at construction and assignment, before any I/O.
//!
//! # Invariants
//! - Required string fields are trimmed and never empty.
//! - Identifiers are store-assigned on first insert and never change.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod article;
pub mod author;
pub mod magazine;

/// Field-level validation failure raised before any store access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A string field was empty or whitespace-only.
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { entity, field } => {
                write!(f, "{entity}.{field} must be a non-empty string")
            }
        }
    }
}

impl Error for ValidationError {}

/// Trims `value` and rejects empty/whitespace-only input.
pub(crate) fn require_trimmed(
    value: &str,
    entity: &'static str,
    field: &'static str,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { entity, field });
    }
    Ok(trimmed.to_string())
}

/// Trims an optional field; `None` passes through, `Some("")` is rejected.
pub(crate) fn optional_trimmed(
    value: Option<&str>,
    entity: &'static str,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    match value {
        None => Ok(None),
        Some(raw) => require_trimmed(raw, entity, field).map(Some),
    }
}
