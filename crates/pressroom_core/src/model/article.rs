//! Article domain model.
//!
//! # Invariants
//! - `title` is trimmed, never empty, and immutable after construction.
//! - Every article references exactly one author and one magazine; the
//!   references are owned values, so they can never be absent.
//! - `content` is free text and carries no validation.

use super::author::Author;
use super::magazine::Magazine;
use super::{require_trimmed, ValidationError};
use serde::{Deserialize, Serialize};

/// A piece written by one author for one magazine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub(crate) id: Option<i64>,
    pub(crate) title: String,
    pub(crate) content: Option<String>,
    pub(crate) author: Author,
    pub(crate) magazine: Magazine,
}

impl Article {
    /// Creates an unpersisted article with a validated, trimmed title.
    ///
    /// The author and magazine may themselves be unpersisted; saving the
    /// article persists them first.
    pub fn new(
        title: &str,
        author: Author,
        magazine: Magazine,
        content: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            title: require_trimmed(title, "Article", "title")?,
            content: content.map(str::to_string),
            author,
            magazine,
        })
    }

    /// Rebuilds an article from already-validated stored fields and its
    /// hydrated endpoints.
    pub(crate) fn from_parts(
        id: i64,
        title: String,
        content: Option<String>,
        author: Author,
        magazine: Magazine,
    ) -> Self {
        Self {
            id: Some(id),
            title,
            content,
            author,
            magazine,
        }
    }

    /// Store-assigned identifier, `None` until first save.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn magazine(&self) -> &Magazine {
        &self.magazine
    }

    /// Replaces the free-text body; `None` clears it.
    pub fn set_content(&mut self, content: Option<&str>) {
        self.content = content.map(str::to_string);
    }
}
