//! Magazine repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist magazines and resolve their article/contributor relationships.
//! - Answer the archive-wide aggregate queries.
//!
//! # Invariants
//! - `article_titles` preserves insertion order (ascending article id).
//! - `contributing_authors` applies a strictly-greater-than-2 threshold;
//!   the grouping order of the result is unspecified.
//! - `top_publisher` returns `None` on an empty articles table; the row
//!   returned on a count tie is unspecified.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::Magazine;
use crate::repo::article_repo::SqliteArticleRepository;
use crate::repo::author_repo::parse_author_row;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const MAGAZINE_SELECT_SQL: &str = "SELECT id, name, category FROM magazines";

/// Repository interface for magazine persistence, relationships, and
/// aggregates.
pub trait MagazineRepository {
    /// Inserts or updates the magazine and returns its row id.
    fn save(&self, magazine: &mut Magazine) -> RepoResult<i64>;
    /// Fetches one magazine by id; absence is `Ok(None)`.
    fn find_by_id(&self, id: i64) -> RepoResult<Option<Magazine>>;
    /// All articles published in this magazine.
    fn articles(&self, magazine: &Magazine) -> RepoResult<Vec<Article>>;
    /// Distinct authors who have written for this magazine.
    fn contributors(&self, magazine: &Magazine) -> RepoResult<Vec<Author>>;
    /// Titles of this magazine's articles in insertion order.
    fn article_titles(&self, magazine: &Magazine) -> RepoResult<Vec<String>>;
    /// Ids of authors with strictly more than two articles in the magazine.
    fn contributing_authors(&self, magazine_id: i64) -> RepoResult<Vec<i64>>;
    /// Id of the magazine with the most articles overall.
    fn top_publisher(&self) -> RepoResult<Option<i64>>;
}

/// SQLite-backed magazine repository.
pub struct SqliteMagazineRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMagazineRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl MagazineRepository for SqliteMagazineRepository<'_> {
    fn save(&self, magazine: &mut Magazine) -> RepoResult<i64> {
        match magazine.id {
            None => {
                self.conn.execute(
                    "INSERT INTO magazines (name, category) VALUES (?1, ?2);",
                    params![magazine.name.as_str(), magazine.category.as_deref()],
                )?;
                let id = self.conn.last_insert_rowid();
                magazine.id = Some(id);
                Ok(id)
            }
            Some(id) => {
                let changed = self.conn.execute(
                    "UPDATE magazines SET name = ?1, category = ?2 WHERE id = ?3;",
                    params![magazine.name.as_str(), magazine.category.as_deref(), id],
                )?;
                if changed == 0 {
                    return Err(RepoError::NotFound {
                        entity: "magazine",
                        id,
                    });
                }
                Ok(id)
            }
        }
    }

    fn find_by_id(&self, id: i64) -> RepoResult<Option<Magazine>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MAGAZINE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_magazine_row(row)?));
        }

        Ok(None)
    }

    fn articles(&self, magazine: &Magazine) -> RepoResult<Vec<Article>> {
        let Some(magazine_id) = magazine.id else {
            return Ok(Vec::new());
        };

        SqliteArticleRepository::new(self.conn).list_by_magazine(magazine_id)
    }

    fn contributors(&self, magazine: &Magazine) -> RepoResult<Vec<Author>> {
        let Some(magazine_id) = magazine.id else {
            return Ok(Vec::new());
        };

        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT au.id, au.name
             FROM authors au
             JOIN articles a ON a.author_id = au.id
             WHERE a.magazine_id = ?1;",
        )?;

        let mut rows = stmt.query(params![magazine_id])?;
        let mut authors = Vec::new();
        while let Some(row) = rows.next()? {
            authors.push(parse_author_row(row)?);
        }

        Ok(authors)
    }

    fn article_titles(&self, magazine: &Magazine) -> RepoResult<Vec<String>> {
        let Some(magazine_id) = magazine.id else {
            return Ok(Vec::new());
        };

        let mut stmt = self.conn.prepare(
            "SELECT title FROM articles WHERE magazine_id = ?1 ORDER BY id ASC;",
        )?;

        let mut rows = stmt.query(params![magazine_id])?;
        let mut titles = Vec::new();
        while let Some(row) = rows.next()? {
            titles.push(row.get("title")?);
        }

        Ok(titles)
    }

    fn contributing_authors(&self, magazine_id: i64) -> RepoResult<Vec<i64>> {
        let mut stmt = self.conn.prepare(
            "SELECT author_id
             FROM articles
             WHERE magazine_id = ?1
             GROUP BY author_id
             HAVING COUNT(id) > 2;",
        )?;

        let mut rows = stmt.query(params![magazine_id])?;
        let mut author_ids = Vec::new();
        while let Some(row) = rows.next()? {
            author_ids.push(row.get("author_id")?);
        }

        Ok(author_ids)
    }

    fn top_publisher(&self) -> RepoResult<Option<i64>> {
        let mut stmt = self.conn.prepare(
            "SELECT magazine_id, COUNT(id) AS article_count
             FROM articles
             GROUP BY magazine_id
             ORDER BY article_count DESC
             LIMIT 1;",
        )?;

        let mut rows = stmt.query([])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get("magazine_id")?));
        }

        Ok(None)
    }
}

pub(crate) fn parse_magazine_row(row: &Row<'_>) -> RepoResult<Magazine> {
    Ok(Magazine::from_parts(
        row.get("id")?,
        row.get("name")?,
        row.get("category")?,
    ))
}
