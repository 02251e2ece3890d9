//! Author repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist authors and resolve their article/magazine relationships.
//!
//! # Invariants
//! - `save` inserts unidentified authors and updates identified ones; the
//!   row id adopted on insert never changes afterwards.
//! - Relationship queries on an unidentified author return empty results
//!   without touching the store.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::Magazine;
use crate::repo::article_repo::{ArticleRepository, SqliteArticleRepository};
use crate::repo::magazine_repo::{parse_magazine_row, MagazineRepository, SqliteMagazineRepository};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const AUTHOR_SELECT_SQL: &str = "SELECT id, name FROM authors";

/// Repository interface for author persistence and relationships.
pub trait AuthorRepository {
    /// Inserts or updates the author and returns its row id.
    fn save(&self, author: &mut Author) -> RepoResult<i64>;
    /// Fetches one author by id; absence is `Ok(None)`.
    fn find_by_id(&self, id: i64) -> RepoResult<Option<Author>>;
    /// All articles written by this author.
    fn articles(&self, author: &Author) -> RepoResult<Vec<Article>>;
    /// Distinct magazines this author has written for.
    fn magazines(&self, author: &Author) -> RepoResult<Vec<Magazine>>;
    /// Sorted, de-duplicated, non-null categories across `magazines`.
    fn topic_areas(&self, author: &Author) -> RepoResult<Vec<String>>;
    /// Persists author and magazine as needed, then creates an article.
    fn add_article(
        &self,
        author: &mut Author,
        magazine: &mut Magazine,
        title: &str,
    ) -> RepoResult<Article>;
}

/// SQLite-backed author repository.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn save(&self, author: &mut Author) -> RepoResult<i64> {
        match author.id {
            None => {
                self.conn.execute(
                    "INSERT INTO authors (name) VALUES (?1);",
                    params![author.name.as_str()],
                )?;
                let id = self.conn.last_insert_rowid();
                author.id = Some(id);
                Ok(id)
            }
            Some(id) => {
                let changed = self.conn.execute(
                    "UPDATE authors SET name = ?1 WHERE id = ?2;",
                    params![author.name.as_str(), id],
                )?;
                if changed == 0 {
                    return Err(RepoError::NotFound {
                        entity: "author",
                        id,
                    });
                }
                Ok(id)
            }
        }
    }

    fn find_by_id(&self, id: i64) -> RepoResult<Option<Author>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AUTHOR_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_author_row(row)?));
        }

        Ok(None)
    }

    fn articles(&self, author: &Author) -> RepoResult<Vec<Article>> {
        let Some(author_id) = author.id else {
            return Ok(Vec::new());
        };

        SqliteArticleRepository::new(self.conn).list_by_author(author_id)
    }

    fn magazines(&self, author: &Author) -> RepoResult<Vec<Magazine>> {
        let Some(author_id) = author.id else {
            return Ok(Vec::new());
        };

        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT m.id, m.name, m.category
             FROM magazines m
             JOIN articles a ON a.magazine_id = m.id
             WHERE a.author_id = ?1;",
        )?;

        let mut rows = stmt.query(params![author_id])?;
        let mut magazines = Vec::new();
        while let Some(row) = rows.next()? {
            magazines.push(parse_magazine_row(row)?);
        }

        Ok(magazines)
    }

    fn topic_areas(&self, author: &Author) -> RepoResult<Vec<String>> {
        let Some(author_id) = author.id else {
            return Ok(Vec::new());
        };

        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT m.category
             FROM magazines m
             JOIN articles a ON a.magazine_id = m.id
             WHERE a.author_id = ?1
               AND m.category IS NOT NULL
             ORDER BY m.category ASC;",
        )?;

        let mut rows = stmt.query(params![author_id])?;
        let mut categories = Vec::new();
        while let Some(row) = rows.next()? {
            categories.push(row.get("category")?);
        }

        Ok(categories)
    }

    fn add_article(
        &self,
        author: &mut Author,
        magazine: &mut Magazine,
        title: &str,
    ) -> RepoResult<Article> {
        if author.id.is_none() {
            self.save(author)?;
        }
        if magazine.id.is_none() {
            SqliteMagazineRepository::new(self.conn).save(magazine)?;
        }

        let mut article = Article::new(title, author.clone(), magazine.clone(), None)?;
        SqliteArticleRepository::new(self.conn).save(&mut article)?;
        Ok(article)
    }
}

pub(crate) fn parse_author_row(row: &Row<'_>) -> RepoResult<Author> {
    Ok(Author::from_parts(row.get("id")?, row.get("name")?))
}
