//! Article repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist articles, cascading one level into unsaved endpoints.
//! - Hydrate stored articles together with their author and magazine.
//!
//! # Invariants
//! - The cascade is depth-one: only the article's direct author and
//!   magazine are saved, and only when still unidentified.
//! - The cascade is not transactional; a failed magazine save can leave a
//!   freshly inserted author behind.
//! - Read paths reject rows whose foreign keys resolve to nothing instead
//!   of masking them.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::Magazine;
use crate::repo::author_repo::{AuthorRepository, SqliteAuthorRepository};
use crate::repo::magazine_repo::{MagazineRepository, SqliteMagazineRepository};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const ARTICLE_SELECT_SQL: &str =
    "SELECT id, title, content, author_id, magazine_id FROM articles";

/// Repository interface for article persistence.
pub trait ArticleRepository {
    /// Inserts or updates the article and returns its row id.
    ///
    /// An unidentified author or magazine is saved first, so their adopted
    /// ids are visible on the article afterwards.
    fn save(&self, article: &mut Article) -> RepoResult<i64>;
    /// Fetches one article by id with hydrated endpoints; absence is
    /// `Ok(None)`.
    fn find_by_id(&self, id: i64) -> RepoResult<Option<Article>>;
}

/// SQLite-backed article repository.
pub struct SqliteArticleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteArticleRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Articles written by the given author, hydrated.
    pub(crate) fn list_by_author(&self, author_id: i64) -> RepoResult<Vec<Article>> {
        self.list_where("author_id", author_id)
    }

    /// Articles published in the given magazine, hydrated.
    pub(crate) fn list_by_magazine(&self, magazine_id: i64) -> RepoResult<Vec<Article>> {
        self.list_where("magazine_id", magazine_id)
    }

    fn list_where(&self, column: &str, id: i64) -> RepoResult<Vec<Article>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ARTICLE_SELECT_SQL} WHERE {column} = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        let mut articles = Vec::new();
        while let Some(row) = rows.next()? {
            articles.push(self.hydrate_article_row(row)?);
        }

        Ok(articles)
    }

    /// Maps a row to an `Article`, re-fetching its author and magazine by
    /// their stored foreign keys (two point lookups per row).
    fn hydrate_article_row(&self, row: &Row<'_>) -> RepoResult<Article> {
        let id: i64 = row.get("id")?;
        let author_id: i64 = row.get("author_id")?;
        let magazine_id: i64 = row.get("magazine_id")?;

        let author = self.hydrate_author(id, author_id)?;
        let magazine = self.hydrate_magazine(id, magazine_id)?;

        Ok(Article::from_parts(
            id,
            row.get("title")?,
            row.get("content")?,
            author,
            magazine,
        ))
    }

    fn hydrate_author(&self, article_id: i64, author_id: i64) -> RepoResult<Author> {
        SqliteAuthorRepository::new(self.conn)
            .find_by_id(author_id)?
            .ok_or_else(|| {
                RepoError::InvalidData(format!(
                    "article {article_id} references missing author {author_id}"
                ))
            })
    }

    fn hydrate_magazine(&self, article_id: i64, magazine_id: i64) -> RepoResult<Magazine> {
        SqliteMagazineRepository::new(self.conn)
            .find_by_id(magazine_id)?
            .ok_or_else(|| {
                RepoError::InvalidData(format!(
                    "article {article_id} references missing magazine {magazine_id}"
                ))
            })
    }
}

impl ArticleRepository for SqliteArticleRepository<'_> {
    fn save(&self, article: &mut Article) -> RepoResult<i64> {
        let author_id = match article.author.id {
            Some(id) => id,
            None => SqliteAuthorRepository::new(self.conn).save(&mut article.author)?,
        };
        let magazine_id = match article.magazine.id {
            Some(id) => id,
            None => SqliteMagazineRepository::new(self.conn).save(&mut article.magazine)?,
        };

        match article.id {
            None => {
                self.conn.execute(
                    "INSERT INTO articles (title, content, author_id, magazine_id)
                     VALUES (?1, ?2, ?3, ?4);",
                    params![
                        article.title.as_str(),
                        article.content.as_deref(),
                        author_id,
                        magazine_id,
                    ],
                )?;
                let id = self.conn.last_insert_rowid();
                article.id = Some(id);
                Ok(id)
            }
            Some(id) => {
                let changed = self.conn.execute(
                    "UPDATE articles
                     SET title = ?1, content = ?2, author_id = ?3, magazine_id = ?4
                     WHERE id = ?5;",
                    params![
                        article.title.as_str(),
                        article.content.as_deref(),
                        author_id,
                        magazine_id,
                        id,
                    ],
                )?;
                if changed == 0 {
                    return Err(RepoError::NotFound {
                        entity: "article",
                        id,
                    });
                }
                Ok(id)
            }
        }
    }

    fn find_by_id(&self, id: i64) -> RepoResult<Option<Article>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ARTICLE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(self.hydrate_article_row(row)?));
        }

        Ok(None)
    }
}
