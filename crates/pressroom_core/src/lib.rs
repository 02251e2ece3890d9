//! Core domain logic for the pressroom publishing archive.
//! This crate is the single source of truth for entity invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::{create_schema, enable_foreign_keys, open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::Article;
pub use model::author::Author;
pub use model::magazine::Magazine;
pub use model::ValidationError;
pub use repo::article_repo::{ArticleRepository, SqliteArticleRepository};
pub use repo::author_repo::{AuthorRepository, SqliteAuthorRepository};
pub use repo::magazine_repo::{MagazineRepository, SqliteMagazineRepository};
pub use repo::{RepoError, RepoResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
