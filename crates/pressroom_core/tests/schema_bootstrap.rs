use pressroom_core::db::{enable_foreign_keys, open_db, open_db_in_memory};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_all_tables() {
    let conn = open_db_in_memory().unwrap();

    assert_table_exists(&conn, "authors");
    assert_table_exists(&conn, "magazines");
    assert_table_exists(&conn, "articles");
}

#[test]
fn opening_same_database_twice_is_idempotent_and_preserves_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pressroom.db");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute("INSERT INTO authors (name) VALUES ('Alice');", [])
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_table_exists(&conn_second, "authors");

    let count: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM authors;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn dangling_article_insert_succeeds_without_foreign_key_enforcement() {
    let conn = open_db_in_memory().unwrap();

    // SQLite leaves the pragma off per connection; the insert must pass.
    conn.execute(
        "INSERT INTO articles (title, content, author_id, magazine_id)
         VALUES ('orphan', NULL, 999, 999);",
        [],
    )
    .unwrap();
}

#[test]
fn dangling_article_insert_fails_once_foreign_keys_are_enabled() {
    let conn = open_db_in_memory().unwrap();
    enable_foreign_keys(&conn).unwrap();

    let result = conn.execute(
        "INSERT INTO articles (title, content, author_id, magazine_id)
         VALUES ('orphan', NULL, 999, 999);",
        [],
    );
    assert!(result.is_err());
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
