use pressroom_core::db::open_db_in_memory;
use pressroom_core::{
    Author, AuthorRepository, Magazine, MagazineRepository, RepoError, SqliteAuthorRepository,
    SqliteMagazineRepository,
};
use rusqlite::Connection;

#[test]
fn save_inserts_and_adopts_store_assigned_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAuthorRepository::new(&conn);

    let mut author = Author::new("Alice").unwrap();
    assert_eq!(author.id(), None);

    let id = repo.save(&mut author).unwrap();
    assert_eq!(author.id(), Some(id));

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded, author);
}

#[test]
fn saving_twice_updates_in_place_and_never_duplicates() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAuthorRepository::new(&conn);

    let mut author = Author::new("Alice").unwrap();
    let first_id = repo.save(&mut author).unwrap();
    let second_id = repo.save(&mut author).unwrap();

    assert_eq!(first_id, second_id);
    assert_eq!(author_count(&conn), 1);
}

#[test]
fn find_by_id_returns_none_for_missing_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAuthorRepository::new(&conn);

    assert!(repo.find_by_id(42).unwrap().is_none());
}

#[test]
fn duplicate_name_surfaces_as_storage_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAuthorRepository::new(&conn);

    repo.save(&mut Author::new("Alice").unwrap()).unwrap();
    let err = repo.save(&mut Author::new("Alice").unwrap()).unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
}

#[test]
fn updating_a_vanished_row_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAuthorRepository::new(&conn);

    let mut author = Author::new("Alice").unwrap();
    let id = repo.save(&mut author).unwrap();
    conn.execute("DELETE FROM authors WHERE id = ?1;", [id])
        .unwrap();

    let err = repo.save(&mut author).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            entity: "author",
            ..
        }
    ));
}

#[test]
fn relationship_queries_on_unidentified_author_are_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAuthorRepository::new(&conn);

    let author = Author::new("Alice").unwrap();
    assert!(repo.articles(&author).unwrap().is_empty());
    assert!(repo.magazines(&author).unwrap().is_empty());
    assert!(repo.topic_areas(&author).unwrap().is_empty());
}

#[test]
fn articles_and_magazines_resolve_through_the_join() {
    let conn = open_db_in_memory().unwrap();
    let author_repo = SqliteAuthorRepository::new(&conn);

    let mut alice = Author::new("Alice").unwrap();
    let mut tech_today = Magazine::new("Tech Today", Some("Technology")).unwrap();
    author_repo
        .add_article(&mut alice, &mut tech_today, "AI Trends")
        .unwrap();

    let articles = author_repo.articles(&alice).unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title(), "AI Trends");
    assert_eq!(articles[0].author().name(), "Alice");

    let magazines = author_repo.magazines(&alice).unwrap();
    assert_eq!(magazines.len(), 1);
    assert_eq!(magazines[0].name(), "Tech Today");

    assert_eq!(author_repo.topic_areas(&alice).unwrap(), ["Technology"]);
}

#[test]
fn magazines_are_distinct_despite_multiple_articles() {
    let conn = open_db_in_memory().unwrap();
    let author_repo = SqliteAuthorRepository::new(&conn);

    let mut alice = Author::new("Alice").unwrap();
    let mut tech_today = Magazine::new("Tech Today", Some("Technology")).unwrap();
    author_repo
        .add_article(&mut alice, &mut tech_today, "AI 1")
        .unwrap();
    author_repo
        .add_article(&mut alice, &mut tech_today, "AI 2")
        .unwrap();

    assert_eq!(author_repo.articles(&alice).unwrap().len(), 2);
    assert_eq!(author_repo.magazines(&alice).unwrap().len(), 1);
}

#[test]
fn topic_areas_are_sorted_and_deduplicated() {
    let conn = open_db_in_memory().unwrap();
    let author_repo = SqliteAuthorRepository::new(&conn);

    let mut alice = Author::new("Alice").unwrap();
    let mut tech = Magazine::new("Tech Today", Some("Technology")).unwrap();
    let mut gadgets = Magazine::new("Gadget World", Some("Technology")).unwrap();
    let mut arts = Magazine::new("Arts Monthly", Some("Arts")).unwrap();
    let mut zine = Magazine::new("Plain Zine", None).unwrap();

    author_repo.add_article(&mut alice, &mut tech, "t1").unwrap();
    author_repo
        .add_article(&mut alice, &mut gadgets, "t2")
        .unwrap();
    author_repo.add_article(&mut alice, &mut arts, "t3").unwrap();
    author_repo.add_article(&mut alice, &mut zine, "t4").unwrap();

    // Null categories drop out; duplicates collapse; the rest sort ascending.
    assert_eq!(
        author_repo.topic_areas(&alice).unwrap(),
        ["Arts", "Technology"]
    );
}

#[test]
fn add_article_persists_unsaved_endpoints_first() {
    let conn = open_db_in_memory().unwrap();
    let author_repo = SqliteAuthorRepository::new(&conn);
    let magazine_repo = SqliteMagazineRepository::new(&conn);

    let mut alice = Author::new("Alice").unwrap();
    let mut tech_today = Magazine::new("Tech Today", None).unwrap();
    let article = author_repo
        .add_article(&mut alice, &mut tech_today, "AI Trends")
        .unwrap();

    assert!(alice.id().is_some());
    assert!(tech_today.id().is_some());
    assert!(article.id().is_some());
    assert_eq!(article.author().id(), alice.id());
    assert_eq!(article.magazine().id(), tech_today.id());

    let stored = magazine_repo
        .find_by_id(tech_today.id().unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(stored.name(), "Tech Today");
}

fn author_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM authors;", [], |row| row.get(0))
        .unwrap()
}
