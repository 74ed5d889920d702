use folio_core::db::open_db_in_memory;
use folio_core::{
    NewProject, ProjectListQuery, ProjectRepository, RepoError, SqliteProjectRepository,
};
use rusqlite::Connection;

fn draft(title: &str, tags: Option<&[&str]>, is_public: bool) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: None,
        tags: tags.map(|values| values.iter().map(|tag| (*tag).to_string()).collect()),
        media_urls: None,
        is_public,
    }
}

#[test]
fn create_and_get_preserves_optional_fields() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteProjectRepository::try_new(&mut conn).unwrap();

    let mut full = draft("Full", Some(&["Design", "AI"]), true);
    full.description = Some("has everything".to_string());
    full.media_urls = Some(vec!["cover.jpg".to_string(), "two.jpg".to_string()]);
    let full_id = repo.create_project(&full).unwrap();

    let bare_id = repo.create_project(&draft("Bare", None, false)).unwrap();
    let empty_id = repo.create_project(&draft("Empty", Some(&[]), false)).unwrap();

    let loaded = repo.get_project(full_id).unwrap().unwrap();
    assert_eq!(loaded.title, "Full");
    assert_eq!(loaded.description.as_deref(), Some("has everything"));
    assert_eq!(loaded.tags, Some(vec!["Design".to_string(), "AI".to_string()]));
    assert_eq!(loaded.media_list(), ["cover.jpg", "two.jpg"]);
    assert!(loaded.is_public);
    assert!(loaded.created_at > 0);

    assert_eq!(repo.get_project(bare_id).unwrap().unwrap().tags, None);
    assert_eq!(
        repo.get_project(empty_id).unwrap().unwrap().tags,
        Some(Vec::new())
    );
    assert!(repo.get_project(9_999).unwrap().is_none());
}

#[test]
fn create_rejects_invalid_drafts_before_sql() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteProjectRepository::try_new(&mut conn).unwrap();

    let err = repo.create_project(&draft("  ", None, false)).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[test]
fn list_keeps_insertion_order_and_filters_by_tag_and_visibility() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteProjectRepository::try_new(&mut conn).unwrap();
    repo.create_project(&draft("First", Some(&["AI"]), true)).unwrap();
    repo.create_project(&draft("Second", Some(&["ai"]), true)).unwrap();
    repo.create_project(&draft("Third", Some(&["AI", "Art"]), false))
        .unwrap();

    let all = repo.list_projects(&ProjectListQuery::default()).unwrap();
    let titles: Vec<_> = all.iter().map(|project| project.title.as_str()).collect();
    assert_eq!(titles, ["First", "Second", "Third"]);

    let tagged = repo
        .list_projects(&ProjectListQuery {
            tag: Some("AI".to_string()),
            public_only: false,
        })
        .unwrap();
    let titles: Vec<_> = tagged.iter().map(|project| project.title.as_str()).collect();
    assert_eq!(titles, ["First", "Third"]);

    let public_tagged = repo
        .list_projects(&ProjectListQuery {
            tag: Some("AI".to_string()),
            public_only: true,
        })
        .unwrap();
    assert_eq!(public_tagged.len(), 1);
    assert_eq!(public_tagged[0].title, "First");
}

#[test]
fn list_tags_is_distinct_and_sorted() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteProjectRepository::try_new(&mut conn).unwrap();
    repo.create_project(&draft("a", Some(&["B", "A"]), true)).unwrap();
    repo.create_project(&draft("b", Some(&["C", "B"]), true)).unwrap();
    repo.create_project(&draft("c", None, true)).unwrap();

    assert_eq!(repo.list_tags().unwrap(), ["A", "B", "C"]);
}

#[test]
fn delete_all_reports_removed_rows_and_empties_the_table() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteProjectRepository::try_new(&mut conn).unwrap();
    repo.create_project(&draft("one", None, true)).unwrap();
    repo.create_project(&draft("two", Some(&["AI"]), false)).unwrap();
    repo.create_project(&draft("three", None, true)).unwrap();

    assert_eq!(repo.delete_all_projects().unwrap(), 3);
    assert!(repo
        .list_projects(&ProjectListQuery::default())
        .unwrap()
        .is_empty());
    assert!(repo.list_tags().unwrap().is_empty());

    assert_eq!(repo.delete_all_projects().unwrap(), 0);
}

#[test]
fn replace_all_swaps_content_in_one_step() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteProjectRepository::try_new(&mut conn).unwrap();
    repo.create_project(&draft("old one", None, true)).unwrap();
    repo.create_project(&draft("old two", None, true)).unwrap();

    let (removed, ids) = repo
        .replace_all_projects(&[draft("new", None, true)])
        .unwrap();
    assert_eq!(removed, 2);
    assert_eq!(ids.len(), 1);

    let all = repo.list_projects(&ProjectListQuery::default()).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "new");
}

#[test]
fn replace_all_with_invalid_draft_keeps_existing_rows() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteProjectRepository::try_new(&mut conn).unwrap();
    repo.create_project(&draft("kept", None, true)).unwrap();

    let err = repo
        .replace_all_projects(&[draft("fine", None, true), draft("", None, true)])
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(
        repo.list_projects(&ProjectListQuery::default()).unwrap().len(),
        1
    );
}

#[test]
fn corrupt_tag_json_is_reported_not_masked() {
    let mut conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO projects (title, tags) VALUES ('broken', '{\"not\":\"a list\"}');",
        [],
    )
    .unwrap();

    let repo = SqliteProjectRepository::try_new(&mut conn).unwrap();
    let err = repo.list_projects(&ProjectListQuery::default()).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn try_new_requires_migrated_connection() {
    let mut conn = Connection::open_in_memory().unwrap();
    assert!(SqliteProjectRepository::try_new(&mut conn).is_err());
}
