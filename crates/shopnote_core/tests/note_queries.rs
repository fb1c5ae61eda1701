use chrono::{TimeZone, Utc};
use shopnote_core::db::open_db_in_memory;
use shopnote_core::{NoteDraft, RepoError, ResourceRepository, SqliteNoteRepository};

fn draft(title: &str, content: &str) -> NoteDraft {
    NoteDraft {
        title: title.to_string(),
        content: content.to_string(),
        create_date: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        modified_date: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    }
}

#[test]
fn create_then_find_by_title_returns_the_created_note() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let input = draft("Groceries plan", "remember the market");
    let created = repo.create(&input).unwrap();
    assert!(!created.id.is_nil());
    assert_eq!(created.title, input.title);
    assert_eq!(created.content, input.content);
    assert_eq!(created.create_date, input.create_date);

    let found = repo.find_by_key("Groceries plan").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0], created);
}

#[test]
fn list_all_on_empty_table_reports_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    match repo.list_all() {
        Err(RepoError::NotFound { resource }) => assert_eq!(resource, "notes"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn list_all_returns_notes_in_creation_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let first = repo.create(&draft("first", "a")).unwrap();
    let second = repo.create(&draft("second", "b")).unwrap();

    let listed = repo.list_all().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[1].id, second.id);
}

#[test]
fn find_by_title_is_exact_and_case_sensitive() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    repo.create(&draft("Milk", "whole")).unwrap();

    assert!(matches!(
        repo.find_by_key("milk"),
        Err(RepoError::NotFound { .. })
    ));
    assert!(matches!(
        repo.find_by_key("Mil"),
        Err(RepoError::NotFound { .. })
    ));
    assert_eq!(repo.find_by_key("Milk").unwrap().len(), 1);
}

#[test]
fn find_by_title_returns_all_matches_when_title_repeats() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    repo.create(&draft("daily", "monday")).unwrap();
    repo.create(&draft("daily", "tuesday")).unwrap();
    repo.create(&draft("weekly", "sunday")).unwrap();

    let found = repo.find_by_key("daily").unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].content, "monday");
    assert_eq!(found[1].content, "tuesday");
}

#[test]
fn created_note_roundtrips_dates_through_storage() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let input = draft("dated", "body");
    let created = repo.create(&input).unwrap();

    let listed = repo.list_all().unwrap();
    assert_eq!(listed[0].create_date, input.create_date);
    assert_eq!(listed[0].modified_date, input.modified_date);
    assert_eq!(listed[0].id, created.id);
}
