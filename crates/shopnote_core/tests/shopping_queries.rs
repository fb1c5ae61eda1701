use shopnote_core::db::open_db_in_memory;
use shopnote_core::{
    ItemDraft, RepoError, ResourceRepository, ShoppingListDraft, SqliteShoppingListRepository,
};

fn weekly_groceries() -> ShoppingListDraft {
    ShoppingListDraft {
        name: "Weekly Groceries".to_string(),
        items: vec![
            ItemDraft {
                name: "Milk".to_string(),
                extra_info: None,
                quantity: 2,
            },
            ItemDraft {
                name: "Eggs".to_string(),
                extra_info: Some("dozen".to_string()),
                quantity: 1,
            },
        ],
    }
}

#[test]
fn create_then_find_by_name_preserves_items_in_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteShoppingListRepository::new(&conn);

    let created = repo.create(&weekly_groceries()).unwrap();
    assert!(!created.id.is_nil());

    let found = repo.find_by_key("Weekly Groceries").unwrap();
    assert_eq!(found.len(), 1);
    let list = &found[0];
    assert_eq!(list.id, created.id);
    assert_eq!(list.name, "Weekly Groceries");
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[0].name, "Milk");
    assert_eq!(list.items[0].extra_info, None);
    assert_eq!(list.items[0].quantity, 2);
    assert_eq!(list.items[1].name, "Eggs");
    assert_eq!(list.items[1].extra_info.as_deref(), Some("dozen"));
    assert_eq!(list.items[1].quantity, 1);
}

#[test]
fn create_returns_the_assembled_list_without_a_reread() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteShoppingListRepository::new(&conn);

    let created = repo.create(&weekly_groceries()).unwrap();
    assert_eq!(created.name, "Weekly Groceries");
    assert_eq!(created.items.len(), 2);
    assert_eq!(created.items[0].name, "Milk");
    assert_eq!(created.items[1].name, "Eggs");
}

#[test]
fn duplicate_list_name_is_rejected_as_constraint_violation() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteShoppingListRepository::new(&conn);

    repo.create(&weekly_groceries()).unwrap();
    match repo.create(&weekly_groceries()) {
        Err(RepoError::Constraint(_)) => {}
        other => panic!("expected Constraint error, got {other:?}"),
    }
}

#[test]
fn list_all_on_empty_table_reports_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteShoppingListRepository::new(&conn);

    match repo.list_all() {
        Err(RepoError::NotFound { resource }) => assert_eq!(resource, "shopping lists"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn list_all_attaches_each_lists_own_items() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteShoppingListRepository::new(&conn);

    repo.create(&weekly_groceries()).unwrap();
    repo.create(&ShoppingListDraft {
        name: "Hardware".to_string(),
        items: vec![ItemDraft {
            name: "Nails".to_string(),
            extra_info: Some("40mm".to_string()),
            quantity: 100,
        }],
    })
    .unwrap();

    let lists = repo.list_all().unwrap();
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].name, "Weekly Groceries");
    assert_eq!(lists[0].items.len(), 2);
    assert_eq!(lists[1].name, "Hardware");
    assert_eq!(lists[1].items.len(), 1);
    assert_eq!(lists[1].items[0].name, "Nails");
}

#[test]
fn a_list_with_no_items_is_valid() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteShoppingListRepository::new(&conn);

    let created = repo
        .create(&ShoppingListDraft {
            name: "Empty".to_string(),
            items: Vec::new(),
        })
        .unwrap();
    assert!(created.items.is_empty());

    let found = repo.find_by_key("Empty").unwrap();
    assert!(found[0].items.is_empty());
}

#[test]
fn find_by_name_on_missing_list_reports_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteShoppingListRepository::new(&conn);

    assert!(matches!(
        repo.find_by_key("Nope"),
        Err(RepoError::NotFound { .. })
    ));
}
