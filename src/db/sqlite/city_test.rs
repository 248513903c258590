//! Tests for SqliteCityRepository.

use crate::db::{City, CityRepository, Database, DbError, PageSort, SortOrder, SqliteDatabase};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.create_tables()
        .await
        .expect("Schema creation should succeed");
    db
}

fn city(name: &str, population: i64, users: i64) -> City {
    City {
        id: 0,
        name: name.to_string(),
        population,
        users,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_sequential_ids() {
    let db = setup_db().await;
    let repo = db.cities();

    let first = repo
        .create(&city("Kampala", 1_650_000, 23_500))
        .await
        .expect("Create should succeed");
    let second = repo
        .create(&city("Gulu", 152_000, 1_200))
        .await
        .expect("Create should succeed");

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_respects_explicit_id() {
    let db = setup_db().await;
    let repo = db.cities();

    let mut mbarara = city("Mbarara", 195_000, 4_100);
    mbarara.id = 7;

    let created = repo.create(&mbarara).await.expect("Create should succeed");
    assert_eq!(created.id, 7);

    let retrieved = repo.get(7).await.expect("Get should succeed");
    assert_eq!(retrieved.name, "Mbarara");
}

#[tokio::test(flavor = "multi_thread")]
async fn get_nonexistent_city_returns_not_found() {
    let db = setup_db().await;
    let repo = db.cities();

    let err = repo.get(99).await.expect_err("Get should fail");
    assert!(matches!(err, DbError::NotFound { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_many_inserts_all_rows() {
    let db = setup_db().await;
    let repo = db.cities();

    let cities = vec![
        city("Kampala", 1_650_000, 23_500),
        city("Gulu", 152_000, 1_200),
        city("Jinja", 76_000, 980),
    ];

    let inserted = repo
        .create_many(&cities)
        .await
        .expect("Bulk create should succeed");

    assert_eq!(inserted.len(), 3);
    assert_eq!(repo.count().await.expect("Count should succeed"), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_many_duplicate_id_inserts_nothing() {
    let db = setup_db().await;
    let repo = db.cities();

    let mut first = city("Kampala", 1_650_000, 23_500);
    first.id = 1;
    let mut duplicate = city("Gulu", 152_000, 1_200);
    duplicate.id = 1;

    let err = repo
        .create_many(&[first, duplicate])
        .await
        .expect_err("Duplicate primary key should fail");
    assert!(matches!(err, DbError::Constraint { .. }));

    // The whole batch runs in one transaction, so nothing was committed.
    assert_eq!(repo.count().await.expect("Count should succeed"), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_cities_with_sort_and_pagination() {
    let db = setup_db().await;
    let repo = db.cities();

    repo.create_many(&[
        city("Kampala", 1_650_000, 23_500),
        city("Gulu", 152_000, 1_200),
        city("Jinja", 76_000, 980),
    ])
    .await
    .expect("Bulk create should succeed");

    let page = PageSort {
        limit: Some(2),
        offset: None,
        sort_by: Some("population".to_string()),
        sort_order: Some(SortOrder::Desc),
    };

    let result = repo.list(Some(&page)).await.expect("List should succeed");
    assert_eq!(result.total, 3);
    assert_eq!(result.items.len(), 2);
    assert_eq!(result.items[0].name, "Kampala");
    assert_eq!(result.items[1].name, "Gulu");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_city() {
    let db = setup_db().await;
    let repo = db.cities();

    let mut created = repo
        .create(&city("Kampala", 1_650_000, 23_500))
        .await
        .expect("Create should succeed");

    created.users = 24_000;
    repo.update(&created).await.expect("Update should succeed");

    let retrieved = repo.get(created.id).await.expect("Get should succeed");
    assert_eq!(retrieved.users, 24_000);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_nonexistent_city_returns_not_found() {
    let db = setup_db().await;
    let repo = db.cities();

    let mut ghost = city("Atlantis", 0, 0);
    ghost.id = 404;

    let err = repo.update(&ghost).await.expect_err("Update should fail");
    assert!(matches!(err, DbError::NotFound { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_city() {
    let db = setup_db().await;
    let repo = db.cities();

    let created = repo
        .create(&city("Kampala", 1_650_000, 23_500))
        .await
        .expect("Create should succeed");

    repo.delete(created.id).await.expect("Delete should succeed");

    let err = repo.get(created.id).await.expect_err("Get should fail");
    assert!(matches!(err, DbError::NotFound { .. }));
}
