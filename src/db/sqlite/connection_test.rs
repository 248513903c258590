//! Tests for SqliteDatabase connection and table lifecycle.

use crate::db::{Database, DbError, SqliteDatabase};

#[tokio::test(flavor = "multi_thread")]
async fn tables_exist_false_on_fresh_database() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    let exist = db.tables_exist().await.expect("Check should succeed");
    assert!(!exist);
}

#[tokio::test(flavor = "multi_thread")]
async fn tables_exist_true_after_create_tables() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.create_tables()
        .await
        .expect("Schema creation should succeed");

    let exist = db.tables_exist().await.expect("Check should succeed");
    assert!(exist);
}

#[tokio::test(flavor = "multi_thread")]
async fn tables_exist_false_after_drop_tables() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.create_tables()
        .await
        .expect("Schema creation should succeed");
    db.drop_tables().await.expect("Schema drop should succeed");

    let exist = db.tables_exist().await.expect("Check should succeed");
    assert!(!exist);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_tables_is_not_idempotent() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.create_tables()
        .await
        .expect("First creation should succeed");

    let err = db
        .create_tables()
        .await
        .expect_err("Second creation should fail");
    assert!(matches!(err, DbError::Schema { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn drop_tables_on_empty_schema_fails() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    let err = db
        .drop_tables()
        .await
        .expect_err("Dropping absent tables should fail");
    assert!(matches!(err, DbError::Schema { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn foreign_keys_are_enforced() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
        .fetch_one(db.pool())
        .await
        .expect("Pragma query should succeed");
    assert_eq!(enabled, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn open_creates_database_file() {
    let tmp = tempfile::tempdir().expect("Failed to create temp dir");
    let path = tmp.path().join("trips.sqlite");

    let db = SqliteDatabase::open(&path)
        .await
        .expect("Open should succeed");
    db.create_tables()
        .await
        .expect("Schema creation should succeed");

    assert!(path.exists());
}
