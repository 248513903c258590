//! Tests for SqliteTransactionRepository.

use crate::db::{
    Customer, CustomerRepository, Database, DbError, Gender, PaymentMethod, SqliteDatabase,
    Transaction, TransactionRepository,
};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.create_tables()
        .await
        .expect("Schema creation should succeed");
    db
}

async fn seed_customer(db: &SqliteDatabase) -> i64 {
    db.customers()
        .create(&Customer {
            id: 0,
            name: "Alice Auma".to_string(),
            gender: Gender::Female,
            age: 34,
        })
        .await
        .expect("Customer create should succeed")
        .id
}

fn transaction(customer_id: i64, method: PaymentMethod, amount_cents: i64) -> Transaction {
    Transaction {
        id: 0,
        customer_id,
        payment_method: method,
        amount_cents,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn create_and_get_transaction() {
    let db = setup_db().await;
    let customer_id = seed_customer(&db).await;
    let repo = db.transactions();

    let created = repo
        .create(&transaction(customer_id, PaymentMethod::Mobile, 8_500))
        .await
        .expect("Create should succeed");

    let retrieved = repo.get(created.id).await.expect("Get should succeed");
    assert_eq!(retrieved.customer_id, customer_id);
    assert_eq!(retrieved.payment_method, PaymentMethod::Mobile);
    assert_eq!(retrieved.amount_cents, 8_500);
}

#[tokio::test(flavor = "multi_thread")]
async fn transaction_requires_existing_customer() {
    let db = setup_db().await;
    let repo = db.transactions();

    let err = repo
        .create(&transaction(42, PaymentMethod::Cash, 12_000))
        .await
        .expect_err("Create should fail without the referenced customer");
    assert!(matches!(err, DbError::Constraint { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_many_rolls_back_on_missing_customer() {
    let db = setup_db().await;
    let customer_id = seed_customer(&db).await;
    let repo = db.transactions();

    let batch = vec![
        transaction(customer_id, PaymentMethod::Cash, 12_000),
        // References a customer that was never loaded.
        transaction(customer_id + 100, PaymentMethod::Card, 3_000),
    ];

    let err = repo
        .create_many(&batch)
        .await
        .expect_err("Bulk create should fail");
    assert!(matches!(err, DbError::Constraint { .. }));

    assert_eq!(repo.count().await.expect("Count should succeed"), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_transaction_amount() {
    let db = setup_db().await;
    let customer_id = seed_customer(&db).await;
    let repo = db.transactions();

    let mut created = repo
        .create(&transaction(customer_id, PaymentMethod::Card, 3_000))
        .await
        .expect("Create should succeed");

    created.amount_cents = 3_500;
    repo.update(&created).await.expect("Update should succeed");

    let retrieved = repo.get(created.id).await.expect("Get should succeed");
    assert_eq!(retrieved.amount_cents, 3_500);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_transaction() {
    let db = setup_db().await;
    let customer_id = seed_customer(&db).await;
    let repo = db.transactions();

    let created = repo
        .create(&transaction(customer_id, PaymentMethod::Cash, 12_000))
        .await
        .expect("Create should succeed");

    repo.delete(created.id).await.expect("Delete should succeed");

    let err = repo.get(created.id).await.expect_err("Get should fail");
    assert!(matches!(err, DbError::NotFound { .. }));
}
