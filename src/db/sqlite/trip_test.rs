//! Tests for SqliteTripRepository.

use crate::db::{
    Carrier, CarrierRepository, City, CityRepository, Customer, CustomerRepository, Database,
    DbError, Gender, PaymentMethod, SqliteDatabase, Transaction, TransactionRepository, Trip,
    TripRepository,
};

/// Ids of the prerequisite rows a trip references.
struct Fixture {
    transaction_id: i64,
    carrier_id: i64,
    city_id: i64,
}

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.create_tables()
        .await
        .expect("Schema creation should succeed");
    db
}

async fn seed_references(db: &SqliteDatabase) -> Fixture {
    let city_id = db
        .cities()
        .create(&City {
            id: 0,
            name: "Kampala".to_string(),
            population: 1_650_000,
            users: 23_500,
        })
        .await
        .expect("City create should succeed")
        .id;

    let carrier_id = db
        .carriers()
        .create(&Carrier {
            id: 0,
            name: "Pioneer Easy Bus".to_string(),
            contact: None,
        })
        .await
        .expect("Carrier create should succeed")
        .id;

    let customer_id = db
        .customers()
        .create(&Customer {
            id: 0,
            name: "Alice Auma".to_string(),
            gender: Gender::Female,
            age: 34,
        })
        .await
        .expect("Customer create should succeed")
        .id;

    let transaction_id = db
        .transactions()
        .create(&Transaction {
            id: 0,
            customer_id,
            payment_method: PaymentMethod::Mobile,
            amount_cents: 8_500,
        })
        .await
        .expect("Transaction create should succeed")
        .id;

    Fixture {
        transaction_id,
        carrier_id,
        city_id,
    }
}

fn trip(fixture: &Fixture) -> Trip {
    Trip {
        id: 0,
        transaction_id: fixture.transaction_id,
        carrier_id: fixture.carrier_id,
        city_id: fixture.city_id,
        distance_km: 12.5,
        duration_min: 48,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn create_and_get_trip() {
    let db = setup_db().await;
    let fixture = seed_references(&db).await;
    let repo = db.trips();

    let created = repo
        .create(&trip(&fixture))
        .await
        .expect("Create should succeed");

    let retrieved = repo.get(created.id).await.expect("Get should succeed");
    assert_eq!(retrieved.transaction_id, fixture.transaction_id);
    assert_eq!(retrieved.carrier_id, fixture.carrier_id);
    assert_eq!(retrieved.city_id, fixture.city_id);
    assert!((retrieved.distance_km - 12.5).abs() < f64::EPSILON);
    assert_eq!(retrieved.duration_min, 48);
}

#[tokio::test(flavor = "multi_thread")]
async fn trip_transaction_reference_is_unique() {
    let db = setup_db().await;
    let fixture = seed_references(&db).await;
    let repo = db.trips();

    repo.create(&trip(&fixture))
        .await
        .expect("First create should succeed");

    let err = repo
        .create(&trip(&fixture))
        .await
        .expect_err("Second trip on the same transaction should fail");
    assert!(matches!(err, DbError::Constraint { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn trip_requires_existing_references() {
    let db = setup_db().await;
    let repo = db.trips();

    let orphan = Trip {
        id: 0,
        transaction_id: 1,
        carrier_id: 1,
        city_id: 1,
        distance_km: 3.2,
        duration_min: 17,
    };

    let err = repo
        .create(&orphan)
        .await
        .expect_err("Create should fail without referenced rows");
    assert!(matches!(err, DbError::Constraint { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_trip_distance() {
    let db = setup_db().await;
    let fixture = seed_references(&db).await;
    let repo = db.trips();

    let mut created = repo
        .create(&trip(&fixture))
        .await
        .expect("Create should succeed");

    created.distance_km = 14.0;
    created.duration_min = 55;
    repo.update(&created).await.expect("Update should succeed");

    let retrieved = repo.get(created.id).await.expect("Get should succeed");
    assert!((retrieved.distance_km - 14.0).abs() < f64::EPSILON);
    assert_eq!(retrieved.duration_min, 55);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_trip_frees_transaction_reference() {
    let db = setup_db().await;
    let fixture = seed_references(&db).await;
    let repo = db.trips();

    let created = repo
        .create(&trip(&fixture))
        .await
        .expect("Create should succeed");
    repo.delete(created.id).await.expect("Delete should succeed");

    // The one-to-one slot is free again.
    repo.create(&trip(&fixture))
        .await
        .expect("Create after delete should succeed");
}
