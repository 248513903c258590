//! DDL for the entity tables.
//!
//! Statements are deliberately plain `CREATE TABLE` (no `IF NOT EXISTS`):
//! creating over an existing schema must fail, so the guard in
//! `tables_exist` stays meaningful. `transaction` is a reserved word in
//! SQLite, so that identifier is quoted here and in every query touching it.

/// CREATE statements in dependency order: referenced tables come first.
pub(crate) const CREATE_TABLES: [&str; 5] = [
    r#"
    CREATE TABLE city (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        population INTEGER NOT NULL,
        users INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE customer (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        gender TEXT NOT NULL CHECK (gender IN ('female', 'male')),
        age INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE carrier (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        contact TEXT
    )
    "#,
    r#"
    CREATE TABLE "transaction" (
        id INTEGER PRIMARY KEY,
        customer_id INTEGER NOT NULL REFERENCES customer (id),
        payment_method TEXT NOT NULL
            CHECK (payment_method IN ('cash', 'card', 'mobile')),
        amount_cents INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE trip (
        id INTEGER PRIMARY KEY,
        transaction_id INTEGER NOT NULL UNIQUE REFERENCES "transaction" (id),
        carrier_id INTEGER NOT NULL REFERENCES carrier (id),
        city_id INTEGER NOT NULL REFERENCES city (id),
        distance_km REAL NOT NULL,
        duration_min INTEGER NOT NULL
    )
    "#,
];

/// DROP statements in reverse dependency order: referencing tables go first.
pub(crate) const DROP_TABLES: [&str; 5] = [
    r#"DROP TABLE trip"#,
    r#"DROP TABLE "transaction""#,
    r#"DROP TABLE carrier"#,
    r#"DROP TABLE customer"#,
    r#"DROP TABLE city"#,
];
