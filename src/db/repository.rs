//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic. Every
//! entity gets the same CRUD surface plus `create_many` for bulk seeding.

use crate::db::{
    DbResult, ListResult, PageSort,
    models::{Carrier, City, Customer, Transaction, Trip},
};

/// Repository for City operations.
pub trait CityRepository {
    /// Create a new city, returning it with its assigned id.
    async fn create(&self, city: &City) -> DbResult<City>;

    /// Insert many cities in a single transaction.
    ///
    /// Fails on any constraint violation (including a duplicate primary
    /// key), in which case nothing from the batch is committed.
    async fn create_many(&self, cities: &[City]) -> DbResult<Vec<City>>;

    /// Get a city by id.
    async fn get(&self, id: i64) -> DbResult<City>;

    /// Get a page of cities.
    async fn list(&self, page: Option<&PageSort>) -> DbResult<ListResult<City>>;

    /// Count all cities.
    async fn count(&self) -> DbResult<i64>;

    /// Update an existing city.
    async fn update(&self, city: &City) -> DbResult<()>;

    /// Delete a city by id.
    async fn delete(&self, id: i64) -> DbResult<()>;
}

/// Repository for Customer operations.
pub trait CustomerRepository {
    /// Create a new customer, returning it with its assigned id.
    async fn create(&self, customer: &Customer) -> DbResult<Customer>;

    /// Insert many customers in a single transaction.
    async fn create_many(&self, customers: &[Customer]) -> DbResult<Vec<Customer>>;

    /// Get a customer by id.
    async fn get(&self, id: i64) -> DbResult<Customer>;

    /// Get a page of customers.
    async fn list(&self, page: Option<&PageSort>) -> DbResult<ListResult<Customer>>;

    /// Count all customers.
    async fn count(&self) -> DbResult<i64>;

    /// Update an existing customer.
    async fn update(&self, customer: &Customer) -> DbResult<()>;

    /// Delete a customer by id.
    async fn delete(&self, id: i64) -> DbResult<()>;
}

/// Repository for Carrier operations.
pub trait CarrierRepository {
    /// Create a new carrier, returning it with its assigned id.
    async fn create(&self, carrier: &Carrier) -> DbResult<Carrier>;

    /// Insert many carriers in a single transaction.
    async fn create_many(&self, carriers: &[Carrier]) -> DbResult<Vec<Carrier>>;

    /// Get a carrier by id.
    async fn get(&self, id: i64) -> DbResult<Carrier>;

    /// Get a page of carriers.
    async fn list(&self, page: Option<&PageSort>) -> DbResult<ListResult<Carrier>>;

    /// Count all carriers.
    async fn count(&self) -> DbResult<i64>;

    /// Update an existing carrier.
    async fn update(&self, carrier: &Carrier) -> DbResult<()>;

    /// Delete a carrier by id.
    async fn delete(&self, id: i64) -> DbResult<()>;
}

/// Repository for Transaction operations.
pub trait TransactionRepository {
    /// Create a new transaction, returning it with its assigned id.
    async fn create(&self, transaction: &Transaction) -> DbResult<Transaction>;

    /// Insert many transactions in a single transaction scope.
    async fn create_many(&self, transactions: &[Transaction]) -> DbResult<Vec<Transaction>>;

    /// Get a transaction by id.
    async fn get(&self, id: i64) -> DbResult<Transaction>;

    /// Get a page of transactions.
    async fn list(&self, page: Option<&PageSort>) -> DbResult<ListResult<Transaction>>;

    /// Count all transactions.
    async fn count(&self) -> DbResult<i64>;

    /// Update an existing transaction.
    async fn update(&self, transaction: &Transaction) -> DbResult<()>;

    /// Delete a transaction by id.
    async fn delete(&self, id: i64) -> DbResult<()>;
}

/// Repository for Trip operations.
pub trait TripRepository {
    /// Create a new trip, returning it with its assigned id.
    async fn create(&self, trip: &Trip) -> DbResult<Trip>;

    /// Insert many trips in a single transaction.
    async fn create_many(&self, trips: &[Trip]) -> DbResult<Vec<Trip>>;

    /// Get a trip by id.
    async fn get(&self, id: i64) -> DbResult<Trip>;

    /// Get a page of trips.
    async fn list(&self, page: Option<&PageSort>) -> DbResult<ListResult<Trip>>;

    /// Count all trips.
    async fn count(&self) -> DbResult<i64>;

    /// Update an existing trip.
    async fn update(&self, trip: &Trip) -> DbResult<()>;

    /// Delete a trip by id.
    async fn delete(&self, id: i64) -> DbResult<()>;
}

/// Combined database interface: repository accessors plus table lifecycle.
pub trait Database: Send + Sync {
    type Cities<'a>: CityRepository
    where
        Self: 'a;
    type Customers<'a>: CustomerRepository
    where
        Self: 'a;
    type Carriers<'a>: CarrierRepository
    where
        Self: 'a;
    type Transactions<'a>: TransactionRepository
    where
        Self: 'a;
    type Trips<'a>: TripRepository
    where
        Self: 'a;

    /// Check whether any entity tables exist in the connected database.
    ///
    /// Inspects the catalog only; no side effects.
    async fn tables_exist(&self) -> DbResult<bool>;

    /// Create all entity tables.
    ///
    /// Not idempotent: creating over an existing schema fails, so callers
    /// must guard with [`Database::tables_exist`] first.
    async fn create_tables(&self) -> DbResult<()>;

    /// Drop all entity tables, in reverse dependency order.
    async fn drop_tables(&self) -> DbResult<()>;

    /// Get the city repository.
    fn cities(&self) -> Self::Cities<'_>;

    /// Get the customer repository.
    fn customers(&self) -> Self::Customers<'_>;

    /// Get the carrier repository.
    fn carriers(&self) -> Self::Carriers<'_>;

    /// Get the transaction repository.
    fn transactions(&self) -> Self::Transactions<'_>;

    /// Get the trip repository.
    fn trips(&self) -> Self::Trips<'_>;
}
