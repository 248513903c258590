//! SQLite CustomerRepository implementation.

use std::str::FromStr;

use sqlx::{Row, SqlitePool};

use super::helpers::{build_limit_offset_clause, build_order_clause, map_sqlx_err};
use crate::db::{Customer, CustomerRepository, DbError, DbResult, Gender, ListResult, PageSort};

/// SQLx-backed customer repository.
pub struct SqliteCustomerRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn row_to_customer(row: &sqlx::sqlite::SqliteRow) -> Customer {
    Customer {
        id: row.get("id"),
        name: row.get("name"),
        gender: {
            // The CHECK constraint on the column keeps this infallible in practice.
            let gender_str: String = row.get("gender");
            Gender::from_str(&gender_str).unwrap_or_default()
        },
        age: row.get("age"),
    }
}

impl<'a> CustomerRepository for SqliteCustomerRepository<'a> {
    async fn create(&self, customer: &Customer) -> DbResult<Customer> {
        let result =
            sqlx::query("INSERT INTO customer (id, name, gender, age) VALUES (?, ?, ?, ?)")
                .bind((customer.id != 0).then_some(customer.id))
                .bind(&customer.name)
                .bind(customer.gender.to_string())
                .bind(customer.age)
                .execute(self.pool)
                .await
                .map_err(map_sqlx_err)?;

        Ok(Customer {
            id: result.last_insert_rowid(),
            name: customer.name.clone(),
            gender: customer.gender,
            age: customer.age,
        })
    }

    async fn create_many(&self, customers: &[Customer]) -> DbResult<Vec<Customer>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_err)?;
        let mut inserted = Vec::with_capacity(customers.len());

        for customer in customers {
            let result =
                sqlx::query("INSERT INTO customer (id, name, gender, age) VALUES (?, ?, ?, ?)")
                    .bind((customer.id != 0).then_some(customer.id))
                    .bind(&customer.name)
                    .bind(customer.gender.to_string())
                    .bind(customer.age)
                    .execute(&mut *tx)
                    .await
                    .map_err(map_sqlx_err)?;

            inserted.push(Customer {
                id: result.last_insert_rowid(),
                name: customer.name.clone(),
                gender: customer.gender,
                age: customer.age,
            });
        }

        tx.commit().await.map_err(map_sqlx_err)?;
        Ok(inserted)
    }

    async fn get(&self, id: i64) -> DbResult<Customer> {
        let row = sqlx::query("SELECT id, name, gender, age FROM customer WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(map_sqlx_err)?;

        let row = row.ok_or(DbError::NotFound {
            entity_type: "Customer".to_string(),
            id,
        })?;

        Ok(row_to_customer(&row))
    }

    async fn list(&self, page: Option<&PageSort>) -> DbResult<ListResult<Customer>> {
        let default_page = PageSort::default();
        let page = page.unwrap_or(&default_page);
        let allowed_fields = ["name", "gender", "age"];

        let order_clause = build_order_clause(page, &allowed_fields, "id");
        let limit_clause = build_limit_offset_clause(page);

        let sql = format!(
            "SELECT id, name, gender, age FROM customer {} {}",
            order_clause, limit_clause
        );

        let rows = sqlx::query(&sql)
            .fetch_all(self.pool)
            .await
            .map_err(map_sqlx_err)?;

        let items: Vec<Customer> = rows.iter().map(row_to_customer).collect();

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customer")
            .fetch_one(self.pool)
            .await
            .map_err(map_sqlx_err)?;

        Ok(ListResult {
            items,
            total: total as usize,
            limit: page.limit,
            offset: page.offset.unwrap_or(0),
        })
    }

    async fn count(&self) -> DbResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM customer")
            .fetch_one(self.pool)
            .await
            .map_err(map_sqlx_err)
    }

    async fn update(&self, customer: &Customer) -> DbResult<()> {
        let result = sqlx::query("UPDATE customer SET name = ?, gender = ?, age = ? WHERE id = ?")
            .bind(&customer.name)
            .bind(customer.gender.to_string())
            .bind(customer.age)
            .bind(customer.id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity_type: "Customer".to_string(),
                id: customer.id,
            });
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM customer WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity_type: "Customer".to_string(),
                id,
            });
        }

        Ok(())
    }
}
