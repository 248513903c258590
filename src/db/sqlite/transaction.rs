//! SQLite TransactionRepository implementation.
//!
//! `transaction` is a reserved word in SQLite; the table identifier stays
//! double-quoted in every statement below.

use std::str::FromStr;

use sqlx::{Row, SqlitePool};

use super::helpers::{build_limit_offset_clause, build_order_clause, map_sqlx_err};
use crate::db::{
    DbError, DbResult, ListResult, PageSort, PaymentMethod, Transaction, TransactionRepository,
};

/// SQLx-backed transaction repository.
pub struct SqliteTransactionRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn row_to_transaction(row: &sqlx::sqlite::SqliteRow) -> Transaction {
    Transaction {
        id: row.get("id"),
        customer_id: row.get("customer_id"),
        payment_method: {
            // The CHECK constraint on the column keeps this infallible in practice.
            let method_str: String = row.get("payment_method");
            PaymentMethod::from_str(&method_str).unwrap_or_default()
        },
        amount_cents: row.get("amount_cents"),
    }
}

impl<'a> TransactionRepository for SqliteTransactionRepository<'a> {
    async fn create(&self, transaction: &Transaction) -> DbResult<Transaction> {
        let result = sqlx::query(
            r#"INSERT INTO "transaction" (id, customer_id, payment_method, amount_cents)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind((transaction.id != 0).then_some(transaction.id))
        .bind(transaction.customer_id)
        .bind(transaction.payment_method.to_string())
        .bind(transaction.amount_cents)
        .execute(self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(Transaction {
            id: result.last_insert_rowid(),
            customer_id: transaction.customer_id,
            payment_method: transaction.payment_method,
            amount_cents: transaction.amount_cents,
        })
    }

    async fn create_many(&self, transactions: &[Transaction]) -> DbResult<Vec<Transaction>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_err)?;
        let mut inserted = Vec::with_capacity(transactions.len());

        for transaction in transactions {
            let result = sqlx::query(
                r#"INSERT INTO "transaction" (id, customer_id, payment_method, amount_cents)
                   VALUES (?, ?, ?, ?)"#,
            )
            .bind((transaction.id != 0).then_some(transaction.id))
            .bind(transaction.customer_id)
            .bind(transaction.payment_method.to_string())
            .bind(transaction.amount_cents)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_err)?;

            inserted.push(Transaction {
                id: result.last_insert_rowid(),
                customer_id: transaction.customer_id,
                payment_method: transaction.payment_method,
                amount_cents: transaction.amount_cents,
            });
        }

        tx.commit().await.map_err(map_sqlx_err)?;
        Ok(inserted)
    }

    async fn get(&self, id: i64) -> DbResult<Transaction> {
        let row = sqlx::query(
            r#"SELECT id, customer_id, payment_method, amount_cents
               FROM "transaction" WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(map_sqlx_err)?;

        let row = row.ok_or(DbError::NotFound {
            entity_type: "Transaction".to_string(),
            id,
        })?;

        Ok(row_to_transaction(&row))
    }

    async fn list(&self, page: Option<&PageSort>) -> DbResult<ListResult<Transaction>> {
        let default_page = PageSort::default();
        let page = page.unwrap_or(&default_page);
        let allowed_fields = ["payment_method", "amount_cents"];

        let order_clause = build_order_clause(page, &allowed_fields, "id");
        let limit_clause = build_limit_offset_clause(page);

        let sql = format!(
            r#"SELECT id, customer_id, payment_method, amount_cents FROM "transaction" {} {}"#,
            order_clause, limit_clause
        );

        let rows = sqlx::query(&sql)
            .fetch_all(self.pool)
            .await
            .map_err(map_sqlx_err)?;

        let items: Vec<Transaction> = rows.iter().map(row_to_transaction).collect();

        let total: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "transaction""#)
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
        sqlx::query_scalar(r#"SELECT COUNT(*) FROM "transaction""#)
            .fetch_one(self.pool)
            .await
            .map_err(map_sqlx_err)
    }

    async fn update(&self, transaction: &Transaction) -> DbResult<()> {
        let result = sqlx::query(
            r#"UPDATE "transaction"
               SET customer_id = ?, payment_method = ?, amount_cents = ?
               WHERE id = ?"#,
        )
        .bind(transaction.customer_id)
        .bind(transaction.payment_method.to_string())
        .bind(transaction.amount_cents)
        .bind(transaction.id)
        .execute(self.pool)
        .await
        .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity_type: "Transaction".to_string(),
                id: transaction.id,
            });
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query(r#"DELETE FROM "transaction" WHERE id = ?"#)
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity_type: "Transaction".to_string(),
                id,
            });
        }

        Ok(())
    }
}
