//! SQLite CarrierRepository implementation.

use sqlx::{Row, SqlitePool};

use super::helpers::{build_limit_offset_clause, build_order_clause, map_sqlx_err};
use crate::db::{Carrier, CarrierRepository, DbError, DbResult, ListResult, PageSort};

/// SQLx-backed carrier repository.
pub struct SqliteCarrierRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn row_to_carrier(row: &sqlx::sqlite::SqliteRow) -> Carrier {
    Carrier {
        id: row.get("id"),
        name: row.get("name"),
        contact: row.get("contact"),
    }
}

impl<'a> CarrierRepository for SqliteCarrierRepository<'a> {
    async fn create(&self, carrier: &Carrier) -> DbResult<Carrier> {
        let result = sqlx::query("INSERT INTO carrier (id, name, contact) VALUES (?, ?, ?)")
            .bind((carrier.id != 0).then_some(carrier.id))
            .bind(&carrier.name)
            .bind(&carrier.contact)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_err)?;

        Ok(Carrier {
            id: result.last_insert_rowid(),
            name: carrier.name.clone(),
            contact: carrier.contact.clone(),
        })
    }

    async fn create_many(&self, carriers: &[Carrier]) -> DbResult<Vec<Carrier>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_err)?;
        let mut inserted = Vec::with_capacity(carriers.len());

        for carrier in carriers {
            let result = sqlx::query("INSERT INTO carrier (id, name, contact) VALUES (?, ?, ?)")
                .bind((carrier.id != 0).then_some(carrier.id))
                .bind(&carrier.name)
                .bind(&carrier.contact)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_err)?;

            inserted.push(Carrier {
                id: result.last_insert_rowid(),
                name: carrier.name.clone(),
                contact: carrier.contact.clone(),
            });
        }

        tx.commit().await.map_err(map_sqlx_err)?;
        Ok(inserted)
    }

    async fn get(&self, id: i64) -> DbResult<Carrier> {
        let row = sqlx::query("SELECT id, name, contact FROM carrier WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(map_sqlx_err)?;

        let row = row.ok_or(DbError::NotFound {
            entity_type: "Carrier".to_string(),
            id,
        })?;

        Ok(row_to_carrier(&row))
    }

    async fn list(&self, page: Option<&PageSort>) -> DbResult<ListResult<Carrier>> {
        let default_page = PageSort::default();
        let page = page.unwrap_or(&default_page);
        let allowed_fields = ["name", "contact"];

        let order_clause = build_order_clause(page, &allowed_fields, "id");
        let limit_clause = build_limit_offset_clause(page);

        let sql = format!(
            "SELECT id, name, contact FROM carrier {} {}",
            order_clause, limit_clause
        );

        let rows = sqlx::query(&sql)
            .fetch_all(self.pool)
            .await
            .map_err(map_sqlx_err)?;

        let items: Vec<Carrier> = rows.iter().map(row_to_carrier).collect();

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM carrier")
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
        sqlx::query_scalar("SELECT COUNT(*) FROM carrier")
            .fetch_one(self.pool)
            .await
            .map_err(map_sqlx_err)
    }

    async fn update(&self, carrier: &Carrier) -> DbResult<()> {
        let result = sqlx::query("UPDATE carrier SET name = ?, contact = ? WHERE id = ?")
            .bind(&carrier.name)
            .bind(&carrier.contact)
            .bind(carrier.id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity_type: "Carrier".to_string(),
                id: carrier.id,
            });
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM carrier WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity_type: "Carrier".to_string(),
                id,
            });
        }

        Ok(())
    }
}
