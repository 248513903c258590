//! SQLite TripRepository implementation.

use sqlx::{Row, SqlitePool};

use super::helpers::{build_limit_offset_clause, build_order_clause, map_sqlx_err};
use crate::db::{DbError, DbResult, ListResult, PageSort, Trip, TripRepository};

/// SQLx-backed trip repository.
pub struct SqliteTripRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn row_to_trip(row: &sqlx::sqlite::SqliteRow) -> Trip {
    Trip {
        id: row.get("id"),
        transaction_id: row.get("transaction_id"),
        carrier_id: row.get("carrier_id"),
        city_id: row.get("city_id"),
        distance_km: row.get("distance_km"),
        duration_min: row.get("duration_min"),
    }
}

impl<'a> TripRepository for SqliteTripRepository<'a> {
    async fn create(&self, trip: &Trip) -> DbResult<Trip> {
        let result = sqlx::query(
            r#"
            INSERT INTO trip (id, transaction_id, carrier_id, city_id, distance_km, duration_min)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind((trip.id != 0).then_some(trip.id))
        .bind(trip.transaction_id)
        .bind(trip.carrier_id)
        .bind(trip.city_id)
        .bind(trip.distance_km)
        .bind(trip.duration_min)
        .execute(self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(Trip {
            id: result.last_insert_rowid(),
            transaction_id: trip.transaction_id,
            carrier_id: trip.carrier_id,
            city_id: trip.city_id,
            distance_km: trip.distance_km,
            duration_min: trip.duration_min,
        })
    }

    async fn create_many(&self, trips: &[Trip]) -> DbResult<Vec<Trip>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_err)?;
        let mut inserted = Vec::with_capacity(trips.len());

        for trip in trips {
            let result = sqlx::query(
                r#"
                INSERT INTO trip (id, transaction_id, carrier_id, city_id, distance_km, duration_min)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind((trip.id != 0).then_some(trip.id))
            .bind(trip.transaction_id)
            .bind(trip.carrier_id)
            .bind(trip.city_id)
            .bind(trip.distance_km)
            .bind(trip.duration_min)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_err)?;

            inserted.push(Trip {
                id: result.last_insert_rowid(),
                transaction_id: trip.transaction_id,
                carrier_id: trip.carrier_id,
                city_id: trip.city_id,
                distance_km: trip.distance_km,
                duration_min: trip.duration_min,
            });
        }

        tx.commit().await.map_err(map_sqlx_err)?;
        Ok(inserted)
    }

    async fn get(&self, id: i64) -> DbResult<Trip> {
        let row = sqlx::query(
            "SELECT id, transaction_id, carrier_id, city_id, distance_km, duration_min
             FROM trip WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(map_sqlx_err)?;

        let row = row.ok_or(DbError::NotFound {
            entity_type: "Trip".to_string(),
            id,
        })?;

        Ok(row_to_trip(&row))
    }

    async fn list(&self, page: Option<&PageSort>) -> DbResult<ListResult<Trip>> {
        let default_page = PageSort::default();
        let page = page.unwrap_or(&default_page);
        let allowed_fields = ["distance_km", "duration_min"];

        let order_clause = build_order_clause(page, &allowed_fields, "id");
        let limit_clause = build_limit_offset_clause(page);

        let sql = format!(
            "SELECT id, transaction_id, carrier_id, city_id, distance_km, duration_min
             FROM trip {} {}",
            order_clause, limit_clause
        );

        let rows = sqlx::query(&sql)
            .fetch_all(self.pool)
            .await
            .map_err(map_sqlx_err)?;

        let items: Vec<Trip> = rows.iter().map(row_to_trip).collect();

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM trip")
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
        sqlx::query_scalar("SELECT COUNT(*) FROM trip")
            .fetch_one(self.pool)
            .await
            .map_err(map_sqlx_err)
    }

    async fn update(&self, trip: &Trip) -> DbResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE trip
            SET transaction_id = ?, carrier_id = ?, city_id = ?, distance_km = ?, duration_min = ?
            WHERE id = ?
            "#,
        )
        .bind(trip.transaction_id)
        .bind(trip.carrier_id)
        .bind(trip.city_id)
        .bind(trip.distance_km)
        .bind(trip.duration_min)
        .bind(trip.id)
        .execute(self.pool)
        .await
        .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity_type: "Trip".to_string(),
                id: trip.id,
            });
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM trip WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity_type: "Trip".to_string(),
                id,
            });
        }

        Ok(())
    }
}
