//! SQLite CityRepository implementation.

use sqlx::{Row, SqlitePool};

use super::helpers::{build_limit_offset_clause, build_order_clause, map_sqlx_err};
use crate::db::{City, CityRepository, DbError, DbResult, ListResult, PageSort};

/// SQLx-backed city repository.
pub struct SqliteCityRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn row_to_city(row: &sqlx::sqlite::SqliteRow) -> City {
    City {
        id: row.get("id"),
        name: row.get("name"),
        population: row.get("population"),
        users: row.get("users"),
    }
}

impl<'a> CityRepository for SqliteCityRepository<'a> {
    async fn create(&self, city: &City) -> DbResult<City> {
        let result =
            sqlx::query("INSERT INTO city (id, name, population, users) VALUES (?, ?, ?, ?)")
                .bind((city.id != 0).then_some(city.id))
                .bind(&city.name)
                .bind(city.population)
                .bind(city.users)
                .execute(self.pool)
                .await
                .map_err(map_sqlx_err)?;

        Ok(City {
            id: result.last_insert_rowid(),
            name: city.name.clone(),
            population: city.population,
            users: city.users,
        })
    }

    async fn create_many(&self, cities: &[City]) -> DbResult<Vec<City>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_err)?;
        let mut inserted = Vec::with_capacity(cities.len());

        for city in cities {
            let result =
                sqlx::query("INSERT INTO city (id, name, population, users) VALUES (?, ?, ?, ?)")
                    .bind((city.id != 0).then_some(city.id))
                    .bind(&city.name)
                    .bind(city.population)
                    .bind(city.users)
                    .execute(&mut *tx)
                    .await
                    .map_err(map_sqlx_err)?;

            inserted.push(City {
                id: result.last_insert_rowid(),
                name: city.name.clone(),
                population: city.population,
                users: city.users,
            });
        }

        tx.commit().await.map_err(map_sqlx_err)?;
        Ok(inserted)
    }

    async fn get(&self, id: i64) -> DbResult<City> {
        let row = sqlx::query("SELECT id, name, population, users FROM city WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(map_sqlx_err)?;

        let row = row.ok_or(DbError::NotFound {
            entity_type: "City".to_string(),
            id,
        })?;

        Ok(row_to_city(&row))
    }

    async fn list(&self, page: Option<&PageSort>) -> DbResult<ListResult<City>> {
        let default_page = PageSort::default();
        let page = page.unwrap_or(&default_page);
        let allowed_fields = ["name", "population", "users"];

        let order_clause = build_order_clause(page, &allowed_fields, "id");
        let limit_clause = build_limit_offset_clause(page);

        let sql = format!(
            "SELECT id, name, population, users FROM city {} {}",
            order_clause, limit_clause
        );

        let rows = sqlx::query(&sql)
            .fetch_all(self.pool)
            .await
            .map_err(map_sqlx_err)?;

        let items: Vec<City> = rows.iter().map(row_to_city).collect();

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM city")
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
        sqlx::query_scalar("SELECT COUNT(*) FROM city")
            .fetch_one(self.pool)
            .await
            .map_err(map_sqlx_err)
    }

    async fn update(&self, city: &City) -> DbResult<()> {
        let result = sqlx::query("UPDATE city SET name = ?, population = ?, users = ? WHERE id = ?")
            .bind(&city.name)
            .bind(city.population)
            .bind(city.users)
            .bind(city.id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity_type: "City".to_string(),
                id: city.id,
            });
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM city WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity_type: "City".to_string(),
                id,
            });
        }

        Ok(())
    }
}
