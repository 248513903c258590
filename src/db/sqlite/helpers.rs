//! Shared helper functions for SQLite repositories.

use crate::db::{DbError, PageSort, SortOrder};

/// Validate and map a sort field to the actual column name.
/// Returns None for invalid fields (falls back to default).
pub fn validate_sort_field(field: &str, allowed: &[&str]) -> Option<&'static str> {
    for &allowed_field in allowed {
        if field == allowed_field {
            // Return static str to avoid lifetime issues
            return match field {
                "name" => Some("name"),
                "population" => Some("population"),
                "users" => Some("users"),
                "gender" => Some("gender"),
                "age" => Some("age"),
                "contact" => Some("contact"),
                "payment_method" => Some("payment_method"),
                "amount_cents" => Some("amount_cents"),
                "distance_km" => Some("distance_km"),
                "duration_min" => Some("duration_min"),
                _ => None,
            };
        }
    }
    None
}

/// Build ORDER BY clause from PageSort parameters.
pub fn build_order_clause(page: &PageSort, allowed_fields: &[&str], default_field: &str) -> String {
    let sort_field = page
        .sort_by
        .as_deref()
        .and_then(|f| validate_sort_field(f, allowed_fields))
        .unwrap_or(default_field);

    let order = match page.sort_order.unwrap_or(SortOrder::Asc) {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    };

    format!("ORDER BY {} {}", sort_field, order)
}

/// Build LIMIT/OFFSET clause from PageSort parameters.
/// Note: SQL requires LIMIT when using OFFSET. If offset is provided without
/// limit, we use LIMIT -1 (SQLite's "no limit" value).
pub fn build_limit_offset_clause(page: &PageSort) -> String {
    let mut clause = String::new();

    let has_offset = page.offset.is_some_and(|o| o > 0);

    if let Some(limit) = page.limit {
        clause.push_str(&format!(" LIMIT {}", limit));
    } else if has_offset {
        clause.push_str(" LIMIT -1");
    }

    if has_offset {
        clause.push_str(&format!(" OFFSET {}", page.offset.unwrap_or(0)));
    }

    clause
}

/// Map a sqlx error onto the storage-agnostic error type.
///
/// Constraint failures (unique, foreign key, check) keep their own variant so
/// callers can tell a rejected row from an unavailable database.
pub fn map_sqlx_err(e: sqlx::Error) -> DbError {
    match &e {
        sqlx::Error::Database(db)
            if db.is_unique_violation()
                || db.is_foreign_key_violation()
                || db.is_check_violation() =>
        {
            DbError::Constraint {
                message: db.message().to_string(),
            }
        }
        _ => DbError::Database {
            message: e.to_string(),
        },
    }
}
