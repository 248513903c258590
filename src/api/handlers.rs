//! Request handlers.

use axum::Json;
use serde::Serialize;
use tracing::instrument;

/// Greeting response
#[derive(Serialize)]
pub struct Greeting {
    /// Fixed greeting payload
    pub hello: String,
}

/// Index endpoint
///
/// Returns the fixed greeting payload.
#[instrument]
pub async fn index() -> Json<Greeting> {
    Json(Greeting {
        hello: "world".to_string(),
    })
}
