//! API route configuration.

use axum::Router;
use axum::routing::get;

use super::handlers;

/// Build the application router.
///
/// The surface is a single index route; everything else in this system is
/// reached through the repositories and the seed CLI.
pub fn create_router() -> Router {
    Router::new().route("/", get(handlers::index))
}
