//! HTTP route definitions

use crate::api::handlers;
use crate::web::pages;
use axum::handler::HandlerWithoutStateExt;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Create the main application router.
///
/// Unmatched paths fall through to the static file service, which serves
/// files from the public directory at the web root and renders the 404 page
/// when nothing matches. Mismatched methods also get the 404 page rather
/// than a bare 405: known paths via a method-level fallback on each route,
/// unknown paths via `call_fallback_on_method_not_allowed` on the static
/// service.
pub fn create_router(state: Arc<crate::AppState>) -> Router {
    let api_routes = Router::new()
        .route(
            "/sales",
            get(handlers::list_sales).fallback(pages::not_found),
        )
        .route(
            "/users",
            get(handlers::list_users).fallback(pages::not_found),
        );

    let static_files = ServeDir::new(&state.settings.static_files.dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(pages::not_found.into_service());

    Router::new()
        .route("/", get(pages::index).fallback(pages::not_found))
        .route(
            "/dashboard",
            get(pages::dashboard).fallback(pages::not_found),
        )
        .route(
            "/health",
            get(handlers::health_check).fallback(pages::not_found),
        )
        .nest("/api", api_routes)
        .fallback_service(static_files)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
