use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::app_state::AppState;
use crate::system;

/// All application routes
pub fn configure_routes(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Static sales data consumed by the dashboards
        .route("/dados-vendas.json", get(handlers::sales_data::list_all))
        .route("/api/sales-data", get(handlers::sales_data::list_all))
        // D400 Sales Overview Dashboard
        .route(
            "/api/d400/overview",
            post(handlers::d400_sales_overview::get_overview),
        )
        .route(
            "/api/d400/filter-options",
            post(handlers::d400_sales_overview::get_filter_options),
        )
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .with_state(state)
}
