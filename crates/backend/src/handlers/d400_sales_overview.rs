use axum::{extract::State, Json};
use contracts::dashboards::d400_sales_overview::{SalesOverview, SalesOverviewRequest};
use contracts::shared::filters::{FilterOptions, FilterSelection};

use crate::dashboards::d400_sales_overview::service;
use crate::shared::app_state::AppState;

/// POST /api/d400/overview
pub async fn get_overview(
    State(state): State<AppState>,
    Json(request): Json<SalesOverviewRequest>,
) -> Json<SalesOverview> {
    tracing::info!(
        "D400 Dashboard: overview by {:?}, {} active filters",
        request.dimension,
        request.filters.active_count()
    );

    let overview = service::get_overview(state.data(), request).await;

    tracing::info!(
        "D400 Dashboard: returning {} rows, total {:.2}",
        overview.rows.len(),
        overview.total_amount
    );
    Json(overview)
}

/// POST /api/d400/filter-options
pub async fn get_filter_options(
    State(state): State<AppState>,
    Json(selection): Json<FilterSelection>,
) -> Json<FilterOptions> {
    let options = service::get_filter_options(state.data(), selection).await;
    tracing::info!(
        "D400 Dashboard: {} states, {} clients, {} products available",
        options.states.len(),
        options.clients.len(),
        options.products.len()
    );
    Json(options)
}
