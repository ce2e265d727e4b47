use axum::{extract::State, Json};
use contracts::domain::a001_sales_record::SalesRecord;

use crate::shared::app_state::AppState;
use crate::shared::data::sales_source;

/// GET /dados-vendas.json, GET /api/sales-data
///
/// Raw record list the dashboards aggregate on their own. A broken source
/// answers with an empty list.
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<SalesRecord>> {
    Json(sales_source::load_or_empty(state.data()).await)
}
