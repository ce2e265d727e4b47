use contracts::domain::a001_sales_record::SalesRecord;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Static sales file served next to the app
const SALES_DATA_PATH: &str = "/dados-vendas.json";

/// Fetch the full list of sales records
pub async fn fetch_sales_data() -> Result<Vec<SalesRecord>, String> {
    let response = Request::get(&api_url(SALES_DATA_PATH))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<SalesRecord>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Same as [`fetch_sales_data`], but failures are logged and give an empty list.
///
/// Each dashboard calls this on mount; nothing is cached between them.
pub async fn load_sales_data() -> Vec<SalesRecord> {
    match fetch_sales_data().await {
        Ok(records) => {
            log::debug!("Loaded {} sales records", records.len());
            records
        }
        Err(err) => {
            log::error!("Erro ao carregar dados: {}", err);
            Vec::new()
        }
    }
}
