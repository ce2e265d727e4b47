use contracts::dashboards::d400_sales_overview::{aggregate, SalesOverview, SalesOverviewRequest};
use contracts::domain::a001_sales_record::SalesRecord;
use contracts::shared::filters::{FilterOptions, FilterSelection};

use crate::shared::config::DataConfig;
use crate::shared::data::sales_source;

/// Sales overview for one dimension, computed over freshly loaded records
pub async fn get_overview(config: &DataConfig, request: SalesOverviewRequest) -> SalesOverview {
    let records = sales_source::load_or_empty(config).await;
    build_overview(&records, &request)
}

pub fn build_overview(records: &[SalesRecord], request: &SalesOverviewRequest) -> SalesOverview {
    aggregate(records, &request.filters, request.dimension)
}

/// Values for the global filter controls
///
/// The selection only matters for the client list, which is limited to the
/// selected states.
pub async fn get_filter_options(config: &DataConfig, selection: FilterSelection) -> FilterOptions {
    let records = sales_source::load_or_empty(config).await;
    FilterOptions::from_records(&records, &selection)
}
