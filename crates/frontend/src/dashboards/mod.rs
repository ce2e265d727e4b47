pub mod d400_sales_overview;

pub use d400_sales_overview::ui::{GlobalFilters, SalesDashboard};
