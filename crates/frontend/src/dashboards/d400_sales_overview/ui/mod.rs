pub mod charts;
pub mod dashboard;
pub mod global_filters;

pub use dashboard::SalesDashboard;
pub use global_filters::GlobalFilters;
