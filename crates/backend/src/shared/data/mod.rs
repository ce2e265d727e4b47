pub mod sales_source;
