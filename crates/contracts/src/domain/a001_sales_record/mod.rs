pub mod aggregate;

pub use aggregate::{Month, MonthEntry, SalesRecord};
