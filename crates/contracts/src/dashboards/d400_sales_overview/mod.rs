pub mod aggregator;
pub mod dto;

pub use aggregator::{aggregate, RANKING_LIMIT};
pub use dto::*;
