use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::a001_sales_record::{Month, SalesRecord};
use crate::shared::filters::FilterSelection;

/// Dimension the overview groups sales by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    #[default]
    State,
    Client,
    Product,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::State, Dimension::Client, Dimension::Product];

    /// Grouping key of a record for this dimension
    pub fn key_of<'a>(&self, record: &'a SalesRecord) -> &'a str {
        match self {
            Dimension::State => &record.state,
            Dimension::Client => &record.client,
            Dimension::Product => &record.product,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::State => "UF",
            Dimension::Client => "Cliente",
            Dimension::Product => "Produto",
        }
    }

    /// Used for the "distinct count" card and the ranking title
    pub fn plural_label(&self) -> &'static str {
        match self {
            Dimension::State => "Estados",
            Dimension::Client => "Clientes",
            Dimension::Product => "Produtos",
        }
    }

    /// Stable identifier used for tab keys and DOM ids
    pub fn code(&self) -> &'static str {
        match self {
            Dimension::State => "uf",
            Dimension::Client => "cliente",
            Dimension::Product => "produto",
        }
    }
}

/// Request body for POST /api/d400/overview
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesOverviewRequest {
    #[serde(default)]
    pub dimension: Dimension,
    #[serde(default)]
    pub filters: FilterSelection,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthTotals {
    pub quantity: f64,
    pub amount: f64,
}

impl MonthTotals {
    pub fn add(&mut self, quantity: f64, amount: f64) {
        self.quantity += quantity;
        self.amount += amount;
    }
}

/// Rollup of one dimension value (a UF, a client or a product)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionRow {
    pub key: String,
    /// Month code -> totals for that month
    pub months: BTreeMap<String, MonthTotals>,
    pub total_quantity: f64,
    pub total_amount: f64,
}

impl DimensionRow {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            months: BTreeMap::new(),
            total_quantity: 0.0,
            total_amount: 0.0,
        }
    }

    pub fn amount_in(&self, month_code: &str) -> f64 {
        self.month(month_code).map(|m| m.amount).unwrap_or(0.0)
    }

    pub fn quantity_in(&self, month_code: &str) -> f64 {
        self.month(month_code).map(|m| m.quantity).unwrap_or(0.0)
    }

    fn month(&self, month_code: &str) -> Option<&MonthTotals> {
        self.months.get(&Month::normalize_code(month_code))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub key: String,
    pub amount: f64,
}

/// One point of the monthly evolution series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    /// Month code, e.g. "jan"
    pub month: String,
    /// Display name, e.g. "Janeiro"
    pub label: String,
    pub amount: f64,
    pub quantity: f64,
}

/// Response of the sales overview for one dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOverview {
    pub dimension: Dimension,
    pub rows: Vec<DimensionRow>,
    pub total_quantity: f64,
    pub total_amount: f64,
    /// total_amount / total_quantity, 0 when nothing was sold
    pub average_ticket: f64,
    /// Top rows by amount, descending
    pub ranking: Vec<RankingEntry>,
    pub monthly: Vec<MonthlyPoint>,
}

impl SalesOverview {
    /// Number of distinct dimension values left after filtering
    pub fn distinct_count(&self) -> usize {
        self.rows.len()
    }
}
