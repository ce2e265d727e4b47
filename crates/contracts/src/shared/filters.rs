use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::a001_sales_record::{Month, SalesRecord};

/// Global filter selection shared by all dashboards.
///
/// An empty list means "no restriction" for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub states: Vec<String>,
    #[serde(default)]
    pub clients: Vec<String>,
    #[serde(default)]
    pub months: Vec<String>,
    #[serde(default)]
    pub products: Vec<String>,
}

impl FilterSelection {
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of fields with a restriction (for the filter badge)
    pub fn active_count(&self) -> usize {
        [&self.states, &self.clients, &self.months, &self.products]
            .iter()
            .filter(|list| !list.is_empty())
            .count()
    }

    pub fn allows_state(&self, state: &str) -> bool {
        allows(&self.states, state)
    }

    pub fn allows_client(&self, client: &str) -> bool {
        allows(&self.clients, client)
    }

    pub fn allows_product(&self, product: &str) -> bool {
        allows(&self.products, product)
    }

    /// Month codes are compared in canonical form, so `"JAN"` matches `"jan"`
    pub fn allows_month(&self, month: &str) -> bool {
        if self.months.is_empty() {
            return true;
        }
        let month = Month::normalize_code(month);
        self.months.iter().any(|m| Month::normalize_code(m) == month)
    }

    /// Record-level check; months are filtered per entry by the aggregator
    pub fn allows_record(&self, record: &SalesRecord) -> bool {
        self.allows_state(&record.state)
            && self.allows_client(&record.client)
            && self.allows_product(&record.product)
    }
}

fn allows(list: &[String], value: &str) -> bool {
    list.is_empty() || list.iter().any(|v| v == value)
}

/// Values available in the global filter controls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub states: Vec<String>,
    /// Clients of the currently selected states (all clients if none)
    pub clients: Vec<String>,
    /// Month codes present in the data, calendar order
    pub months: Vec<String>,
    pub products: Vec<String>,
}

impl FilterOptions {
    pub fn from_records(records: &[SalesRecord], selection: &FilterSelection) -> Self {
        // "" is the "all" entry of the selects, so blank values are never offered
        let states: BTreeSet<&str> = records
            .iter()
            .map(|r| r.state.as_str())
            .filter(|s| !s.trim().is_empty())
            .collect();
        let products: BTreeSet<&str> = records
            .iter()
            .map(|r| r.product.as_str())
            .filter(|p| !p.trim().is_empty())
            .collect();
        let clients: BTreeSet<&str> = records
            .iter()
            .filter(|r| selection.allows_state(&r.state))
            .map(|r| r.client.as_str())
            .filter(|c| !c.trim().is_empty())
            .collect();
        let months: BTreeSet<Month> = records
            .iter()
            .flat_map(|r| r.months.iter())
            .filter_map(|m| Month::from_code(&m.month))
            .collect();

        Self {
            states: states.into_iter().map(String::from).collect(),
            clients: clients.into_iter().map(String::from).collect(),
            months: months.into_iter().map(|m| m.code().to_string()).collect(),
            products: products.into_iter().map(String::from).collect(),
        }
    }
}

/// Case-insensitive substring search over client names
pub fn search_clients<'a>(clients: &'a [String], query: &str) -> Vec<&'a String> {
    let query = query.trim().to_lowercase();
    clients
        .iter()
        .filter(|c| !c.is_empty())
        .filter(|c| query.is_empty() || c.to_lowercase().contains(&query))
        .collect()
}

/// Drop selected clients that have no sales in the selected states.
///
/// Returns `None` when no state is selected or nothing would change.
pub fn prune_clients(records: &[SalesRecord], selection: &FilterSelection) -> Option<Vec<String>> {
    if selection.states.is_empty() || selection.clients.is_empty() {
        return None;
    }

    let valid: Vec<String> = selection
        .clients
        .iter()
        .filter(|client| {
            records
                .iter()
                .any(|r| &r.client == *client && selection.allows_state(&r.state))
        })
        .cloned()
        .collect();

    if valid.len() == selection.clients.len() {
        None
    } else {
        Some(valid)
    }
}

/// Add `value` to the list, or remove it if already present
pub fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}
