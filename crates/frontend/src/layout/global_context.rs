use contracts::dashboards::d400_sales_overview::Dimension;
use contracts::shared::filters::{toggle, FilterSelection};
use leptos::prelude::*;

/// Global filter store shared by every dashboard.
///
/// Lives only in memory: a page reload resets all filters. Readers get
/// read-only signals; every change goes through the setters below.
#[derive(Clone, Copy)]
pub struct SalesFilterContext {
    states: RwSignal<Vec<String>>,
    clients: RwSignal<Vec<String>>,
    months: RwSignal<Vec<String>>,
    products: RwSignal<Vec<String>>,
    /// Dashboard tab currently shown
    active_dimension: RwSignal<Dimension>,
}

impl SalesFilterContext {
    pub fn new() -> Self {
        Self {
            states: RwSignal::new(vec![]),
            clients: RwSignal::new(vec![]),
            months: RwSignal::new(vec![]),
            products: RwSignal::new(vec![]),
            active_dimension: RwSignal::new(Dimension::State),
        }
    }

    pub fn states(&self) -> ReadSignal<Vec<String>> {
        self.states.read_only()
    }

    pub fn clients(&self) -> ReadSignal<Vec<String>> {
        self.clients.read_only()
    }

    pub fn months(&self) -> ReadSignal<Vec<String>> {
        self.months.read_only()
    }

    pub fn products(&self) -> ReadSignal<Vec<String>> {
        self.products.read_only()
    }

    pub fn active_dimension(&self) -> ReadSignal<Dimension> {
        self.active_dimension.read_only()
    }

    pub fn set_states(&self, states: Vec<String>) {
        self.states.set(states);
    }

    pub fn set_clients(&self, clients: Vec<String>) {
        self.clients.set(clients);
    }

    pub fn set_months(&self, months: Vec<String>) {
        self.months.set(months);
    }

    pub fn set_products(&self, products: Vec<String>) {
        self.products.set(products);
    }

    pub fn set_active_dimension(&self, dimension: Dimension) {
        if self.active_dimension.get_untracked() != dimension {
            self.active_dimension.set(dimension);
        }
    }

    pub fn toggle_client(&self, client: &str) {
        self.clients.update(|clients| toggle(clients, client));
    }

    pub fn remove_client(&self, client: &str) {
        self.clients.update(|clients| clients.retain(|c| c != client));
    }

    pub fn clear_all(&self) {
        log::debug!("Clearing all sales filters");
        self.states.set(vec![]);
        self.clients.set(vec![]);
        self.months.set(vec![]);
        self.products.set(vec![]);
    }

    /// Current selection (tracked: callers re-run when any list changes)
    pub fn snapshot(&self) -> FilterSelection {
        FilterSelection {
            states: self.states.get(),
            clients: self.clients.get(),
            months: self.months.get(),
            products: self.products.get(),
        }
    }

    pub fn snapshot_untracked(&self) -> FilterSelection {
        FilterSelection {
            states: self.states.get_untracked(),
            clients: self.clients.get_untracked(),
            months: self.months.get_untracked(),
            products: self.products.get_untracked(),
        }
    }

    pub fn has_active_filters(&self) -> bool {
        !self.snapshot().is_empty()
    }
}

impl Default for SalesFilterContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_sales_filters() -> SalesFilterContext {
    use_context::<SalesFilterContext>().expect("SalesFilterContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_update_selection() {
        let owner = Owner::new();
        owner.with(|| {
            let filters = SalesFilterContext::new();
            filters.set_states(vec!["SP".into()]);
            filters.set_months(vec!["jan".into()]);
            filters.set_products(vec!["Caneta".into()]);
            filters.toggle_client("Alfa");
            filters.toggle_client("Beta");
            filters.remove_client("Alfa");

            let selection = filters.snapshot_untracked();
            assert_eq!(selection.states, vec!["SP"]);
            assert_eq!(selection.clients, vec!["Beta"]);
            assert_eq!(selection.active_count(), 4);
            assert_eq!(filters.states().get_untracked(), vec!["SP"]);

            filters.clear_all();
            assert!(filters.snapshot_untracked().is_empty());
        });
    }

    #[test]
    fn test_active_dimension() {
        let owner = Owner::new();
        owner.with(|| {
            let filters = SalesFilterContext::new();
            assert_eq!(filters.active_dimension().get_untracked(), Dimension::State);
            filters.set_active_dimension(Dimension::Product);
            assert_eq!(filters.active_dimension().get_untracked(), Dimension::Product);
        });
    }
}
