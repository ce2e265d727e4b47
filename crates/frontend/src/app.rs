use contracts::dashboards::d400_sales_overview::Dimension;
use leptos::prelude::*;
use thaw::*;

use crate::dashboards::{GlobalFilters, SalesDashboard};
use crate::layout::global_context::SalesFilterContext;
use crate::layout::Shell;

fn tab_title(dimension: Dimension) -> String {
    format!("Por {}", dimension.label())
}

#[component]
pub fn App() -> impl IntoView {
    // Filters live for the whole session, shared by every dashboard
    let filters = SalesFilterContext::new();
    provide_context(filters);

    let selected_tab = RwSignal::new(filters.active_dimension().get_untracked().code().to_string());

    Effect::new(move |_| {
        let code = selected_tab.get();
        if let Some(dimension) = Dimension::ALL.into_iter().find(|d| d.code() == code) {
            filters.set_active_dimension(dimension);
        }
    });

    view! {
        <Shell>
            <GlobalFilters />
            <div class="dimension-tabs">
                <TabList selected_value=selected_tab>
                    {Dimension::ALL.into_iter().map(|dimension| view! {
                        <Tab value=dimension.code().to_string()>{tab_title(dimension)}</Tab>
                    }).collect_view()}
                </TabList>
            </div>
            {move || {
                let dimension = filters.active_dimension().get();
                view! { <SalesDashboard dimension=dimension /> }
            }}
        </Shell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_titles() {
        let titles: Vec<_> = Dimension::ALL.into_iter().map(tab_title).collect();
        assert_eq!(titles, vec!["Por UF", "Por Cliente", "Por Produto"]);
    }
}
