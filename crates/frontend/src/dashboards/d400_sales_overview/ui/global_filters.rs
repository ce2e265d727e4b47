use contracts::domain::a001_sales_record::{Month, SalesRecord};
use contracts::shared::filters::{prune_clients, search_clients, FilterOptions};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_sales_overview::api;
use crate::layout::global_context::use_sales_filters;
use crate::shared::icons::icon;

/// Bridge a single-value select to a list filter of the store ("" means all).
///
/// `current` is the store's list, `set` its setter.
fn bind_single_select(
    current: ReadSignal<Vec<String>>,
    set: impl Fn(Vec<String>) + Send + Sync + 'static,
) -> RwSignal<String> {
    let value = RwSignal::new(select_value(&current.get_untracked()));

    Effect::new(move |_| {
        let next = selection_for(&value.get());
        if current.get_untracked() != next {
            set(next);
        }
    });

    // store -> select (e.g. after "clear all")
    Effect::new(move |_| {
        let shown = select_value(&current.get());
        if value.get_untracked() != shown {
            value.set(shown);
        }
    });

    value
}

fn select_value(list: &[String]) -> String {
    list.first().cloned().unwrap_or_default()
}

fn selection_for(value: &str) -> Vec<String> {
    if value.is_empty() {
        vec![]
    } else {
        vec![value.to_string()]
    }
}

/// Filter bar shared by all dashboards: UF, clients, month, product
#[component]
pub fn GlobalFilters() -> impl IntoView {
    let filters = use_sales_filters();
    let records = RwSignal::new(Vec::<SalesRecord>::new());
    let clients_open = RwSignal::new(false);
    let client_search = RwSignal::new(String::new());

    spawn_local(async move {
        records.set(api::load_sales_data().await);
    });

    let options = Memo::new(move |_| {
        let selection = filters.snapshot();
        records.with(|records| FilterOptions::from_records(records, &selection))
    });

    // Clients that have no sales in the selected UF are dropped from the selection
    Effect::new(move |_| {
        let selection = filters.snapshot();
        if let Some(valid) = records.with(|records| prune_clients(records, &selection)) {
            log::debug!("Pruned client selection to {} entries", valid.len());
            filters.set_clients(valid);
        }
    });

    let state_value = bind_single_select(filters.states(), move |v| filters.set_states(v));
    let month_value = bind_single_select(filters.months(), move |v| filters.set_months(v));
    let product_value = bind_single_select(filters.products(), move |v| filters.set_products(v));

    let client_button_label = move || {
        let count = filters.clients().with(|c| c.len());
        if count > 0 {
            format!("{} selecionado(s)", count)
        } else {
            "Todos os Clientes".to_string()
        }
    };

    let client_list = move || {
        let query = client_search.get();
        let available = options.with(|o| o.clients.clone());
        let matches: Vec<String> = search_clients(&available, &query)
            .into_iter()
            .cloned()
            .collect();

        if matches.is_empty() {
            return view! { <div class="client-picker__empty">"Nenhum cliente encontrado."</div> }
                .into_any();
        }

        matches
            .into_iter()
            .map(|client| {
                let for_checked = client.clone();
                let for_toggle = client.clone();
                view! {
                    <label class="client-picker__item">
                        <input
                            type="checkbox"
                            prop:checked=move || filters.clients().with(|c| c.contains(&for_checked))
                            on:change=move |_| filters.toggle_client(&for_toggle)
                        />
                        <span class="client-picker__name">{client}</span>
                    </label>
                }
            })
            .collect_view()
            .into_any()
    };

    let selected_chips = move || {
        filters
            .clients()
            .get()
            .into_iter()
            .map(|client| {
                let for_remove = client.clone();
                view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span class="filter-chip__label">{client}</span>
                        <button
                            class="filter-chip__remove"
                            aria-label="Remover cliente"
                            on:click=move |_| filters.remove_client(&for_remove)
                        >
                            "×"
                        </button>
                    </Badge>
                }
            })
            .collect_view()
    };

    view! {
        <div class="global-filters">
            <div class="global-filters__header">
                <h3 class="global-filters__title">"Filtros Globais"</h3>
                {move || {
                    if filters.has_active_filters() {
                        view! {
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| filters.clear_all()>
                                {icon("x-circle")}
                                "Limpar Todos"
                            </Button>
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </div>

            <div class="global-filters__grid">
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Estado (UF)"</Label>
                    <Select value=state_value>
                        <option value="">"Todos os Estados"</option>
                        {move || options.get().states.into_iter().map(|uf| {
                            view! { <option value=uf.clone()>{uf.clone()}</option> }
                        }).collect_view()}
                    </Select>
                </Flex>

                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Clientes"</Label>
                    <div class="client-picker">
                        <button
                            class="client-picker__trigger"
                            aria-expanded=move || clients_open.get().to_string()
                            on:click=move |_| clients_open.update(|open| *open = !*open)
                        >
                            {client_button_label}
                        </button>
                        {move || {
                            if clients_open.get() {
                                view! {
                                    <div class="client-picker__popover">
                                        <Input value=client_search placeholder="Buscar cliente..." />
                                        <div class="client-picker__list">{client_list}</div>
                                    </div>
                                }.into_any()
                            } else {
                                view! { <></> }.into_any()
                            }
                        }}
                    </div>
                </Flex>

                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Mês"</Label>
                    <Select value=month_value>
                        <option value="">"Todos os Meses"</option>
                        {move || options.get().months.into_iter().map(|code| {
                            let label = Month::label_for_code(&code);
                            view! { <option value=code>{label}</option> }
                        }).collect_view()}
                    </Select>
                </Flex>

                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Produto"</Label>
                    <Select value=product_value>
                        <option value="">"Todos os Produtos"</option>
                        {move || options.get().products.into_iter().map(|produto| {
                            view! { <option value=produto.clone()>{produto.clone()}</option> }
                        }).collect_view()}
                    </Select>
                </Flex>
            </div>

            <div class="global-filters__chips">{selected_chips}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_select_value_means_all() {
        assert!(selection_for("").is_empty());
        assert_eq!(selection_for("SP"), vec!["SP"]);
        assert_eq!(select_value(&[]), "");
        assert_eq!(select_value(&["jan".to_string()]), "jan");
    }
}
