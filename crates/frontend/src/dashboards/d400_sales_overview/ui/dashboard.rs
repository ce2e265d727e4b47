use contracts::dashboards::d400_sales_overview::{aggregate, Dimension, RANKING_LIMIT};
use contracts::domain::a001_sales_record::SalesRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::charts::{MonthlyLineChart, RankingBarChart};
use crate::dashboards::d400_sales_overview::api;
use crate::layout::global_context::use_sales_filters;
use crate::shared::components::stat_card::{CardAccent, StatCard};
use crate::shared::number_format::ValueFormat;

const TAB_EVOLUTION: &str = "evolucao";
const TAB_RANKING: &str = "ranking";

fn count_icon(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::State => "map-pin",
        Dimension::Client => "users",
        Dimension::Product => "box",
    }
}

/// Sales overview for one perspective (UF, client or product)
#[component]
pub fn SalesDashboard(dimension: Dimension) -> impl IntoView {
    let filters = use_sales_filters();
    let records = RwSignal::new(Vec::<SalesRecord>::new());
    let loading = RwSignal::new(true);
    let chart_tab = RwSignal::new(TAB_EVOLUTION.to_string());

    spawn_local(async move {
        let data = api::load_sales_data().await;
        log::info!("d400[{}]: {} records loaded", dimension.code(), data.len());
        records.set(data);
        loading.set(false);
    });

    let overview = Memo::new(move |_| {
        let selection = filters.snapshot();
        records.with(|records| aggregate(records, &selection, dimension))
    });

    let total_amount = Signal::derive(move || overview.with(|o| o.total_amount));
    let total_quantity = Signal::derive(move || overview.with(|o| o.total_quantity));
    let average_ticket = Signal::derive(move || overview.with(|o| o.average_ticket));
    let distinct = Signal::derive(move || overview.with(|o| o.distinct_count() as f64));
    let monthly = Signal::derive(move || overview.with(|o| o.monthly.clone()));
    let ranking = Signal::derive(move || overview.with(|o| o.ranking.clone()));

    let plural = dimension.plural_label();
    let ranking_title = format!("Top {} {}", RANKING_LIMIT, plural);

    view! {
        <div id=format!("d400_sales_overview--{}", dimension.code()) class="d400-dashboard">
            {move || {
                if loading.get() {
                    return view! {
                        <div class="d400-dashboard__loading">
                            <Spinner />
                            <p>"Carregando dados..."</p>
                        </div>
                    }.into_any();
                }

                let ranking_title = ranking_title.clone();
                view! {
                    <div class="d400-dashboard__cards">
                        <StatCard
                            label="Receita Total"
                            icon_name="dollar"
                            value=total_amount
                            format=ValueFormat::Money
                            accent=CardAccent::Primary
                        />
                        <StatCard
                            label="Total de Itens"
                            icon_name="package"
                            value=total_quantity
                            format=ValueFormat::Number
                            accent=CardAccent::Secondary
                        />
                        <StatCard
                            label="Ticket Médio"
                            icon_name="trending-up"
                            value=average_ticket
                            format=ValueFormat::Money
                            accent=CardAccent::Accent
                        />
                        <StatCard
                            label=plural
                            icon_name=count_icon(dimension)
                            value=distinct
                            format=ValueFormat::Integer
                            accent=CardAccent::Chart
                        />
                    </div>

                    <div class="d400-dashboard__charts">
                        <TabList selected_value=chart_tab>
                            <Tab value=TAB_EVOLUTION.to_string()>"Evolução Mensal"</Tab>
                            <Tab value=TAB_RANKING.to_string()>"Ranking"</Tab>
                        </TabList>
                        {move || {
                            if chart_tab.get() == TAB_RANKING {
                                view! {
                                    <div class="d400-card">
                                        <h3 class="d400-card__title">{ranking_title.clone()}</h3>
                                        <RankingBarChart entries=ranking dimension=dimension />
                                    </div>
                                }.into_any()
                            } else {
                                view! {
                                    <div class="d400-card">
                                        <h3 class="d400-card__title">"Evolução Mensal de Vendas"</h3>
                                        <MonthlyLineChart points=monthly />
                                    </div>
                                }.into_any()
                            }
                        }}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
