use crate::shared::icons::icon;
use crate::shared::number_format::{format_value, ValueFormat};
use leptos::prelude::*;

/// Accent of the card (border / gradient colour)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAccent {
    Primary,
    Secondary,
    Accent,
    Chart,
}

impl CardAccent {
    fn class(&self) -> &'static str {
        match self {
            CardAccent::Primary => "stat-card stat-card--primary",
            CardAccent::Secondary => "stat-card stat-card--secondary",
            CardAccent::Accent => "stat-card stat-card--accent",
            CardAccent::Chart => "stat-card stat-card--chart",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<f64>,
    format: ValueFormat,
    accent: CardAccent,
) -> impl IntoView {
    let formatted = move || format_value(value.get(), format);

    view! {
        <div class=accent.class()>
            <div class="stat-card__header">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__icon">{icon(icon_name)}</div>
            </div>
            <div class="stat-card__value">{formatted}</div>
        </div>
    }
}
