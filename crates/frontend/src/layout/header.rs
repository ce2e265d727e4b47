use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_sales_filters;

#[component]
pub fn Header() -> impl IntoView {
    let filters = use_sales_filters();
    let active = move || filters.snapshot().active_count();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <div class="header__logo">"JKG"</div>
                <div>
                    <h1 class="header__title">"JKG do Brasil"</h1>
                    <p class="header__subtitle">"Análise Multi-Perspectiva de Vendas"</p>
                </div>
            </div>
            <div class="header__actions">
                {move || {
                    let count = active();
                    if count > 0 {
                        view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                {format!("{} filtro(s) ativo(s)", count)}
                            </Badge>
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </div>
        </header>
    }
}
