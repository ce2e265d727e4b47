pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Page shell: header on top, status bar at the bottom
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
