use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::api_url;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "Servidor: online",
            ServerStatus::Offline => "Servidor: offline",
            ServerStatus::Checking => "Servidor: verificando...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Checking);

    // Ping the backend once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            status.set(if ping_server().await {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    });

    view! {
        <footer data-zone="footer" class="status-bar">
            <span class="status-bar__brand">"© JKG do Brasil"</span>
            <span class=move || status.get().css_class()>
                {move || status.get().display_text()}
            </span>
        </footer>
    }
}

async fn ping_server() -> bool {
    match Request::get(&api_url("/health")).send().await {
        Ok(response) => response.ok(),
        Err(e) => {
            log::warn!("Health check failed: {}", e);
            false
        }
    }
}
