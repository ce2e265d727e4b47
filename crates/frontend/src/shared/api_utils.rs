//! API utilities for frontend-backend communication

/// Base URL for API requests: the origin the app was served from.
///
/// The backend serves the built frontend itself, so API calls stay on the
/// same origin whatever `server.port` is configured to. Under `trunk serve`
/// the API paths are proxied (see `Trunk.toml`).
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
