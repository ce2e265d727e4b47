use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use crate::shared::format::format_number;

/// HTTP request logging middleware
///
/// Prints one colored line per request: local time, duration, response size,
/// status, method and path. Sizes are measured on the buffered body.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let (body, size) = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let size = format_number(bytes.len());
            (Body::from(bytes), size)
        }
        Err(e) => {
            tracing::warn!("{} {}: cannot buffer response body: {}", method, path, e);
            (Body::default(), "error".to_string())
        }
    };

    println!(
        "{} | {:>5}ms | {:>12} | {} {:>6} {}",
        paint_time(parts.status),
        start.elapsed().as_millis(),
        size,
        parts.status.as_u16(),
        method,
        path
    );

    Response::from_parts(parts, body)
}

// cyan for 200, yellow for everything else
fn paint_time(status: StatusCode) -> String {
    let color_code = if status == StatusCode::OK { "36" } else { "33" };
    format!(
        "\x1b[{}m{}\x1b[0m",
        color_code,
        Local::now().format("%H:%M:%S")
    )
}
