//! HTTP API handlers.

use axum::response::Html;

/// Fixed greeting payload served at the root path.
pub const GREETING: &str =
    "<h1>Hello from sample-app</h1>\n<p>This is the sample app pushed to ACR.</p>";

/// Root handler - always returns 200 with the static HTML greeting.
pub async fn index() -> Html<&'static str> {
    Html(GREETING)
}
