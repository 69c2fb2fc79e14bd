//! Static HTML pages. Both are self-contained and talk to the JSON routes.

use axum::response::Html;

const INDEX_PAGE: &str = include_str!("../../templates/index.html");
const ADMIN_PAGE: &str = include_str!("../../templates/admin.html");

/// Claim submission form
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Admin listing; populated client-side from `/list_claims`
pub async fn admin() -> Html<&'static str> {
    Html(ADMIN_PAGE)
}
