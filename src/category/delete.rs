//! Category deletion endpoint.

use axum::{
    Extension,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRefresh;

use crate::{
    api::{AccessToken, ApiClient, CATEGORIES_PATH},
    category::CategoryId,
};

/// Handle category deletion. Refreshes the page on success, returns an error alert otherwise.
pub async fn delete_category_endpoint(
    Path(category_id): Path<CategoryId>,
    State(api): State<ApiClient>,
    Extension(token): Extension<AccessToken>,
) -> Response {
    match api.delete(CATEGORIES_PATH, category_id, &token).await {
        Ok(()) => (HxRefresh(true), ()).into_response(),
        Err(error) => {
            tracing::error!("Could not delete category {category_id}: {error}");
            error.into_alert_response()
        }
    }
}
