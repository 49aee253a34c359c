//! Project deletion endpoint.

use axum::{
    Extension,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRefresh;

use crate::{
    api::{AccessToken, ApiClient, PROJECTS_PATH},
    project::ProjectId,
};

/// Handle project deletion. Refreshes the page on success, returns an error alert otherwise.
pub async fn delete_project_endpoint(
    Path(project_id): Path<ProjectId>,
    State(api): State<ApiClient>,
    Extension(token): Extension<AccessToken>,
) -> Response {
    match api.delete(PROJECTS_PATH, project_id, &token).await {
        Ok(()) => (HxRefresh(true), ()).into_response(),
        Err(error) => {
            tracing::error!("Could not delete project {project_id}: {error}");
            error.into_alert_response()
        }
    }
}
