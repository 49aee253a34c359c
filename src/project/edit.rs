//! Project editing endpoint.

use axum::{
    Extension, Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRefresh;

use crate::{
    Error,
    api::{AccessToken, ApiClient, PROJECTS_PATH},
    project::{
        ProjectFormData, ProjectId,
        create::PROJECT_ERROR_MSG,
        form::{ProjectFormView, project_form},
    },
};

pub async fn update_project_endpoint(
    Path(project_id): Path<ProjectId>,
    State(api): State<ApiClient>,
    Extension(token): Extension<AccessToken>,
    Form(form_data): Form<ProjectFormData>,
) -> Response {
    let result = match form_data.validate() {
        Ok(body) => api.update(PROJECTS_PATH, project_id, &token, &body).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(()) => (HxRefresh(true), ()).into_response(),
        Err(Error::Unauthorized) => Error::Unauthorized.into_alert_response(),
        Err(error) => {
            tracing::warn!("Could not update project {project_id}: {error}");
            let error_message = error.form_message(PROJECT_ERROR_MSG);

            project_form(ProjectFormView {
                project_id: Some(project_id),
                name: &form_data.name,
                error_message: Some(&error_message),
            })
            .into_response()
        }
    }
}
