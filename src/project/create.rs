//! Project creation endpoint.

use axum::{
    Extension, Form,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRefresh;

use crate::{
    Error,
    api::{AccessToken, ApiClient, PROJECTS_PATH},
    project::{
        ProjectFormData,
        form::{ProjectFormView, project_form},
    },
};

pub(crate) const PROJECT_ERROR_MSG: &str = "Bir hata oluştu";

/// Handle the create project form.
///
/// Refreshes the page on success, otherwise the form is returned with the
/// reason the project could not be saved.
pub async fn create_project_endpoint(
    State(api): State<ApiClient>,
    Extension(token): Extension<AccessToken>,
    Form(form_data): Form<ProjectFormData>,
) -> Response {
    let result = match form_data.validate() {
        Ok(body) => api.create(PROJECTS_PATH, &token, &body).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(()) => (HxRefresh(true), ()).into_response(),
        Err(Error::Unauthorized) => Error::Unauthorized.into_alert_response(),
        Err(error) => {
            tracing::warn!("Could not create project: {error}");
            let error_message = error.form_message(PROJECT_ERROR_MSG);

            project_form(ProjectFormView {
                project_id: None,
                name: &form_data.name,
                error_message: Some(&error_message),
            })
            .into_response()
        }
    }
}
