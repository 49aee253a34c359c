//! Category creation endpoint.

use axum::{
    Extension, Form,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRefresh;

use crate::{
    Error,
    api::{AccessToken, ApiClient, CATEGORIES_PATH},
    category::{
        CategoryFormData, CategoryType,
        form::{CategoryFormView, category_form},
    },
};

/// Shown when the API rejects a category without saying why.
pub(crate) const CATEGORY_ERROR_MSG: &str = "Bir hata oluştu";

/// Handle the create category form.
///
/// Refreshes the page on success, otherwise the form is returned with the
/// reason the category could not be saved.
pub async fn create_category_endpoint(
    State(api): State<ApiClient>,
    Extension(token): Extension<AccessToken>,
    Form(form_data): Form<CategoryFormData>,
) -> Response {
    let result = match form_data.validate() {
        Ok(body) => api.create(CATEGORIES_PATH, &token, &body).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(()) => (HxRefresh(true), ()).into_response(),
        Err(Error::Unauthorized) => Error::Unauthorized.into_alert_response(),
        Err(error) => {
            tracing::warn!("Could not create category: {error}");
            let error_message = error.form_message(CATEGORY_ERROR_MSG);

            category_form(CategoryFormView {
                category_id: None,
                category_type: form_data.category_type.parse().unwrap_or(CategoryType::Gelir),
                name: &form_data.name,
                error_message: Some(&error_message),
            })
            .into_response()
        }
    }
}
