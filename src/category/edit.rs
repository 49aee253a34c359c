//! Category editing endpoint.

use axum::{
    Extension, Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRefresh;

use crate::{
    Error,
    api::{AccessToken, ApiClient, CATEGORIES_PATH},
    category::{
        CategoryFormData, CategoryId, CategoryType,
        create::CATEGORY_ERROR_MSG,
        form::{CategoryFormView, category_form},
    },
};

/// Handle the edit category form, the same way as [super::create_category_endpoint].
pub async fn update_category_endpoint(
    Path(category_id): Path<CategoryId>,
    State(api): State<ApiClient>,
    Extension(token): Extension<AccessToken>,
    Form(form_data): Form<CategoryFormData>,
) -> Response {
    let result = match form_data.validate() {
        Ok(body) => {
            api.update(CATEGORIES_PATH, category_id, &token, &body)
                .await
        }
        Err(error) => Err(error),
    };

    match result {
        Ok(()) => (HxRefresh(true), ()).into_response(),
        Err(Error::Unauthorized) => Error::Unauthorized.into_alert_response(),
        Err(error) => {
            tracing::warn!("Could not update category {category_id}: {error}");
            let error_message = error.form_message(CATEGORY_ERROR_MSG);

            category_form(CategoryFormView {
                category_id: Some(category_id),
                category_type: form_data.category_type.parse().unwrap_or(CategoryType::Gelir),
                name: &form_data.name,
                error_message: Some(&error_message),
            })
            .into_response()
        }
    }
}

#[cfg(test)]
mod update_category_endpoint_tests {
    use axum::{
        Extension, Form,
        extract::{Path, State},
    };
    use serde_json::json;

    use crate::{
        category::CategoryFormData,
        test_utils::{
            assert_form_error_message, assert_hx_endpoint, get_header, must_get_form,
            parse_html_fragment, spawn_fake_api, test_token,
        },
    };

    use super::update_category_endpoint;

    #[tokio::test]
    async fn updates_category_by_id() {
        let api = spawn_fake_api().await;

        let response = update_category_endpoint(
            Path(3),
            State(api.client()),
            Extension(test_token()),
            Form(CategoryFormData {
                category_type: "gelir".to_owned(),
                name: "Prim".to_owned(),
            }),
        )
        .await;

        assert_eq!(get_header(&response, "hx-refresh"), "true");
        let request = api.last_request();
        assert_eq!(request.method, "PUT");
        assert_eq!(request.path, "/categories/3");
        assert_eq!(request.body, Some(json!({"type": "gelir", "name": "Prim"})));
    }

    #[tokio::test]
    async fn invalid_form_keeps_edit_endpoint() {
        let api = spawn_fake_api().await;

        let response = update_category_endpoint(
            Path(3),
            State(api.client()),
            Extension(test_token()),
            Form(CategoryFormData {
                category_type: "gider".to_owned(),
                name: String::new(),
            }),
        )
        .await;

        let html = parse_html_fragment(response).await;
        let form = must_get_form(&html);
        assert_hx_endpoint(&form, "/api/categories/3", "hx-put");
        assert_form_error_message(&form, "Kategori adı boş olamaz");
        assert!(api.requests().is_empty());
    }
}
