//! Transaction creation endpoint.

use axum::{
    Extension, Form,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRefresh;

use crate::{
    Error,
    api::{AccessToken, ApiClient, TRANSACTIONS_PATH},
    transaction::{
        TransactionFormData,
        form::{TransactionFormView, add_transaction_form},
        options::FormChoices,
    },
};

const CREATE_ERROR_MSG: &str = "Kayıt eklenemedi.";

/// Handle the add transaction form.
///
/// Refreshes the page on success. Otherwise the form comes back with the
/// submitted values and the reason the transaction was not saved.
pub async fn create_transaction_endpoint(
    State(api): State<ApiClient>,
    Extension(token): Extension<AccessToken>,
    Form(form_data): Form<TransactionFormData>,
) -> Response {
    let result = match form_data.validate() {
        Ok(body) => api.create(TRANSACTIONS_PATH, &token, &body).await,
        Err(error) => Err(error),
    };

    let error = match result {
        Ok(()) => return (HxRefresh(true), ()).into_response(),
        Err(Error::Unauthorized) => return Error::Unauthorized.into_alert_response(),
        Err(error) => error,
    };

    tracing::warn!("Could not create transaction: {error}");
    let error_message = error.form_message(CREATE_ERROR_MSG);

    match FormChoices::fetch(&api, &token).await {
        Ok(choices) => add_transaction_form(
            &TransactionFormView::from_form(&form_data, &error_message),
            &choices,
        )
        .into_response(),
        Err(error) => {
            tracing::error!("Could not fetch transaction form choices: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod create_transaction_endpoint_tests {
    use axum::{Extension, Form, extract::State, http::StatusCode};
    use scraper::Selector;
    use serde_json::json;

    use crate::{
        api::{AccessToken, ApiClient},
        endpoints,
        test_utils::{
            SERVER_UNREACHABLE_URL, assert_form_error_message, assert_hx_endpoint,
            assert_hx_redirect, get_header, must_get_form, parse_html_fragment, spawn_fake_api,
            test_token,
        },
        transaction::TransactionFormData,
    };

    use super::create_transaction_endpoint;

    fn complete_form() -> TransactionFormData {
        TransactionFormData {
            transaction_type: "gelir".to_owned(),
            project_id: "1".to_owned(),
            category_id: "4".to_owned(),
            date: "2024-03-15".to_owned(),
            amount: "2500".to_owned(),
            currency: "TRY".to_owned(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn creates_transaction_and_refreshes() {
        let api = spawn_fake_api().await;

        let response = create_transaction_endpoint(
            State(api.client()),
            Extension(test_token()),
            Form(complete_form()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_header(&response, "hx-refresh"), "true");
        let request = api.last_request();
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/transactions");
        assert_eq!(
            request.body,
            Some(json!({
                "type": "gelir",
                "project_id": 1,
                "category_id": 4,
                "date": "2024-03-15",
                "amount": 2500.0,
                "currency": "TRY",
                "description": null
            }))
        );
    }

    #[tokio::test]
    async fn missing_fields_keep_submitted_values() {
        let api = spawn_fake_api().await;
        api.set_page(
            "/projects",
            json!({"items": [{"id": 1, "name": "Ofis"}], "total": 1}),
        );

        let response = create_transaction_endpoint(
            State(api.client()),
            Extension(test_token()),
            Form(TransactionFormData {
                category_id: String::new(),
                description: "Mart".to_owned(),
                ..complete_form()
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            api.requests()
                .iter()
                .all(|request| request.method == "GET"),
            "No transaction should be sent to the API"
        );
        let html = parse_html_fragment(response).await;
        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::TRANSACTIONS_API, "hx-post");
        assert_form_error_message(&form, "Lütfen tüm alanları doldurun.");
        let selected_project = html
            .select(&Selector::parse("select[name=project_id] option[selected]").unwrap())
            .next()
            .expect("No project selected");
        assert_eq!(selected_project.value().attr("value"), Some("1"));
        let description = html
            .select(&Selector::parse("input[name=description]").unwrap())
            .next()
            .unwrap();
        assert_eq!(description.value().attr("value"), Some("Mart"));
    }

    #[tokio::test]
    async fn shows_api_detail() {
        let api = spawn_fake_api().await;
        api.fail_writes(400, json!({"detail": "Kur bilgisi bulunamadı."}));

        let response = create_transaction_endpoint(
            State(api.client()),
            Extension(test_token()),
            Form(complete_form()),
        )
        .await;

        let html = parse_html_fragment(response).await;
        assert_form_error_message(&must_get_form(&html), "Kur bilgisi bulunamadı.");
    }

    #[tokio::test]
    async fn falls_back_when_api_gives_no_detail() {
        let api = spawn_fake_api().await;
        api.fail_writes(500, json!({}));

        let response = create_transaction_endpoint(
            State(api.client()),
            Extension(test_token()),
            Form(complete_form()),
        )
        .await;

        let html = parse_html_fragment(response).await;
        assert_form_error_message(&must_get_form(&html), "Kayıt eklenemedi.");
    }

    #[tokio::test]
    async fn unreachable_api_shows_alert() {
        let api = ApiClient::new(SERVER_UNREACHABLE_URL).unwrap();

        let response =
            create_transaction_endpoint(State(api), Extension(test_token()), Form(complete_form()))
                .await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn rejected_token_redirects_to_log_in() {
        let api = spawn_fake_api().await;

        let response = create_transaction_endpoint(
            State(api.client()),
            Extension(AccessToken::new("expired")),
            Form(complete_form()),
        )
        .await;

        assert_hx_redirect(&response, endpoints::LOG_IN_VIEW);
    }
}
