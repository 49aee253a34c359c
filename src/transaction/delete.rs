//! Transaction deletion endpoint.

use axum::{
    Extension,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRefresh;

use crate::{
    api::{AccessToken, ApiClient, TRANSACTIONS_PATH},
    transaction::TransactionId,
};

/// Handle transaction deletion. Refreshes the page on success, returns an error alert otherwise.
pub async fn delete_transaction_endpoint(
    Path(transaction_id): Path<TransactionId>,
    State(api): State<ApiClient>,
    Extension(token): Extension<AccessToken>,
) -> Response {
    match api.delete(TRANSACTIONS_PATH, transaction_id, &token).await {
        Ok(()) => (HxRefresh(true), ()).into_response(),
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod delete_transaction_endpoint_tests {
    use axum::{
        Extension,
        extract::{Path, State},
        http::StatusCode,
    };
    use serde_json::json;

    use crate::{
        api::AccessToken,
        endpoints,
        test_utils::{assert_hx_redirect, get_header, spawn_fake_api, test_token},
    };

    use super::delete_transaction_endpoint;

    #[tokio::test]
    async fn deletes_transaction_and_refreshes() {
        let api = spawn_fake_api().await;

        let response =
            delete_transaction_endpoint(Path(4), State(api.client()), Extension(test_token()))
                .await;

        assert_eq!(get_header(&response, "hx-refresh"), "true");
        let request = api.last_request();
        assert_eq!(request.method, "DELETE");
        assert_eq!(request.path, "/transactions/4");
    }

    #[tokio::test]
    async fn missing_transaction_passes_status_through() {
        let api = spawn_fake_api().await;
        api.fail_writes(404, json!({"detail": "Kayıt bulunamadı."}));

        let response =
            delete_transaction_endpoint(Path(4), State(api.client()), Extension(test_token()))
                .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn rejected_token_redirects_to_log_in() {
        let api = spawn_fake_api().await;

        let response = delete_transaction_endpoint(
            Path(4),
            State(api.client()),
            Extension(AccessToken::new("expired")),
        )
        .await;

        assert_hx_redirect(&response, endpoints::LOG_IN_VIEW);
    }
}
