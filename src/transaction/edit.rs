//! Transaction editing endpoint.

use axum::{
    Extension, Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRefresh;

use crate::{
    Error,
    api::{AccessToken, ApiClient, TRANSACTIONS_PATH},
    transaction::{
        TransactionFormData, TransactionId,
        form::{TransactionFormView, edit_transaction_form},
        options::FormChoices,
    },
};

const UPDATE_ERROR_MSG: &str = "Güncellenemedi";

/// Handle the edit transaction form, the same way as [super::create_transaction_endpoint].
pub async fn update_transaction_endpoint(
    Path(transaction_id): Path<TransactionId>,
    State(api): State<ApiClient>,
    Extension(token): Extension<AccessToken>,
    Form(form_data): Form<TransactionFormData>,
) -> Response {
    let result = match form_data.validate() {
        Ok(body) => {
            api.update(TRANSACTIONS_PATH, transaction_id, &token, &body)
                .await
        }
        Err(error) => Err(error),
    };

    let error = match result {
        Ok(()) => return (HxRefresh(true), ()).into_response(),
        Err(Error::Unauthorized) => return Error::Unauthorized.into_alert_response(),
        Err(error) => error,
    };

    tracing::warn!("Could not update transaction {transaction_id}: {error}");
    let error_message = error.form_message(UPDATE_ERROR_MSG);

    match FormChoices::fetch(&api, &token).await {
        Ok(choices) => edit_transaction_form(
            transaction_id,
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
