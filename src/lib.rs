//! Gelir/Gider is a web based admin panel for an income-expense tracker.
//!
//! The panel renders HTML pages on the server and keeps no data of its own.
//! Categories, projects, transactions and exchange rates are read from and
//! written to a remote REST API, authenticating with the bearer token the API
//! issued at log-in.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use axum_htmx::{HxRedirect, HxReswap, SwapOption};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod api;
mod app_state;
mod auth;
mod category;
mod dashboard;
mod dates;
mod endpoints;
mod exchange_rate;
mod html;
mod internal_server_error;
mod listing;
mod logging;
mod navigation;
mod not_found;
mod pagination;
mod project;
mod routing;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use api::ApiClient;
pub use app_state::AppState;
pub use logging::logging_middleware;
pub use pagination::PaginationConfig;
pub use routing::build_router;

use crate::{alert::Alert, auth::expired_token_cookie, internal_server_error::InternalServerError};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The API rejected the e-mail and password given at log-in.
    #[error("invalid e-mail or password")]
    InvalidCredentials,

    /// The API rejected the bearer token, e.g. because it expired.
    ///
    /// The client should be logged out and sent back to the log-in page.
    #[error("the API rejected the access token")]
    Unauthorized,

    /// The API answered with an unsuccessful status code.
    ///
    /// `detail` holds the human readable message from the error body, if the
    /// API sent one.
    #[error("the API responded with status {status}: {detail:?}")]
    Api {
        /// The HTTP status code of the API response.
        status: u16,
        /// The `detail` field of the error body.
        detail: Option<String>,
    },

    /// The request to the API could not be sent or no response arrived.
    #[error("could not reach the API: {0}")]
    Http(String),

    /// The API response body did not have the expected shape.
    #[error("could not decode the API response: {0}")]
    InvalidResponse(String),

    /// A category was submitted with an empty name.
    #[error("Kategori adı boş olamaz")]
    EmptyCategoryName,

    /// A project was submitted with an empty name.
    #[error("Proje adı boş olamaz")]
    EmptyProjectName,

    /// A transaction was submitted without a project, category, date or amount.
    #[error("Lütfen tüm alanları doldurun.")]
    MissingTransactionFields,

    /// A category type other than "gelir" or "gider" was used.
    #[error("Geçersiz tür: {0}")]
    InvalidCategoryType(String),

    /// A currency other than TRY, USD or EUR was used.
    #[error("Geçersiz para birimi: {0}")]
    InvalidCurrency(String),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Error::InvalidResponse(error.to_string())
        } else {
            Error::Http(error.to_string())
        }
    }
}

/// The message shown inside a form when the API could not be reached.
pub(crate) const SERVER_ERROR_MSG: &str = "Sunucu hatası";

impl Error {
    /// The message to show inside a form after a failed submission.
    ///
    /// Validation errors and API error details are shown as is, `fallback` is
    /// used when the API did not explain the failure.
    pub(crate) fn form_message(&self, fallback: &str) -> String {
        match self {
            Error::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Error::Api { detail: None, .. } => fallback.to_owned(),
            Error::Http(_) | Error::InvalidResponse(_) => SERVER_ERROR_MSG.to_owned(),
            error => error.to_string(),
        }
    }

    /// The response for a failed htmx request.
    ///
    /// The alert replaces the contents of `#alert-container`, whatever swap
    /// style the element that sent the request asked for.
    fn into_alert_response(self) -> Response {
        let (status, alert) = match self {
            Error::Unauthorized => {
                return (
                    StatusCode::OK,
                    HxRedirect(endpoints::LOG_IN_VIEW.to_owned()),
                    CookieJar::new().add(expired_token_cookie()),
                )
                    .into_response();
            }
            Error::Api { status, detail } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                let message = "İşlem başarısız".to_owned();

                let alert = match detail {
                    Some(details) => Alert::Error { message, details },
                    None => Alert::ErrorSimple { message },
                };

                (status, alert)
            }
            Error::Http(error) | Error::InvalidResponse(error) => {
                tracing::error!("Could not complete API request: {error}");

                (
                    StatusCode::BAD_GATEWAY,
                    Alert::Error {
                        message: SERVER_ERROR_MSG.to_owned(),
                        details: "API sunucusuna ulaşılamadı.".to_owned(),
                    },
                )
            }
            Error::EmptyCategoryName
            | Error::EmptyProjectName
            | Error::MissingTransactionFields
            | Error::InvalidCategoryType(_)
            | Error::InvalidCurrency(_) => (
                StatusCode::BAD_REQUEST,
                Alert::ErrorSimple {
                    message: self.to_string(),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {error}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Bir hata oluştu".to_owned(),
                        details: "Beklenmeyen bir hata oluştu, ayrıntılar için sunucu \
                            kayıtlarına bakın."
                            .to_owned(),
                    },
                )
            }
        };

        (status, HxReswap(SwapOption::InnerHtml), alert).into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Unauthorized => (
                CookieJar::new().add(expired_token_cookie()),
                Redirect::to(endpoints::LOG_IN_VIEW),
            )
                .into_response(),
            Error::Http(error) | Error::InvalidResponse(error) => {
                tracing::error!("Could not complete API request: {error}");

                InternalServerError {
                    description: "Sunucuya ulaşılamadı",
                    fix: "API sunucusunun çalıştığından emin olun ve tekrar deneyin.",
                }
                .into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                InternalServerError::default().into_response()
            }
        }
    }
}
