//! Alert messages that htmx swaps into the page's `#alert-container`.

use axum::response::{Html, IntoResponse, Response};
use maud::{Markup, html};

/// An error message shown at the bottom of the page.
///
/// Endpoints return alerts with an error status code so that the
/// response-targets extension swaps them into `#alert-container`.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    Error { message: String, details: String },
    ErrorSimple { message: String },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (message, details) = match self {
            Alert::Error { message, details } => (message, Some(details)),
            Alert::ErrorSimple { message } => (message, None),
        };

        html! {
            div
                role="alert"
                class="flex items-start gap-3 p-4 mb-4 text-sm text-red-800 rounded-lg
                    bg-red-50 border border-red-300 shadow dark:bg-gray-800
                    dark:text-red-400 dark:border-red-800"
            {
                div class="flex-1"
                {
                    span class="font-medium" { (message) }

                    @if let Some(details) = details
                    {
                        p { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Kapat"
                    class="font-bold"
                    onclick="dismissAlert(this)"
                {
                    "×"
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        Html(self.into_html().into_string()).into_response()
    }
}
