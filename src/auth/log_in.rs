//! This file defines the routes for displaying the log-in page and handling log-in requests.
//! The API verifies the credentials, this module only keeps the token it hands out.

use axum::{
    Form,
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::{
    AppState, Error, SERVER_ERROR_MSG,
    api::{ApiClient, Credentials},
    auth::{
        cookie::{
            forget_email_cookie, get_remembered_email, get_token_from_cookies,
            set_remember_email_cookie, set_token_cookie,
        },
        normalize_redirect_url,
    },
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base, form_error,
        loading_spinner, log_in_card, password_input,
    },
};

pub const INVALID_CREDENTIALS_ERROR_MSG: &str = "E-posta veya şifre hatalı.";

/// The values to show in the log-in form.
#[derive(Debug, Default)]
struct LogInFormView<'a> {
    email: &'a str,
    remember_me: bool,
    redirect_url: Option<&'a str>,
    error_message: Option<&'a str>,
}

fn log_in_form(view: LogInFormView<'_>) -> Markup {
    html! {
        form
            hx-post=(endpoints::LOG_IN_API)
            hx-swap="outerHTML"
            hx-indicator="#indicator"
            hx-disabled-elt="#email, #password, #submit-button"
            class="space-y-4 md:space-y-6"
        {
            @if let Some(redirect_url) = view.redirect_url {
                input type="hidden" name="redirect_url" value=(redirect_url);
            }

            div
            {
                label for="email" class=(FORM_LABEL_STYLE) { "E-posta" }

                input
                    type="email"
                    name="email"
                    id="email"
                    placeholder="ornek@eposta.com"
                    class=(FORM_TEXT_INPUT_STYLE)
                    required
                    autofocus
                    value=(view.email);
            }

            (password_input(""))

            div class="flex items-center gap-x-3"
            {
                input
                    type="checkbox"
                    name="remember_me"
                    id="remember_me"
                    tabindex="0"
                    checked[view.remember_me]
                    class="rounded-xs";

                label
                    for="remember_me"
                    class="block text-sm font-medium text-gray-900 dark:text-white"
                {
                    "Hatırla Beni"
                }
            }

            (form_error(view.error_message))

            button
                type="submit" id="submit-button" tabindex="0"
                class=(BUTTON_PRIMARY_STYLE)
            {
                span class="inline htmx-indicator" id="indicator"
                {
                    (loading_spinner())
                }
                "Giriş Yap"
            }
        }
    }
}

fn parse_redirect_url(raw_url: Option<&str>, source: &str) -> Option<String> {
    match raw_url.and_then(normalize_redirect_url) {
        Some(redirect_url) => Some(redirect_url),
        None => {
            if let Some(redirect_url) = raw_url {
                tracing::warn!("Invalid redirect URL from {source}: {redirect_url}");
            }
            None
        }
    }
}

/// Display the log-in page, or skip it if the client already has a token.
pub async fn get_log_in_page(jar: PrivateCookieJar, Query(query): Query<RedirectQuery>) -> Response {
    let redirect_url = parse_redirect_url(query.redirect_url.as_deref(), "log-in query");

    if get_token_from_cookies(&jar).is_some() {
        return Redirect::to(redirect_url.as_deref().unwrap_or(endpoints::DASHBOARD_VIEW))
            .into_response();
    }

    let remembered_email = get_remembered_email(&jar);
    let log_in_form = log_in_form(LogInFormView {
        email: remembered_email.as_deref().unwrap_or_default(),
        remember_me: remembered_email.is_some(),
        redirect_url: redirect_url.as_deref(),
        error_message: None,
    });
    let content = log_in_card("Giriş Yap", &log_in_form);

    base("Giriş", &content).into_response()
}

/// The state needed to perform a login.
#[derive(Debug, Clone)]
pub struct LoginState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// The duration for which the token cookie is valid.
    pub cookie_duration: Duration,
    /// Whether cookies are only sent over HTTPS.
    pub secure_cookies: bool,
    pub api: ApiClient,
}

impl FromRef<AppState> for LoginState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            cookie_duration: state.cookie_duration,
            secure_cookies: state.secure_cookies,
            api: state.api.clone(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<LoginState> for Key {
    fn from_ref(state: &LoginState) -> Self {
        state.cookie_key.clone()
    }
}

/// Handler for log-in requests via the POST method.
///
/// On a successful log-in request, the token cookie is set and the client is
/// redirected to the page it came from or the dashboard page.
/// Otherwise, the form is returned with an error message explaining the problem.
pub async fn post_log_in(
    State(state): State<LoginState>,
    jar: PrivateCookieJar,
    Form(user_data): Form<LogInData>,
) -> Response {
    let redirect_url = parse_redirect_url(user_data.redirect_url.as_deref(), "log-in form");
    let remember_me = user_data.remember_me.is_some();
    let credentials = Credentials {
        email: user_data.email.trim().to_owned(),
        password: user_data.password,
    };

    let token = match state.api.log_in(&credentials).await {
        Ok(token) => token,
        Err(error) => {
            let error_message = match error {
                Error::InvalidCredentials => INVALID_CREDENTIALS_ERROR_MSG,
                error => {
                    tracing::error!("Could not log in: {error}");
                    SERVER_ERROR_MSG
                }
            };

            return log_in_form(LogInFormView {
                email: &credentials.email,
                remember_me,
                redirect_url: redirect_url.as_deref(),
                error_message: Some(error_message),
            })
            .into_response();
        }
    };

    let jar = set_token_cookie(jar, &token, state.cookie_duration, state.secure_cookies);
    let jar = if remember_me {
        set_remember_email_cookie(jar, &credentials.email, state.secure_cookies)
    } else {
        forget_email_cookie(jar)
    };

    let redirect_url = redirect_url.unwrap_or_else(|| endpoints::DASHBOARD_VIEW.to_owned());

    (StatusCode::SEE_OTHER, HxRedirect(redirect_url), jar).into_response()
}

#[derive(Deserialize)]
pub struct RedirectQuery {
    pub redirect_url: Option<String>,
}

/// The raw data entered by the user in the log-in form.
#[derive(Clone, Serialize, Deserialize)]
pub struct LogInData {
    pub email: String,

    pub password: String,

    /// Whether to remember the e-mail address for the next log-in.
    ///
    /// This value comes from a checkbox, so it either has a string value or is not set
    /// (see the [MDN docs](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/input/checkbox#value_2)).
    /// The `Some` variant should be interpreted as `true` irregardless of the
    /// string value, and the `None` variant should be interpreted as `false`.
    pub remember_me: Option<String>,

    /// Optional URL to redirect to after logging in.
    /// Only accepted from the log-in form submission.
    pub redirect_url: Option<String>,
}
