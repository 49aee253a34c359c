//! Authentication middleware that checks for the token cookie and handles redirects.

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use axum_htmx::HxRedirect;

use crate::{
    AppState,
    auth::{
        build_log_in_redirect_url, cookie::get_token_from_cookies,
        redirect::build_log_in_redirect_url_from_target,
    },
    endpoints,
};

/// The state needed for the auth middleware
#[derive(Clone)]
pub struct AuthState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AuthState> for Key {
    fn from_ref(state: &AuthState) -> Self {
        state.cookie_key.clone()
    }
}

/// Middleware function that checks for the token cookie.
/// The access token is placed into the request and then the request executed
/// normally if the cookie is present, otherwise a redirect to the log-in page
/// is returned using `get_redirect`.
///
/// **Note**: Route handlers can use the function argument `Extension(token): Extension<AccessToken>` to receive the token.
///
/// **Note**: Whether the token is still valid is only known once the API answers.
/// Handlers turn a rejected token into [crate::Error::Unauthorized].
#[inline]
async fn auth_guard_internal(
    state: AuthState,
    request: Request,
    next: Next,
    get_redirect: impl Fn(&str) -> Response,
) -> Response {
    let log_in_redirect_url = build_log_in_redirect_url(&request).unwrap_or_else(|| {
        if request.uri().path().starts_with("/api") {
            tracing::warn!(
                "Missing or invalid HTMX headers for /api request. Falling back to dashboard."
            );
        } else {
            tracing::warn!("Invalid redirect URL from request URI. Falling back to dashboard.");
        }

        build_log_in_redirect_url_from_target(endpoints::DASHBOARD_VIEW)
            .unwrap_or_else(|| endpoints::LOG_IN_VIEW.to_owned())
    });

    let (mut parts, body) = request.into_parts();
    let jar = match PrivateCookieJar::from_request_parts(&mut parts, &state).await {
        Ok(jar) => jar,
        Err(err) => {
            tracing::error!("Error getting cookie jar: {err:?}. Redirecting to log in page.");
            return get_redirect(&log_in_redirect_url);
        }
    };
    let token = match get_token_from_cookies(&jar) {
        Some(token) => token,
        None => return get_redirect(&log_in_redirect_url),
    };

    parts.extensions.insert(token);
    let request = Request::from_parts(parts, body);

    next.run(request).await
}

/// Middleware function that checks for the token cookie.
/// The access token is placed into the request and then the request executed normally if the cookie is present, otherwise a redirect to the log-in page is returned.
pub async fn auth_guard(State(state): State<AuthState>, request: Request, next: Next) -> Response {
    auth_guard_internal(state, request, next, |redirect_url| {
        Redirect::to(redirect_url).into_response()
    })
    .await
}

/// Middleware function that checks for the token cookie.
/// The access token is placed into the request and then the request executed normally if the cookie is present, otherwise a HTMX redirect to the log-in page is returned.
pub async fn auth_guard_hx(
    State(state): State<AuthState>,
    request: Request,
    next: Next,
) -> Response {
    auth_guard_internal(state, request, next, |redirect_url| {
        (HxRedirect(redirect_url.to_owned()), StatusCode::OK).into_response()
    })
    .await
}
