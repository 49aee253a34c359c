//! Log-out route handler that removes the token cookie and redirects users.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::PrivateCookieJar;

use crate::{auth::cookie::invalidate_token_cookie, endpoints};

/// Forget the access token and redirect the client to the log-in page.
///
/// The remembered e-mail address is kept for the next log-in.
pub async fn get_log_out(jar: PrivateCookieJar) -> Response {
    let jar = invalidate_token_cookie(jar);

    (jar, Redirect::to(endpoints::LOG_IN_VIEW)).into_response()
}
