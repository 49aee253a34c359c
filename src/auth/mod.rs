//! Log-in, log-out and the middleware that keeps anonymous clients out.

mod cookie;
mod log_in;
mod log_out;
mod middleware;
mod redirect;

pub(crate) use cookie::{DEFAULT_COOKIE_DURATION, expired_token_cookie};
pub use log_in::{get_log_in_page, post_log_in};
pub use log_out::get_log_out;
pub use middleware::{auth_guard, auth_guard_hx};
pub(crate) use redirect::{build_log_in_redirect_url, normalize_redirect_url};

#[cfg(test)]
pub(crate) use cookie::{COOKIE_REMEMBER_EMAIL, COOKIE_TOKEN, set_token_cookie};

#[cfg(test)]
pub use middleware::AuthState;
