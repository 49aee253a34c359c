//! Defines functions for storing the API access token and the remembered
//! e-mail address in cookies.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use time::{Duration, OffsetDateTime};

use crate::api::AccessToken;

pub(crate) const COOKIE_TOKEN: &str = "token";
pub(crate) const COOKIE_REMEMBER_EMAIL: &str = "remember_email";
/// The default duration for which the token cookie is valid.
pub(crate) const DEFAULT_COOKIE_DURATION: Duration = Duration::days(1);
/// How long the e-mail address is remembered after "Hatırla Beni" is checked.
pub(crate) const REMEMBER_EMAIL_DURATION: Duration = Duration::days(30);

/// `secure` must be `false` when the panel is reached over plain HTTP from
/// anywhere but localhost, otherwise browsers drop the cookie.
fn build_cookie(
    name: &'static str,
    value: String,
    expiry: OffsetDateTime,
    secure: bool,
) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .expires(expiry)
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .build()
}

/// Removal cookies never carry the `Secure` attribute so that they are
/// accepted over plain HTTP too. They hold no secret.
fn build_removal_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, "deleted"))
        .path("/")
        .expires(OffsetDateTime::UNIX_EPOCH)
        .max_age(Duration::ZERO)
        .http_only(true)
        .same_site(SameSite::Strict)
        .build()
}

/// Add the token cookie to the cookie jar, indicating that a user is logged in.
///
/// The cookie expires `duration` from the current time, you can use
/// [DEFAULT_COOKIE_DURATION] for the default duration.
pub(crate) fn set_token_cookie(
    jar: PrivateCookieJar,
    token: &AccessToken,
    duration: Duration,
    secure: bool,
) -> PrivateCookieJar {
    let expiry = OffsetDateTime::now_utc() + duration;

    jar.add(build_cookie(
        COOKIE_TOKEN,
        token.as_str().to_owned(),
        expiry,
        secure,
    ))
}

pub(crate) fn get_token_from_cookies(jar: &PrivateCookieJar) -> Option<AccessToken> {
    jar.get(COOKIE_TOKEN)
        .map(|cookie| cookie.value_trimmed().to_owned())
        .filter(|token| !token.is_empty() && token != "deleted")
        .map(AccessToken::new)
}

/// A cookie that replaces the token cookie on the client and expires immediately.
///
/// Use this to log out a client when there is no private cookie jar at hand,
/// e.g. when turning an [crate::Error] into a response.
pub(crate) fn expired_token_cookie() -> Cookie<'static> {
    build_removal_cookie(COOKIE_TOKEN)
}

/// Set the token cookie to an invalid value and set its max age to zero, which
/// should delete the cookie on the client side.
pub(crate) fn invalidate_token_cookie(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.add(expired_token_cookie())
}

pub(crate) fn set_remember_email_cookie(
    jar: PrivateCookieJar,
    email: &str,
    secure: bool,
) -> PrivateCookieJar {
    let expiry = OffsetDateTime::now_utc() + REMEMBER_EMAIL_DURATION;

    jar.add(build_cookie(
        COOKIE_REMEMBER_EMAIL,
        email.to_owned(),
        expiry,
        secure,
    ))
}

pub(crate) fn forget_email_cookie(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.add(build_removal_cookie(COOKIE_REMEMBER_EMAIL))
}

pub(crate) fn get_remembered_email(jar: &PrivateCookieJar) -> Option<String> {
    jar.get(COOKIE_REMEMBER_EMAIL)
        .map(|cookie| cookie.value_trimmed().to_owned())
        .filter(|email| !email.is_empty() && email != "deleted")
}
