#![allow(missing_docs)]

pub(crate) mod backend;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use backend::{
    FakeApi, SERVER_UNREACHABLE_URL, TEST_EMAIL, TEST_PASSWORD, TEST_TOKEN, spawn_fake_api,
};
pub(crate) use form::{
    assert_form_error_message, assert_form_input_with_value, assert_form_submit_button_with_text,
    assert_hx_endpoint, assert_select_options, must_get_form,
};
pub(crate) use html::{assert_valid_html, parse_html_document, parse_html_fragment};
pub(crate) use http::{assert_hx_redirect, assert_status_ok, get_header};

use crate::{AppState, PaginationConfig, api::AccessToken};

/// The state of a server whose API calls go to `api`.
pub(crate) fn test_app_state(api: &FakeApi) -> AppState {
    AppState::new("nafstenoas", api.client(), PaginationConfig::default())
}

pub(crate) fn test_token() -> AccessToken {
    AccessToken::new(TEST_TOKEN)
}
