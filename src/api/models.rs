//! The request and response bodies shared by all resources of the REST API.

use serde::{Deserialize, Serialize};

/// The bearer token the API issued at log-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The e-mail and password sent to the API's log-in endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The body of a successful log-in response.
#[derive(Debug, Deserialize)]
pub(super) struct TokenResponse {
    pub access_token: String,
}

/// One page of rows from a list endpoint along with the total number of rows
/// that match the search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// The query parameters understood by every list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListParams {
    pub search: String,
    pub skip: u64,
    pub limit: u64,
    pub sort_by: String,
    pub sort_order: String,
}

impl ListParams {
    /// The parameters for fetching every row for a drop-down, e.g. all projects.
    pub fn all(limit: u64) -> Self {
        Self {
            search: String::new(),
            skip: 0,
            limit,
            sort_by: "id".to_owned(),
            sort_order: "asc".to_owned(),
        }
    }
}

/// The JSON body the API sends with error responses.
///
/// `detail` is a string for errors raised by the API's own checks, and a list
/// of objects for request validation errors.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn into_detail(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(detail)) => Some(detail),
            _ => None,
        }
    }
}
