//! A thin client for the REST API that owns the categories, projects,
//! transactions and exchange rates.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    Error,
    api::models::{AccessToken, Credentials, ErrorBody, ListParams, Page, TokenResponse},
};

/// How long to wait for the API before giving up on a request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends requests to the REST API at `base_url`.
///
/// Cloning is cheap, clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API served at `base_url`, e.g. "http://127.0.0.1:8000".
    ///
    /// # Errors
    /// Returns [Error::Http] if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|error| Error::Http(format!("could not build HTTP client: {error}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn resource_url(&self, path: &str, id: i64) -> String {
        format!("{}{}/{}", self.base_url, path, id)
    }

    /// Exchange an e-mail and password for an access token.
    ///
    /// # Errors
    /// Returns [Error::InvalidCredentials] if the API rejects the credentials.
    pub async fn log_in(&self, credentials: &Credentials) -> Result<AccessToken, Error> {
        let response = self
            .client
            .post(self.url("/login"))
            .json(credentials)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(Error::InvalidCredentials);
        }

        let body: TokenResponse = check_status(response).await?.json().await?;

        Ok(AccessToken::new(body.access_token))
    }

    /// Fetch one page of the collection at `path`, e.g. "/categories".
    pub async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &AccessToken,
        params: &ListParams,
    ) -> Result<Page<T>, Error> {
        tracing::debug!("GET {path} with {params:?}");

        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(token.as_str())
            .query(params)
            .send()
            .await?;

        Ok(check_status(response).await?.json().await?)
    }

    /// Fetch a resource that does not require authentication.
    pub async fn get_public<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        tracing::debug!("GET {path}");

        let response = self.client.get(self.url(path)).send().await?;

        Ok(check_status(response).await?.json().await?)
    }

    /// Add `body` to the collection at `path`.
    pub async fn create<B: Serialize>(
        &self,
        path: &str,
        token: &AccessToken,
        body: &B,
    ) -> Result<(), Error> {
        tracing::debug!("POST {path}");

        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(token.as_str())
            .json(body)
            .send()
            .await?;

        check_status(response).await.map(|_| ())
    }

    /// Replace the resource `id` in the collection at `path` with `body`.
    pub async fn update<B: Serialize>(
        &self,
        path: &str,
        id: i64,
        token: &AccessToken,
        body: &B,
    ) -> Result<(), Error> {
        tracing::debug!("PUT {path}/{id}");

        let response = self
            .client
            .put(self.resource_url(path, id))
            .bearer_auth(token.as_str())
            .json(body)
            .send()
            .await?;

        check_status(response).await.map(|_| ())
    }

    /// Delete the resource `id` from the collection at `path`.
    pub async fn delete(&self, path: &str, id: i64, token: &AccessToken) -> Result<(), Error> {
        tracing::debug!("DELETE {path}/{id}");

        let response = self
            .client
            .delete(self.resource_url(path, id))
            .bearer_auth(token.as_str())
            .send()
            .await?;

        check_status(response).await.map(|_| ())
    }
}

/// Pass through successful responses and turn the rest into an [Error].
async fn check_status(response: Response) -> Result<Response, Error> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::UNAUTHORIZED {
        tracing::info!("API rejected the access token");
        return Err(Error::Unauthorized);
    }

    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::into_detail);

    tracing::warn!("API responded with {status}: {detail:?}");

    Err(Error::Api {
        status: status.as_u16(),
        detail,
    })
}

#[cfg(test)]
mod api_client_tests {
    use serde::Deserialize;
    use serde_json::json;

    use crate::{
        Error,
        api::{AccessToken, ApiClient, Credentials, ListParams, Page},
        test_utils::{TEST_EMAIL, TEST_PASSWORD, TEST_TOKEN, spawn_fake_api},
    };

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
        name: String,
    }

    #[tokio::test]
    async fn log_in_returns_token() {
        let api = spawn_fake_api().await;

        let token = api
            .client()
            .log_in(&Credentials {
                email: TEST_EMAIL.to_owned(),
                password: TEST_PASSWORD.to_owned(),
            })
            .await
            .unwrap();

        assert_eq!(token, AccessToken::new(TEST_TOKEN));
    }

    #[tokio::test]
    async fn log_in_with_wrong_password_fails() {
        let api = spawn_fake_api().await;

        let result = api
            .client()
            .log_in(&Credentials {
                email: TEST_EMAIL.to_owned(),
                password: "wrong".to_owned(),
            })
            .await;

        assert_eq!(result, Err(Error::InvalidCredentials));
    }

    #[tokio::test]
    async fn list_sends_query_and_bearer_token() {
        let api = spawn_fake_api().await;
        api.set_page(
            "/projects",
            json!({"items": [{"id": 3, "name": "Ofis"}], "total": 11}),
        );
        let params = ListParams {
            search: "of".to_owned(),
            skip: 10,
            limit: 5,
            sort_by: "name".to_owned(),
            sort_order: "desc".to_owned(),
        };

        let page: Page<Row> = api
            .client()
            .list("/projects", &AccessToken::new(TEST_TOKEN), &params)
            .await
            .unwrap();

        assert_eq!(
            page,
            Page {
                items: vec![Row {
                    id: 3,
                    name: "Ofis".to_owned()
                }],
                total: 11
            }
        );
        let request = api.last_request();
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/projects");
        assert_eq!(request.query_value("search"), Some("of"));
        assert_eq!(request.query_value("skip"), Some("10"));
        assert_eq!(request.query_value("limit"), Some("5"));
        assert_eq!(request.query_value("sort_by"), Some("name"));
        assert_eq!(request.query_value("sort_order"), Some("desc"));
        assert_eq!(
            request.authorization.as_deref(),
            Some(format!("Bearer {TEST_TOKEN}").as_str())
        );
    }

    #[tokio::test]
    async fn rejected_token_maps_to_unauthorized() {
        let api = spawn_fake_api().await;

        let result: Result<Page<Row>, Error> = api
            .client()
            .list("/projects", &AccessToken::new("expired"), &ListParams::all(10))
            .await;

        assert_eq!(result, Err(Error::Unauthorized));
    }

    #[tokio::test]
    async fn error_detail_is_kept() {
        let api = spawn_fake_api().await;
        api.fail_writes(400, json!({"detail": "Bu tip ve isimde kategori zaten var."}));

        let result = api
            .client()
            .create(
                "/categories",
                &AccessToken::new(TEST_TOKEN),
                &json!({"type": "gelir", "name": "Maaş"}),
            )
            .await;

        assert_eq!(
            result,
            Err(Error::Api {
                status: 400,
                detail: Some("Bu tip ve isimde kategori zaten var.".to_owned())
            })
        );
    }

    #[tokio::test]
    async fn validation_error_has_no_detail() {
        let api = spawn_fake_api().await;
        api.fail_writes(422, json!({"detail": [{"loc": ["body", "name"], "msg": "field required"}]}));

        let result = api
            .client()
            .update("/projects", 4, &AccessToken::new(TEST_TOKEN), &json!({}))
            .await;

        assert_eq!(
            result,
            Err(Error::Api {
                status: 422,
                detail: None
            })
        );
    }

    #[tokio::test]
    async fn delete_targets_resource() {
        let api = spawn_fake_api().await;

        api.client()
            .delete("/transactions", 42, &AccessToken::new(TEST_TOKEN))
            .await
            .unwrap();

        let request = api.last_request();
        assert_eq!(request.method, "DELETE");
        assert_eq!(request.path, "/transactions/42");
    }

    #[tokio::test]
    async fn unreachable_api_maps_to_http_error() {
        let client = ApiClient::new(crate::test_utils::SERVER_UNREACHABLE_URL).unwrap();

        let result: Result<serde_json::Value, Error> = client.get_public("/exchange-rates").await;

        assert!(matches!(result, Err(Error::Http(_))), "got {result:?}");
    }
}
