//! An in-process stand-in for the REST API that records the requests it gets.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header::AUTHORIZATION},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::api::ApiClient;

pub(crate) const TEST_EMAIL: &str = "admin@example.com";
pub(crate) const TEST_PASSWORD: &str = "hunter2";
pub(crate) const TEST_TOKEN: &str = "test-access-token";
/// Nothing listens on the discard port, so requests fail to connect.
pub(crate) const SERVER_UNREACHABLE_URL: &str = "http://127.0.0.1:9";

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Option<Value>,
    pub authorization: Option<String>,
}

impl RecordedRequest {
    pub(crate) fn query_value(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}

#[derive(Debug, Default)]
struct FakeApiData {
    pages: HashMap<String, Value>,
    exchange_rates: Option<Value>,
    write_failure: Option<(u16, Value)>,
    requests: Vec<RecordedRequest>,
}

type SharedData = Arc<Mutex<FakeApiData>>;

/// A running fake API, serving on an ephemeral port until the test ends.
pub(crate) struct FakeApi {
    pub url: String,
    data: SharedData,
}

impl FakeApi {
    pub(crate) fn client(&self) -> ApiClient {
        ApiClient::new(&self.url).expect("Could not create API client")
    }

    /// Serve `page`, e.g. `{"items": [...], "total": 1}`, for GET requests to `path`.
    pub(crate) fn set_page(&self, path: &str, page: Value) {
        self.data
            .lock()
            .unwrap()
            .pages
            .insert(path.to_owned(), page);
    }

    pub(crate) fn set_exchange_rates(&self, rates: Value) {
        self.data.lock().unwrap().exchange_rates = Some(rates);
    }

    /// Answer every POST, PUT and DELETE with `status` and `body`.
    pub(crate) fn fail_writes(&self, status: u16, body: Value) {
        self.data.lock().unwrap().write_failure = Some((status, body));
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.data.lock().unwrap().requests.clone()
    }

    #[track_caller]
    pub(crate) fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("The fake API did not receive any requests")
    }
}

pub(crate) async fn spawn_fake_api() -> FakeApi {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind fake API listener");
    let address = listener
        .local_addr()
        .expect("Could not get fake API address");

    let data = SharedData::default();
    let app = Router::new()
        .fallback(handle_request)
        .with_state(data.clone());

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Fake API server failed");
    });

    FakeApi {
        url: format!("http://{address}"),
        data,
    }
}

fn json_response(status: u16, body: Value) -> Response {
    let status = StatusCode::from_u16(status).expect("Invalid status code");

    (status, Json(body)).into_response()
}

async fn handle_request(
    State(data): State<SharedData>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_owned(),
        query: serde_urlencoded::from_str(uri.query().unwrap_or_default())
            .expect("Could not parse query string"),
        body: serde_json::from_slice(&body).ok(),
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned),
    };

    let mut data = data.lock().unwrap();
    data.requests.push(request.clone());

    if request.path == "/login" {
        let password = request
            .body
            .as_ref()
            .and_then(|body| body.get("password"))
            .and_then(Value::as_str);

        return if password == Some(TEST_PASSWORD) {
            json_response(
                200,
                json!({"access_token": TEST_TOKEN, "token_type": "bearer"}),
            )
        } else {
            json_response(401, json!({"detail": "Geçersiz e-posta veya şifre."}))
        };
    }

    if request.path == "/exchange-rates" {
        return match &data.exchange_rates {
            Some(rates) => json_response(200, rates.clone()),
            None => json_response(500, json!({"detail": "TCMB'ye ulaşılamadı."})),
        };
    }

    if request.authorization != Some(format!("Bearer {TEST_TOKEN}")) {
        return json_response(401, json!({"detail": "Not authenticated"}));
    }

    if method == Method::GET {
        let page = data
            .pages
            .get(&request.path)
            .cloned()
            .unwrap_or_else(|| json!({"items": [], "total": 0}));

        return json_response(200, page);
    }

    match &data.write_failure {
        Some((status, body)) => json_response(*status, body.clone()),
        None => json_response(200, request.body.unwrap_or_else(|| json!({}))),
    }
}
