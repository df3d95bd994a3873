#![allow(dead_code)]

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const TOKEN: &str = "Bearer test-token";

/// A request as the mock bank saw it on the wire.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Debug, Clone)]
struct Stub {
    method: Method,
    path_prefix: String,
    body_contains: Option<String>,
    status: StatusCode,
    body: String,
}

impl Stub {
    fn matches(&self, method: &Method, uri: &Uri, body: &str) -> bool {
        self.method == method
            && uri.path().starts_with(&self.path_prefix)
            && self
                .body_contains
                .as_ref()
                .is_none_or(|needle| body.contains(needle.as_str()))
    }
}

#[derive(Clone, Default)]
struct MockState {
    stubs: Arc<Mutex<Vec<Stub>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        uri: uri.clone(),
        headers,
        body: body.clone(),
    });

    let stubs = state.stubs.lock().unwrap();
    match stubs.iter().rev().find(|s| s.matches(&method, &uri, &body)) {
        // `{transferUid}` echoes the last path segment back, like the real add-money call.
        Some(stub) => {
            let transfer_uid = uri.path().rsplit('/').next().unwrap_or_default();
            (stub.status, stub.body.replace("{transferUid}", transfer_uid))
        }
        None => (StatusCode::NOT_FOUND, format!("no stub for {method} {uri}")),
    }
}

/// A stand-in for the banking API on a random local port.
///
/// Stubs registered later take precedence over earlier ones.
pub struct MockBank {
    addr: SocketAddr,
    state: MockState,
}

impl MockBank {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock bank");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock bank crashed");
        });

        Self { addr, state }
    }

    pub fn address(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn respond(&self, method: Method, path_prefix: &str, status: u16, body: &str) {
        self.push(method, path_prefix, None, status, body);
    }

    /// Like [`respond`](Self::respond) but only for requests whose body contains `needle`.
    pub fn respond_if_body_contains(
        &self,
        method: Method,
        path_prefix: &str,
        needle: &str,
        status: u16,
        body: &str,
    ) {
        self.push(method, path_prefix, Some(needle.to_string()), status, body);
    }

    fn push(
        &self,
        method: Method,
        path_prefix: &str,
        body_contains: Option<String>,
        status: u16,
        body: &str,
    ) {
        self.state.stubs.lock().unwrap().push(Stub {
            method,
            path_prefix: path_prefix.to_string(),
            body_contains,
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
        });
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_with(&self, method: Method) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }

    /// Serves one account and a feed for it, plus a successful add-money endpoint.
    pub fn with_account_and_feed(&self, account_uid: &str, feed_items: serde_json::Value) {
        self.respond(
            Method::GET,
            "/accounts",
            200,
            &serde_json::json!({
                "accounts": [
                    { "accountUid": "00000000-0000-4000-8000-000000000000", "accountType": "ADDITIONAL" },
                    { "accountUid": account_uid, "accountType": "PRIMARY", "currency": "GBP" }
                ]
            })
            .to_string(),
        );
        self.respond(
            Method::GET,
            &format!("/feed/account/{account_uid}/settled-transactions-between"),
            200,
            &serde_json::json!({ "feedItems": feed_items }).to_string(),
        );
        self.respond(
            Method::PUT,
            &format!("/account/{account_uid}/savings-goals/"),
            200,
            r#"{"transferUid":"{transferUid}","success":true}"#,
        );
    }
}

pub fn feed_item(currency: &str, minor_units: i64, direction: &str) -> serde_json::Value {
    serde_json::json!({
        "feedItemUid": uuid::Uuid::new_v4(),
        "amount": { "currency": currency, "minorUnits": minor_units },
        "sourceAmount": { "currency": currency, "minorUnits": minor_units },
        "direction": direction,
        "status": "SETTLED",
        "transactionTime": "2024-03-05T12:00:00.000Z",
        "spendingCategory": "EATING_OUT"
    })
}

/// The scenario week: three outbound payments and a refund, rounding up to 158.
pub fn week(currency: &str) -> Vec<serde_json::Value> {
    vec![
        feed_item(currency, 435, "OUT"),
        feed_item(currency, 520, "OUT"),
        feed_item(currency, 87, "OUT"),
        feed_item(currency, 1, "IN"),
    ]
}
