//! End-to-end login against a mock authentication endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use clinic::{
    ApiConfig, Credentials, HttpAuthClient, LoginController, LoginOutcome, LoginView,
    MemoryTokenStore, SessionTokens, TokenStore, DEFAULT_REJECTION_MESSAGE, RETRY_LATER_MESSAGE,
};
use serde_json::{json, Value};

type Received = Arc<Mutex<Vec<Value>>>;

async fn login_handler(State(received): State<Received>, Json(body): Json<Value>) -> Response {
    received.lock().unwrap().push(body.clone());

    match body["email"].as_str().unwrap_or_default() {
        "ok@clinic.test" => Json(json!({
            "access_token": "A",
            "refresh_token": "B",
            "user": { "id": 1, "role": "therapist" }
        }))
        .into_response(),
        "message@clinic.test" => {
            (StatusCode::UNAUTHORIZED, Json(json!({ "message": "bad creds" }))).into_response()
        }
        "nomessage@clinic.test" => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid credentials" })),
        )
            .into_response(),
        "html@clinic.test" => (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").into_response(),
        _ => (StatusCode::OK, "not json").into_response(),
    }
}

async fn spawn_auth_server() -> (String, Received) {
    let received: Received = Arc::default();
    let router = Router::new()
        .route("/login/", post(login_handler))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}", addr), received)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
struct FormState {
    error: Option<String>,
    error_visible: bool,
    submitting: bool,
    location: Option<String>,
}

impl LoginView for FormState {
    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.error_visible = true;
    }

    fn hide_error(&mut self) {
        self.error_visible = false;
    }

    fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    fn navigate(&mut self, href: &str) {
        self.location = Some(href.to_string());
    }
}

fn controller(base_url: &str) -> LoginController<HttpAuthClient, MemoryTokenStore> {
    let api = ApiConfig {
        base_url: base_url.to_string(),
        ..ApiConfig::default()
    };
    LoginController::new(
        HttpAuthClient::new(&api),
        MemoryTokenStore::new(),
        "./home.html",
    )
}

#[tokio::test]
async fn test_successful_login_stores_tokens() {
    init_tracing();
    let (base_url, received) = spawn_auth_server().await;
    let controller = controller(&base_url);
    let mut form = FormState::default();

    let outcome = controller
        .submit(Credentials::new("ok@clinic.test", "pw"), &mut form)
        .await;

    assert_eq!(outcome, LoginOutcome::LoggedIn(SessionTokens::new("A", "B")));
    assert_eq!(
        controller.store().load().unwrap(),
        Some(SessionTokens::new("A", "B"))
    );
    assert_eq!(form.location.as_deref(), Some("./home.html"));
    assert!(!form.submitting);

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0],
        json!({ "email": "ok@clinic.test", "password": "pw" })
    );
}

#[tokio::test]
async fn test_rejection_with_message() {
    init_tracing();
    let (base_url, _) = spawn_auth_server().await;
    let controller = controller(&base_url);
    let mut form = FormState::default();

    let outcome = controller
        .submit(Credentials::new("message@clinic.test", "pw"), &mut form)
        .await;

    assert_eq!(outcome, LoginOutcome::Rejected("bad creds".to_string()));
    assert!(form.error_visible);
    assert_eq!(form.error.as_deref(), Some("bad creds"));
    assert!(controller.store().is_empty());
}

#[tokio::test]
async fn test_rejection_without_message_field() {
    init_tracing();
    let (base_url, _) = spawn_auth_server().await;
    let controller = controller(&base_url);
    let mut form = FormState::default();

    controller
        .submit(Credentials::new("nomessage@clinic.test", "pw"), &mut form)
        .await;

    assert_eq!(form.error.as_deref(), Some(DEFAULT_REJECTION_MESSAGE));
    assert_eq!(form.location, None);
}

#[tokio::test]
async fn test_rejection_with_non_json_body() {
    init_tracing();
    let (base_url, _) = spawn_auth_server().await;
    let controller = controller(&base_url);
    let mut form = FormState::default();

    let outcome = controller
        .submit(Credentials::new("html@clinic.test", "pw"), &mut form)
        .await;

    assert_eq!(
        outcome,
        LoginOutcome::Rejected(DEFAULT_REJECTION_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn test_malformed_success_body_is_retry_later() {
    init_tracing();
    let (base_url, _) = spawn_auth_server().await;
    let controller = controller(&base_url);
    let mut form = FormState::default();

    let outcome = controller
        .submit(Credentials::new("garbage@clinic.test", "pw"), &mut form)
        .await;

    assert_eq!(outcome, LoginOutcome::Failed(RETRY_LATER_MESSAGE.to_string()));
    assert!(controller.store().is_empty());
}

#[tokio::test]
async fn test_unreachable_endpoint_is_retry_later() {
    init_tracing();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let controller = controller(&format!("http://{}", addr));
    let mut form = FormState::default();

    let outcome = controller
        .submit(Credentials::new("ok@clinic.test", "pw"), &mut form)
        .await;

    assert_eq!(outcome, LoginOutcome::Failed(RETRY_LATER_MESSAGE.to_string()));
    assert_eq!(form.error.as_deref(), Some(RETRY_LATER_MESSAGE));
    assert!(form.error_visible);
    assert!(controller.store().get("access_token").unwrap().is_none());
}
