use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc, Mutex,
};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{HeaderMap, Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  email::{EmailProvider, OutboundEmail, ProviderError, ProviderResponse},
  state::SharedAppState,
};

enum MockOutcome {
  Accept(String),
  Reject { status: u16, detail: String },
}

/// Records every outbound email and counts provider invocations, so tests
/// can assert the provider is called exactly once per inbound request.
pub struct MockEmailProvider {
  outcome: MockOutcome,
  calls: AtomicUsize,
  sent: Mutex<Vec<OutboundEmail>>,
}

impl MockEmailProvider {
  pub fn accepting(id: &str) -> Arc<Self> {
    Arc::new(Self {
      outcome: MockOutcome::Accept(id.to_string()),
      calls: AtomicUsize::new(0),
      sent: Mutex::new(Vec::new()),
    })
  }

  pub fn rejecting(status: u16, detail: &str) -> Arc<Self> {
    Arc::new(Self {
      outcome: MockOutcome::Reject {
        status,
        detail: detail.to_string(),
      },
      calls: AtomicUsize::new(0),
      sent: Mutex::new(Vec::new()),
    })
  }

  pub fn call_count(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }

  pub fn sent(&self) -> Vec<OutboundEmail> {
    self.sent.lock().expect("lock sent emails").clone()
  }
}

#[async_trait]
impl EmailProvider for MockEmailProvider {
  async fn send(&self, email: &OutboundEmail) -> Result<ProviderResponse, ProviderError> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    self.sent.lock().expect("lock sent emails").push(email.clone());

    match &self.outcome {
      MockOutcome::Accept(id) => Ok(ProviderResponse { id: id.clone() }),
      MockOutcome::Reject { status, detail } => Err(ProviderError::Rejected {
        status: *status,
        detail: detail.clone(),
      }),
    }
  }
}

pub fn app_with_provider(provider: Arc<MockEmailProvider>) -> Router {
  let state = SharedAppState::with_provider(provider, "onboarding@resend.dev".to_string());
  create_app(state)
}

async fn send_request(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let headers = response.headers().clone();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, headers, body)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, HeaderMap, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  send_request(app, request).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, HeaderMap, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(body.to_string()))
    .expect("build request");

  send_request(app, request).await
}

pub async fn options_request(app: Router, uri: &str) -> (StatusCode, HeaderMap, Bytes) {
  let request = Request::builder()
    .method("OPTIONS")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  send_request(app, request).await
}

pub async fn get_request(app: Router, uri: &str) -> (StatusCode, HeaderMap, Bytes) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  send_request(app, request).await
}
