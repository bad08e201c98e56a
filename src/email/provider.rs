use async_trait::async_trait;
use reqwest::Client;
use std::error::Error;

use super::types::{OutboundEmail, ProviderResponse};

#[derive(Debug)]
pub enum ProviderError {
  /// The provider answered with a non-2xx status.
  Rejected { status: u16, detail: String },
  /// The call never completed (DNS, connect, timeout, body read).
  Transport(String),
}

impl Error for ProviderError {}

impl std::fmt::Display for ProviderError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ProviderError::Rejected { status, detail } => write!(f, "{} {}", status, detail),
      ProviderError::Transport(msg) => write!(f, "{}", msg),
    }
  }
}

/// Transactional email provider seam. Handlers only see this trait, which
/// keeps the HTTP client swappable for a mock in tests.
#[async_trait]
pub trait EmailProvider: Send + Sync {
  async fn send(&self, email: &OutboundEmail) -> Result<ProviderResponse, ProviderError>;
}

/// Resend HTTP API client (`POST {api_base}/emails` with a bearer token).
pub struct ResendClient {
  http: Client,
  api_key: String,
  api_base: String,
}

impl ResendClient {
  pub fn new(api_key: String, api_base: String) -> Self {
    ResendClient {
      http: Client::new(),
      api_key,
      api_base,
    }
  }

  fn send_endpoint(&self) -> String {
    format!("{}/emails", self.api_base.trim_end_matches('/'))
  }
}

#[async_trait]
impl EmailProvider for ResendClient {
  async fn send(&self, email: &OutboundEmail) -> Result<ProviderResponse, ProviderError> {
    let response = self
      .http
      .post(self.send_endpoint())
      .bearer_auth(&self.api_key)
      .json(email)
      .send()
      .await
      .map_err(|e| ProviderError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
      tracing::error!("Email provider rejected the message: {}", status);
      return Err(ProviderError::Rejected {
        status: status.as_u16(),
        detail: status.canonical_reason().unwrap_or("unknown status").to_string(),
      });
    }

    let result: ProviderResponse = response
      .json()
      .await
      .map_err(|e| ProviderError::Transport(e.to_string()))?;

    tracing::info!("Email accepted by provider, id: {}", result.id);
    Ok(result)
  }
}
