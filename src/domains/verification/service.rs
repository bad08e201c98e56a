use std::error::Error;
use std::sync::Arc;

use validator::Validate;

use super::model::{SendVerificationResponse, VerificationRequest};
use crate::email::{
  render_verification_email, EmailProvider, OutboundEmail, ProviderError, VerificationEmailParams,
  VERIFICATION_SUBJECT,
};

#[derive(Debug)]
pub enum DispatchError {
  MalformedRequest(String),
  ProviderRejected { status: u16, detail: String },
  Transport(String),
}

impl Error for DispatchError {}

impl std::fmt::Display for DispatchError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      DispatchError::MalformedRequest(msg) => write!(f, "Invalid request: {}", msg),
      DispatchError::ProviderRejected { status, detail } => {
        write!(f, "Failed to send email: {} {}", status, detail)
      }
      DispatchError::Transport(msg) => write!(f, "Failed to reach email provider: {}", msg),
    }
  }
}

impl From<ProviderError> for DispatchError {
  fn from(err: ProviderError) -> Self {
    match err {
      ProviderError::Rejected { status, detail } => DispatchError::ProviderRejected { status, detail },
      ProviderError::Transport(msg) => DispatchError::Transport(msg),
    }
  }
}

impl From<serde_json::Error> for DispatchError {
  fn from(err: serde_json::Error) -> Self {
    DispatchError::MalformedRequest(err.to_string())
  }
}

pub struct VerificationService {
  provider: Arc<dyn EmailProvider>,
  mail_from: String,
}

impl VerificationService {
  pub fn new(provider: Arc<dyn EmailProvider>, mail_from: String) -> Self {
    Self { provider, mail_from }
  }

  /// Parses and validates the raw request body. Kept separate from the send
  /// path so malformed input is reported through the same error funnel as
  /// provider failures.
  pub fn parse_request(body: &[u8]) -> Result<VerificationRequest, DispatchError> {
    let request: VerificationRequest = serde_json::from_slice(body)?;
    request
      .validate()
      .map_err(|e| DispatchError::MalformedRequest(e.to_string()))?;
    Ok(request)
  }

  /// Renders the verification email for the request and hands it to the
  /// provider. One awaited call, no retries: the operation either fully
  /// succeeds or the whole request is reported as failed.
  pub async fn send_verification_email(
    &self,
    request: VerificationRequest,
  ) -> Result<SendVerificationResponse, DispatchError> {
    let html = render_verification_email(&VerificationEmailParams {
      full_name: request.full_name.as_deref(),
      token: &request.token,
    });

    let email = OutboundEmail::new(
      self.mail_from.clone(),
      vec![request.email.clone()],
      VERIFICATION_SUBJECT.to_string(),
      html,
    );

    tracing::info!("Dispatching verification email to {}", request.email);
    let result = self.provider.send(&email).await?;

    Ok(SendVerificationResponse {
      success: true,
      message: "Verification email sent successfully".to_string(),
      email_id: result.id,
    })
  }
}
