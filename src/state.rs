use std::sync::Arc;

use crate::{
  config::AppConfig,
  domains::verification::{
    model::{SendVerificationResponse, VerificationRequest},
    service::{DispatchError, VerificationService},
  },
  email::{EmailProvider, ResendClient},
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_verification_email(
    &self,
    request: VerificationRequest,
  ) -> impl std::future::Future<Output = Result<SendVerificationResponse, DispatchError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub verification_service: Arc<VerificationService>,
}

impl SharedAppState {
  pub fn new(config: &AppConfig) -> Self {
    let provider = Arc::new(ResendClient::new(
      config.resend_api_key.clone(),
      config.resend_api_base.clone(),
    ));
    Self::with_provider(provider, config.mail_from.clone())
  }

  /// Construction seam for tests: any [`EmailProvider`] stands in for the
  /// real Resend client.
  pub fn with_provider(provider: Arc<dyn EmailProvider>, mail_from: String) -> Self {
    let verification_service = Arc::new(VerificationService::new(provider, mail_from));

    Self { verification_service }
  }
}

impl AppState for SharedAppState {
  async fn send_verification_email(
    &self,
    request: VerificationRequest,
  ) -> Result<SendVerificationResponse, DispatchError> {
    self.verification_service.send_verification_email(request).await
  }
}
