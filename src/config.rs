use std::env;

/// Runtime configuration, read from the environment once at startup and
/// injected into the application state. The API key is intentionally not
/// validated here: a missing key surfaces as a 401 from the provider when
/// the first send is attempted.
#[derive(Debug, Clone)]
pub struct AppConfig {
  pub resend_api_key: String,
  pub resend_api_base: String,
  pub mail_from: String,
  pub bind_addr: String,
}

impl AppConfig {
  pub fn from_env() -> Self {
    AppConfig {
      resend_api_key: env::var("RESEND_API_KEY").unwrap_or_default(),
      resend_api_base: env::var("RESEND_API_BASE").unwrap_or_else(|_| "https://api.resend.com".to_string()),
      mail_from: env::var("MAIL_FROM").unwrap_or_else(|_| "onboarding@resend.dev".to_string()),
      bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
    }
  }
}
