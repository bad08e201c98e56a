use serde::{Deserialize, Serialize};
use validator::Validate;

/// Inbound registration payload. Lives for one request only.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerificationRequest {
  #[validate(email(message = "email must be a valid address"))]
  pub email: String,
  #[validate(length(min = 1, message = "token must not be empty"))]
  pub token: String,
  #[serde(rename = "fullName", default)]
  pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendVerificationResponse {
  pub success: bool,
  pub message: String,
  #[serde(rename = "emailId")]
  pub email_id: String,
}
