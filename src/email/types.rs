use serde::{Deserialize, Serialize};

/// Payload for the provider's send endpoint, serialized as
/// `{ from, to, subject, html }`. Built fresh for every request.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
  pub from: String,
  pub to: Vec<String>,
  pub subject: String,
  pub html: String,
}

impl OutboundEmail {
  pub fn new(from: String, to: Vec<String>, subject: String, html: String) -> Self {
    OutboundEmail { from, to, subject, html }
  }
}

/// The part of the provider's 2xx response body we care about.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderResponse {
  pub id: String,
}
