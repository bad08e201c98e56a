//! Outbound email functionality.
//!
//! This module provides the provider abstraction, the Resend HTTP client
//! and the verification email template renderer.

mod provider;
mod template;
mod types;

pub use provider::{EmailProvider, ProviderError, ResendClient};
pub use template::{render_verification_email, VerificationEmailParams, VERIFICATION_SUBJECT};
pub use types::{OutboundEmail, ProviderResponse};
