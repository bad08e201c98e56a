use axum::{
  body::Bytes,
  extract::State,
  http::{header, StatusCode},
  response::{IntoResponse, Json as JsonResponse},
  routing::{post, Router},
};

use super::service::VerificationService;
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn verification_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/", post(send_verification_handler).options(preflight_handler))
    .route(
      "/send-verification-email",
      post(send_verification_handler).options(preflight_handler),
    )
}

/// Cross-origin preflight: acknowledge with permissive headers, nothing else.
pub async fn preflight_handler() -> impl IntoResponse {
  (
    StatusCode::OK,
    [
      (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
      (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
      (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type, Authorization"),
    ],
    "ok",
  )
}

/// The send path parses the raw body itself rather than using the `Json`
/// extractor so malformed input funnels through the same error response as
/// provider failures.
pub async fn send_verification_handler(
  State(state): State<SharedAppState>,
  body: Bytes,
) -> Result<impl IntoResponse, AppError> {
  let request = VerificationService::parse_request(&body)?;
  let response = state.send_verification_email(request).await?;

  Ok((
    StatusCode::OK,
    [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
    JsonResponse(response),
  ))
}
