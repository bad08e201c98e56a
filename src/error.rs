use axum::{
  http::{header, StatusCode},
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "error": self.message,
    }));

    (
      self.status_code,
      [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
      body,
    )
      .into_response()
  }
}

impl From<AppError> for StatusCode {
  fn from(err: AppError) -> Self {
    err.status_code
  }
}

impl From<crate::domains::verification::service::DispatchError> for AppError {
  fn from(error: crate::domains::verification::service::DispatchError) -> Self {
    tracing::error!("Dispatch error: {}", error);
    AppError::internal_server_error(error.to_string())
  }
}
