//! API error type rendered as `{ "message": ... }` JSON bodies.

use std::any::Any;

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use thiserror::Error;
use tracing::error;

use crate::protocol::MessageOut;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0} not found")]
  NotFound(&'static str),

  #[error("{0}")]
  Internal(String),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    (status, Json(MessageOut { message: self.to_string() })).into_response()
  }
}

/// Used by `CatchPanicLayer`: log the panic, answer with a generic 500.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
  let detail = if let Some(s) = err.downcast_ref::<String>() {
    s.clone()
  } else if let Some(s) = err.downcast_ref::<&str>() {
    s.to_string()
  } else {
    "unknown panic".to_string()
  };
  error!(target: "sanskriti_backend", %detail, "Handler panicked");
  ApiError::Internal("Internal server error".into()).into_response()
}
