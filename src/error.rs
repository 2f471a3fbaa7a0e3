//! Crate-wide error type.
//!
//! Authoring errors (bad segment dictionaries) abort the whole task parse;
//! submission errors abort the whole evaluation. Nothing is retried.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("segment dictionary should have key 'type'")]
  MissingType,

  #[error("unknown type string: {0}")]
  UnknownType(String),

  #[error("segment type '{0}' is not supported yet")]
  Unsupported(String),

  #[error("{what} must be a JSON object")]
  NotAnObject { what: String },

  #[error("<{owner}> has no field '{field}'")]
  MissingField { owner: String, field: String },

  #[error("<{owner}> field '{field}' should be {expected}")]
  WrongFieldType {
    owner: String,
    field: String,
    expected: &'static str,
  },

  #[error("key '{0}' collides with a reserved container attribute")]
  ReservedKey(String),

  #[error("question segment has an empty solution list")]
  EmptySolution,

  #[error("segment index already set (idx={0})")]
  IndexAlreadySet(usize),

  #[error("segment index was never set")]
  IndexNotSet,

  #[error("no submitted answer for segment {0}")]
  MissingSubmission(usize),

  #[error("Not found: {0}")]
  NotFound(String),

  #[error("Configuration error: {0}")]
  Config(String),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
}

impl Error {
  pub fn missing(owner: &str, field: &str) -> Self {
    Error::MissingField { owner: owner.to_string(), field: field.to_string() }
  }

  pub fn wrong_type(owner: &str, field: &str, expected: &'static str) -> Self {
    Error::WrongFieldType { owner: owner.to_string(), field: field.to_string(), expected }
  }

  fn status(&self) -> StatusCode {
    match self {
      Error::MissingType
      | Error::UnknownType(_)
      | Error::Unsupported(_)
      | Error::NotAnObject { .. }
      | Error::MissingField { .. }
      | Error::WrongFieldType { .. }
      | Error::ReservedKey(_)
      | Error::EmptySolution => StatusCode::UNPROCESSABLE_ENTITY,
      Error::MissingSubmission(_) | Error::Json(_) => StatusCode::BAD_REQUEST,
      Error::NotFound(_) => StatusCode::NOT_FOUND,
      Error::IndexAlreadySet(_) | Error::IndexNotSet | Error::Config(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> axum::response::Response {
    let status = self.status();
    let body = Json(json!({ "error": self.to_string() }));
    (status, body).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn authoring_errors_map_to_unprocessable() {
    assert_eq!(Error::MissingType.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(Error::missing("input", "answer").status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(Error::MissingSubmission(3).status(), StatusCode::BAD_REQUEST);
    assert_eq!(Error::NotFound("task x".into()).status(), StatusCode::NOT_FOUND);
  }

  #[test]
  fn messages_name_the_offending_field() {
    let msg = Error::missing("input", "answer").to_string();
    assert_eq!(msg, "<input> has no field 'answer'");
    assert_eq!(Error::UnknownType("radix".into()).to_string(), "unknown type string: radix");
  }
}
