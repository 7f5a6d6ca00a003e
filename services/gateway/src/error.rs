use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use types::errors::{InvalidInputError, ParseError};

/// Central error type for the Gateway application
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Parse(err) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "PARSE_ERROR",
                    "message": err.to_string(),
                    "field": err.field,
                }),
            ),
            // Recoverable: the user adjusts the offending field and retries
            AppError::InvalidInput(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": "INVALID_INPUT",
                    "message": err.to_string(),
                    "kind": err.kind,
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_is_bad_request() {
        let response = AppError::from(ParseError::new("entry_price", "abc")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_input_is_unprocessable() {
        let response = AppError::from(InvalidInputError::zero_risk_distance()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
