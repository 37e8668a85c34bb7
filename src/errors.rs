use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Invalid input")]
    InvalidInput,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("not found")]
    NotFound,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput | Self::DivisionByZero => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Same shape as the router's own fallback: no body.
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::InvalidInput | Self::DivisionByZero => (
                self.status(),
                Json(ErrorResponse {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    async fn body_of(error: AppError) -> (StatusCode, String) {
        let response = error.into_response();
        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        (status, String::from_utf8(body.to_vec()).expect("utf8 body"))
    }

    #[tokio::test]
    async fn invalid_input_maps_to_bad_request() {
        let (status, body) = body_of(AppError::InvalidInput).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "{\"error\":\"Invalid input\"}");
    }

    #[tokio::test]
    async fn division_by_zero_maps_to_bad_request() {
        let (status, body) = body_of(AppError::DivisionByZero).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "{\"error\":\"Division by zero\"}");
    }

    #[tokio::test]
    async fn not_found_has_empty_body() {
        let (status, body) = body_of(AppError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }
}
