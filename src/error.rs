//! Application error type and its HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

/// Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    /// Log the error server-side and render the generic 500 page.
    ///
    /// The underlying error is never exposed to the client.
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request handler failed");
        crate::web::pages::error_page(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server error",
            "An internal server error has occurred",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_error_renders_generic_500_page() {
        let detail = "config parse failed at line 42";
        let err = AppError::Config(config::ConfigError::Message(detail.to_string()));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("Server error"));
        assert!(!body.contains(detail));
    }
}
