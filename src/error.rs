use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt::{self, Display};

/// External collaborator a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamService {
    /// Text-generation API that proposes candidate titles
    Suggestion,
    /// Movie-metadata API that resolves titles into records
    Metadata,
}

impl Display for UpstreamService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamService::Suggestion => write!(f, "suggestion"),
            UpstreamService::Metadata => write!(f, "metadata"),
        }
    }
}

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream {service} service error: {message}")]
    Upstream {
        service: UpstreamService,
        message: String,
    },
}

impl AppError {
    /// Builds an upstream error for the given collaborator
    pub fn upstream(service: UpstreamService, message: impl Display) -> Self {
        AppError::Upstream {
            service,
            message: message.to_string(),
        }
    }

    /// True when the failure came from the given collaborator
    pub fn is_upstream(&self, expected: UpstreamService) -> bool {
        matches!(self, AppError::Upstream { service, .. } if *service == expected)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        };

        let message = match self {
            AppError::InvalidInput(msg) | AppError::Configuration(msg) => msg,
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_display_names_service() {
        let err = AppError::upstream(UpstreamService::Suggestion, "status 500");
        assert_eq!(
            err.to_string(),
            "Upstream suggestion service error: status 500"
        );
    }

    #[test]
    fn test_is_upstream_matches_service() {
        let err = AppError::upstream(UpstreamService::Metadata, "timeout");
        assert!(err.is_upstream(UpstreamService::Metadata));
        assert!(!err.is_upstream(UpstreamService::Suggestion));
        assert!(!AppError::InvalidInput("x".to_string()).is_upstream(UpstreamService::Metadata));
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::InvalidInput("empty".to_string()), StatusCode::BAD_REQUEST),
            (
                AppError::Configuration("missing key".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::upstream(UpstreamService::Metadata, "down"),
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
