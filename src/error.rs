//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::pricing::PricingError;
use crate::wizard::WizardError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Wizard(#[from] WizardError),
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Pricing(PricingError::UnknownService { .. }) => StatusCode::NOT_FOUND,
            AppError::Pricing(PricingError::MissingInput { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Wizard(WizardError::InvalidStep { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Wizard(_) => StatusCode::CONFLICT,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::Pricing(PricingError::UnknownService { .. }) => "unknown_service",
            AppError::Pricing(PricingError::MissingInput { .. }) => "missing_input",
            AppError::Wizard(err) => err.kind(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (message, details) = match &self {
            AppError::Wizard(WizardError::InvalidStep { errors, .. }) => (
                self.to_string(),
                serde_json::to_value(errors).ok(),
            ),
            _ => (self.to_string(), None),
        };

        let body = ErrorResponse {
            error_type: self.error_type(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
