use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt;

use crate::services::OrderError;
use crate::views::pages;

/// Errors that terminate a request with a blunt HTML page.
#[derive(Debug)]
pub enum ApiError {
    ValidationError(String),

    DatabaseError(String),

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::ValidationError(msg) => write!(f, "Error: {}", msg),
            ApiError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal Error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::ValidationError(msg) => {
                tracing::debug!("Validation error: {}", msg);
                StatusCode::BAD_REQUEST
            }
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Html(pages::error(&self.to_string()))).into_response()
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Validation(msg) => ApiError::ValidationError(msg),
            OrderError::Database(msg) => ApiError::DatabaseError(msg),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::InternalError(format!("{err:#}"))
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::ValidationError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        ApiError::InternalError(msg.into())
    }
}
