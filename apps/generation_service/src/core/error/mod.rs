use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Provider error: {0}")]
    Provider(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        // Alternate formatting keeps the whole context chain in the message.
        AppError::Provider(format!("{:#}", err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            AppError::Provider(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Server error", "message": message })),
            )
                .into_response(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
