use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Service not configured: {0}")]
    NotConfigured(String),

    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("HTTP request error: {0}")]
    ReqwestError(#[from] reqwest::Error),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            AppError::ValidationError(msg) => {
                log::warn!("Validation error: {msg}");
                (
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    msg.clone(),
                )
            }
            AppError::NotConfigured(msg) => {
                log::warn!("Dependency not configured: {msg}");
                (
                    actix_web::http::StatusCode::SERVICE_UNAVAILABLE,
                    "NOT_CONFIGURED",
                    msg.clone(),
                )
            }
            AppError::ExternalApiError(msg) => {
                log::error!("External API error: {msg}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "EXTERNAL_API_ERROR",
                    "Erro interno do servidor".to_string(),
                )
            }
            AppError::DatabaseError(msg) => {
                log::error!("Database error: {msg}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "Erro interno do servidor".to_string(),
                )
            }
            AppError::ReqwestError(err) => {
                log::error!("HTTP request error: {err}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "EXTERNAL_API_ERROR",
                    "Erro interno do servidor".to_string(),
                )
            }
        };

        HttpResponse::build(status_code).json(json!({
            "success": false,
            "error": {
                "code": error_code,
                "message": message
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::ValidationError("bad".to_string()), 400),
            (AppError::NotConfigured("stripe".to_string()), 503),
            (AppError::ExternalApiError("provider".to_string()), 500),
            (AppError::DatabaseError("insert".to_string()), 500),
        ];
        for (err, status) in cases {
            assert_eq!(err.error_response().status().as_u16(), status);
        }
    }
}
