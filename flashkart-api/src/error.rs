use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use flashkart_catalog::{BasketError, PricingError};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    Anyhow(anyhow::Error),
}

impl AppError {
    pub fn pricing(err: PricingError) -> Self {
        // Every pricing failure is bad caller data
        AppError::ValidationError(err.to_string())
    }

    pub fn basket(err: BasketError) -> Self {
        match err {
            BasketError::UnknownProduct(_) => AppError::NotFoundError(err.to_string()),
            BasketError::Empty | BasketError::InvalidQuantity(_) => {
                AppError::ValidationError(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}
