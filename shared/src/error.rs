use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    PaymentRequired(String),
    #[error("{0}")]
    ConversionEntityError(String),
    #[error("{0}")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("ログインが必要です")]
    UnauthenticatedError,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            // 下位層で「見つからない」と分類された障害は 404 に寄せる
            AppError::SpecificOperationError(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::SpecificOperationError(_) | AppError::ConversionEntityError(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.status_code();
        if status_code == StatusCode::BAD_REQUEST {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happened"
            );
        } else {
            tracing::debug!(status = %status_code, error.message = %self, "request rejected");
        }

        status_code.into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
