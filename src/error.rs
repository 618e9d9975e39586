use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

// Every failure the booking flow can surface to a visitor. Messages are the
// user-facing display strings; routes return these directly.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("الشقة غير موجودة")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("عذراً، الشقة غير متاحة في هذه التواريخ")]
    Unavailable,

    #[error("تعذر الوصول إلى قاعدة البيانات المحلية")]
    Storage(#[source] std::io::Error),

    #[error("حدث خطأ أثناء عرض الصفحة")]
    Render(#[from] tera::Error),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::Unavailable => StatusCode::BAD_REQUEST,
            AppError::Storage(_) | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self {
            AppError::Storage(err) => tracing::error!("storage failure: {err}"),
            AppError::Render(err) => tracing::error!("template failure: {err}"),
            other => tracing::warn!("request rejected: {other}"),
        }

        (status, self.to_string()).into_response()
    }
}
