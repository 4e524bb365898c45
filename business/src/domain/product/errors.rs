use crate::domain::envelope::ErrorCode;
use crate::domain::errors::BackendError;

use super::query::QueryError;

/// Form validation failures.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.title_too_short")]
    TitleTooShort,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.description_too_long")]
    DescriptionTooLong,
    #[error("product.invalid_image_url")]
    InvalidImageUrl,
}

impl ProductError {
    /// Text shown next to the form when validation fails.
    pub fn user_message(&self) -> &'static str {
        match self {
            ProductError::TitleTooShort => "Title must be at least 3 characters!",
            ProductError::InvalidPrice => "Price must be positive!",
            ProductError::DescriptionTooLong => "Description must be at most 500 characters!",
            ProductError::InvalidImageUrl => {
                "Please enter a valid URL starting with http:// or https://"
            }
        }
    }
}

/// Outcome of a proxy use case that did not produce a pass-through body.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("product.missing_product_id")]
    MissingProductId,
    #[error("product.missing_required_fields")]
    MissingRequiredFields,
    #[error("auth.missing_token")]
    MissingToken,
    #[error("auth.invalid_token")]
    InvalidToken,
    #[error("query.invalid_pagination")]
    InvalidQuery(#[from] QueryError),
    /// The backend answered with a non-2xx status.
    #[error("backend.rejected: {status} {code}")]
    Rejected { status: u16, code: ErrorCode },
    #[error("backend.unavailable")]
    Backend(#[from] BackendError),
}

impl ProxyError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ProxyError::MissingProductId => ErrorCode::MissingProductId,
            ProxyError::MissingRequiredFields => ErrorCode::MissingRequiredFields,
            ProxyError::MissingToken => ErrorCode::MissingToken,
            ProxyError::InvalidToken => ErrorCode::InvalidToken,
            ProxyError::InvalidQuery(_) => ErrorCode::InvalidPagination,
            ProxyError::Rejected { code, .. } => *code,
            ProxyError::Backend(_) => ErrorCode::InternalServerError,
        }
    }
}
