use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProxyError;

use crate::api::error::{EnvelopeResponse, IntoErrorResponse};

const MISSING_TOKEN_MESSAGE: &str = "Authorization token is required";
const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

impl IntoErrorResponse for ProxyError {
    fn into_error_response(self) -> (StatusCode, Json<EnvelopeResponse>) {
        let code = self.error_code();
        let (status, message) = match &self {
            ProxyError::MissingProductId
            | ProxyError::MissingRequiredFields
            | ProxyError::InvalidQuery(_) => (StatusCode::BAD_REQUEST, None),
            ProxyError::MissingToken => (StatusCode::UNAUTHORIZED, Some(MISSING_TOKEN_MESSAGE)),
            ProxyError::InvalidToken => (StatusCode::UNAUTHORIZED, Some(INVALID_TOKEN_MESSAGE)),
            ProxyError::Rejected { status, .. } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                None,
            ),
            ProxyError::Backend(_) => (StatusCode::INTERNAL_SERVER_ERROR, None),
        };

        let envelope = EnvelopeResponse::failure(status, code);
        let envelope = match message {
            Some(message) => envelope.with_message(message),
            None => envelope,
        };

        (status, Json(envelope))
    }
}
