use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json, types::MaybeUndefined};
use serde_json::Value;

use business::domain::envelope::ErrorCode;

/// Failure envelope returned by every proxy route. Mirrors the shape the
/// backend uses so clients decode both the same way.
#[derive(Object, Debug, Clone, PartialEq)]
pub struct EnvelopeResponse {
    /// HTTP status as a string, e.g. "400"
    pub status_code: String,
    pub is_success: bool,
    pub error_code: Option<String>,
    pub data: Option<Value>,
    /// Present (as null) only on list failures
    pub pagination: MaybeUndefined<Value>,
}

impl EnvelopeResponse {
    pub fn failure(status: StatusCode, code: ErrorCode) -> Self {
        Self {
            status_code: status.as_u16().to_string(),
            is_success: false,
            error_code: Some(code.as_str().to_string()),
            data: None,
            pagination: MaybeUndefined::Undefined,
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.data = Some(Value::String(message.to_string()));
        self
    }

    pub fn with_null_pagination(mut self) -> Self {
        self.pagination = MaybeUndefined::Null;
        self
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<EnvelopeResponse>);
}
