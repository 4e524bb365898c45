use serde::{Deserialize, Serialize};

/// Machine-readable failure tags carried in `error_code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    MissingProductId,
    MissingRequiredFields,
    MissingToken,
    InvalidToken,
    InvalidPagination,
    ProductNotFound,
    FetchProductsFailed,
    CreateProductFailed,
    UpdateProductFailed,
    DeleteProductFailed,
    InternalServerError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingProductId => "MISSING_PRODUCT_ID",
            ErrorCode::MissingRequiredFields => "MISSING_REQUIRED_FIELDS",
            ErrorCode::MissingToken => "MISSING_TOKEN",
            ErrorCode::InvalidToken => "INVALID_TOKEN",
            ErrorCode::InvalidPagination => "INVALID_PAGINATION",
            ErrorCode::ProductNotFound => "PRODUCT_NOT_FOUND",
            ErrorCode::FetchProductsFailed => "FETCH_PRODUCTS_FAILED",
            ErrorCode::CreateProductFailed => "CREATE_PRODUCT_FAILED",
            ErrorCode::UpdateProductFailed => "UPDATE_PRODUCT_FAILED",
            ErrorCode::DeleteProductFailed => "DELETE_PRODUCT_FAILED",
            ErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// The `{status_code, is_success, error_code?, data}` wrapper used by every
/// proxy response. List responses additionally carry `pagination`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status_code: String,
    pub is_success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> ApiEnvelope<T> {
    pub fn success(status: u16, data: T) -> Self {
        Self {
            status_code: status.to_string(),
            is_success: true,
            error_code: None,
            data: Some(data),
            pagination: None,
        }
    }

    pub fn failure(status: u16, code: ErrorCode) -> Self {
        Self {
            status_code: status.to_string(),
            is_success: false,
            error_code: Some(code),
            data: None,
            pagination: None,
        }
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Numeric form of `status_code`, if it parses.
    pub fn status(&self) -> Option<u16> {
        self.status_code.parse().ok()
    }

    /// `is_success == false` is a failure whatever the transport status was.
    pub fn into_result(self) -> Result<Self, EnvelopeFailure> {
        if self.is_success {
            Ok(self)
        } else {
            Err(EnvelopeFailure {
                status_code: self.status_code,
                error_code: self.error_code,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("envelope.failure: {status_code} {error_code:?}")]
pub struct EnvelopeFailure {
    pub status_code: String,
    pub error_code: Option<ErrorCode>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_serialize_failure_with_null_data() {
        let envelope: ApiEnvelope<serde_json::Value> =
            ApiEnvelope::failure(400, ErrorCode::MissingProductId);

        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            value,
            json!({
                "status_code": "400",
                "is_success": false,
                "error_code": "MISSING_PRODUCT_ID",
                "data": null,
            })
        );
    }

    #[test]
    fn should_treat_unsuccessful_envelope_as_failure_when_status_is_ok() {
        let envelope: ApiEnvelope<Vec<u32>> = serde_json::from_value(json!({
            "status_code": "200",
            "is_success": false,
            "error_code": "FETCH_PRODUCTS_FAILED",
            "data": null,
        }))
        .unwrap();

        let failure = envelope.into_result().unwrap_err();

        assert_eq!(failure.status_code, "200");
        assert_eq!(failure.error_code, Some(ErrorCode::FetchProductsFailed));
    }

    #[test]
    fn should_decode_list_envelope_with_pagination() {
        let envelope: ApiEnvelope<Vec<u32>> = serde_json::from_value(json!({
            "status_code": "200",
            "is_success": true,
            "data": [1, 2],
            "pagination": {"page": 1, "limit": 10, "total": 2, "total_pages": 1},
        }))
        .unwrap();

        assert_eq!(envelope.status(), Some(200));
        assert_eq!(envelope.pagination.unwrap().total, 2);
        assert_eq!(envelope.data, Some(vec![1, 2]));
    }

    #[test]
    fn should_render_error_code_in_wire_form() {
        assert_eq!(ErrorCode::ProductNotFound.as_str(), "PRODUCT_NOT_FOUND");
        assert_eq!(
            serde_json::to_value(ErrorCode::InternalServerError).unwrap(),
            json!(ErrorCode::InternalServerError.as_str())
        );
    }
}
