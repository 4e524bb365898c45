use async_trait::async_trait;
use serde_json::Value;

use crate::domain::envelope::ErrorCode;
use crate::domain::errors::BackendError;
use crate::domain::product::errors::ProxyError;
use crate::domain::shared::value_objects::ProductId;

/// Raw answer from the backend product service.
///
/// `body` is only parsed for 2xx answers; for any other status it is `Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendResponse {
    pub status: u16,
    pub body: Value,
}

impl BackendResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 2xx bodies pass through untouched; anything else becomes a rejection
    /// tagged with `failure` and carrying the backend's status.
    pub fn into_passthrough(self, failure: ErrorCode) -> Result<Value, ProxyError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(ProxyError::Rejected {
                status: self.status,
                code: failure,
            })
        }
    }
}

/// The backend product service, seen from the proxy. `authorization` is the
/// caller's `Authorization` header, forwarded verbatim when present.
#[async_trait]
pub trait ProductBackend: Send + Sync {
    async fn get_product(
        &self,
        id: &ProductId,
        authorization: Option<String>,
    ) -> Result<BackendResponse, BackendError>;
    async fn create_product(
        &self,
        body: &Value,
        authorization: Option<String>,
    ) -> Result<BackendResponse, BackendError>;
    async fn update_product(
        &self,
        body: &Value,
        authorization: Option<String>,
    ) -> Result<BackendResponse, BackendError>;
    async fn delete_product(
        &self,
        id: &ProductId,
        authorization: Option<String>,
    ) -> Result<BackendResponse, BackendError>;
    async fn list_products(
        &self,
        params: Vec<(&'static str, String)>,
        authorization: Option<String>,
    ) -> Result<BackendResponse, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_pass_body_through_when_status_is_2xx() {
        let body = json!({"status_code": "201", "is_success": true, "data": {"product_id": "p"}});
        let response = BackendResponse {
            status: 201,
            body: body.clone(),
        };

        assert_eq!(
            response
                .into_passthrough(ErrorCode::CreateProductFailed)
                .unwrap(),
            body
        );
    }

    #[test]
    fn should_reject_with_backend_status_when_not_2xx() {
        let response = BackendResponse {
            status: 503,
            body: Value::Null,
        };

        let err = response
            .into_passthrough(ErrorCode::FetchProductsFailed)
            .unwrap_err();

        assert!(matches!(
            err,
            ProxyError::Rejected {
                status: 503,
                code: ErrorCode::FetchProductsFailed
            }
        ));
    }
}
