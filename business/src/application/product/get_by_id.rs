use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::envelope::ErrorCode;
use crate::domain::logger::Logger;
use crate::domain::product::backend::ProductBackend;
use crate::domain::product::errors::ProxyError;
use crate::domain::product::use_cases::get_by_id::{GetProductParams, GetProductUseCase};
use crate::domain::shared::value_objects::ProductId;

pub struct GetProductUseCaseImpl {
    pub backend: Arc<dyn ProductBackend>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductUseCase for GetProductUseCaseImpl {
    async fn execute(&self, params: GetProductParams) -> Result<Value, ProxyError> {
        let id = params
            .product_id
            .as_deref()
            .and_then(ProductId::parse)
            .ok_or(ProxyError::MissingProductId)?;

        self.logger.debug(&format!("Fetching product: {}", id));

        let response = self
            .backend
            .get_product(&id, params.authorization)
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Error fetching product {}: {}", id, e))
            })?;

        response.into_passthrough(ErrorCode::ProductNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::BackendError;
    use crate::domain::product::backend::BackendResponse;
    use mockall::mock;
    use mockall::predicate::eq;
    use serde_json::json;

    mock! {
        pub Backend {}

        #[async_trait]
        impl ProductBackend for Backend {
            async fn get_product(&self, id: &ProductId, authorization: Option<String>) -> Result<BackendResponse, BackendError>;
            async fn create_product(&self, body: &Value, authorization: Option<String>) -> Result<BackendResponse, BackendError>;
            async fn update_product(&self, body: &Value, authorization: Option<String>) -> Result<BackendResponse, BackendError>;
            async fn delete_product(&self, id: &ProductId, authorization: Option<String>) -> Result<BackendResponse, BackendError>;
            async fn list_products(&self, params: Vec<(&'static str, String)>, authorization: Option<String>) -> Result<BackendResponse, BackendError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_missing_product_id_when_id_is_absent() {
        let mut backend = MockBackend::new();
        backend.expect_get_product().never();

        let use_case = GetProductUseCaseImpl {
            backend: Arc::new(backend),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductParams {
                product_id: None,
                authorization: None,
            })
            .await;

        assert!(matches!(result, Err(ProxyError::MissingProductId)));
    }

    #[tokio::test]
    async fn should_return_missing_product_id_when_id_is_blank() {
        let mut backend = MockBackend::new();
        backend.expect_get_product().never();

        let use_case = GetProductUseCaseImpl {
            backend: Arc::new(backend),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductParams {
                product_id: Some("   ".to_string()),
                authorization: None,
            })
            .await;

        assert!(matches!(result, Err(ProxyError::MissingProductId)));
    }

    #[tokio::test]
    async fn should_forward_trimmed_id_and_authorization() {
        let body = json!({"status_code": "200", "is_success": true, "data": {"product_id": "p-1"}});
        let expected = body.clone();
        let mut backend = MockBackend::new();
        backend
            .expect_get_product()
            .withf(|id, auth| id.as_str() == "p-1" && auth.as_deref() == Some("Bearer t"))
            .times(1)
            .returning(move |_, _| {
                Ok(BackendResponse {
                    status: 200,
                    body: body.clone(),
                })
            });

        let use_case = GetProductUseCaseImpl {
            backend: Arc::new(backend),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductParams {
                product_id: Some(" p-1 ".to_string()),
                authorization: Some("Bearer t".to_string()),
            })
            .await;

        assert_eq!(result.unwrap(), expected);
    }

    #[tokio::test]
    async fn should_return_product_not_found_with_backend_status() {
        let mut backend = MockBackend::new();
        backend
            .expect_get_product()
            .with(eq(ProductId::parse("zzz").unwrap()), eq(None))
            .returning(|_, _| {
                Ok(BackendResponse {
                    status: 404,
                    body: Value::Null,
                })
            });

        let use_case = GetProductUseCaseImpl {
            backend: Arc::new(backend),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductParams {
                product_id: Some("zzz".to_string()),
                authorization: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(ProxyError::Rejected {
                status: 404,
                code: ErrorCode::ProductNotFound
            })
        ));
    }

    #[tokio::test]
    async fn should_surface_backend_error_when_transport_fails() {
        let mut backend = MockBackend::new();
        backend
            .expect_get_product()
            .returning(|_, _| Err(BackendError::transport("connection refused")));

        let use_case = GetProductUseCaseImpl {
            backend: Arc::new(backend),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductParams {
                product_id: Some("p-1".to_string()),
                authorization: None,
            })
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::InternalServerError);
    }
}
