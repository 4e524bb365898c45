use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::envelope::ErrorCode;
use crate::domain::logger::Logger;
use crate::domain::product::backend::ProductBackend;
use crate::domain::product::errors::ProxyError;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::shared::value_objects::ProductId;

pub struct DeleteProductUseCaseImpl {
    pub backend: Arc<dyn ProductBackend>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<Value, ProxyError> {
        let id = params
            .product_id
            .as_deref()
            .and_then(ProductId::parse)
            .ok_or(ProxyError::MissingProductId)?;

        self.logger.info(&format!("Deleting product: {}", id));

        let response = self
            .backend
            .delete_product(&id, params.authorization)
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Error deleting product {}: {}", id, e))
            })?;

        let body = response.into_passthrough(ErrorCode::DeleteProductFailed)?;
        self.logger.info(&format!("Product deleted: {}", id));
        Ok(body)
    }
}
