use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::envelope::ErrorCode;
use crate::domain::logger::Logger;
use crate::domain::product::backend::ProductBackend;
use crate::domain::product::errors::ProxyError;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::shared::value_objects::ProductId;

pub struct UpdateProductUseCaseImpl {
    pub backend: Arc<dyn ProductBackend>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Value, ProxyError> {
        let mut body = params.body;

        let id = body
            .get("product_id")
            .and_then(Value::as_str)
            .and_then(ProductId::parse)
            .ok_or(ProxyError::MissingProductId)?;

        // The backend sees the trimmed id, never the raw one.
        body["product_id"] = Value::String(id.as_str().to_string());

        self.logger.info(&format!("Updating product: {}", id));

        let response = self
            .backend
            .update_product(&body, params.authorization)
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Error updating product {}: {}", id, e))
            })?;

        response.into_passthrough(ErrorCode::UpdateProductFailed)
    }
}
