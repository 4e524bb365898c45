use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::envelope::ErrorCode;
use crate::domain::logger::Logger;
use crate::domain::product::backend::ProductBackend;
use crate::domain::product::errors::ProxyError;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub backend: Arc<dyn ProductBackend>,
    pub logger: Arc<dyn Logger>,
}

/// A create body needs a non-blank title and a numeric price.
fn has_required_fields(body: &Value) -> bool {
    let title_present = body
        .get("product_title")
        .and_then(Value::as_str)
        .is_some_and(|title| !title.trim().is_empty());
    let price_present = body.get("product_price").is_some_and(Value::is_number);
    title_present && price_present
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Value, ProxyError> {
        if !has_required_fields(&params.body) {
            self.logger
                .warn("Rejected create request without product_title or product_price");
            return Err(ProxyError::MissingRequiredFields);
        }

        self.logger.info(&format!(
            "Creating product: {}",
            params.body["product_title"].as_str().unwrap_or_default()
        ));

        let response = self
            .backend
            .create_product(&params.body, params.authorization)
            .await
            .inspect_err(|e| self.logger.error(&format!("Error creating product: {}", e)))?;

        response.into_passthrough(ErrorCode::CreateProductFailed)
    }
}
