use async_trait::async_trait;
use serde_json::Value;

use crate::domain::product::errors::ProxyError;

pub struct UpdateProductParams {
    pub body: Value,
    pub authorization: Option<String>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Value, ProxyError>;
}
