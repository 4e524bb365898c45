use async_trait::async_trait;
use serde_json::Value;

use crate::domain::product::errors::ProxyError;

pub struct CreateProductParams {
    pub body: Value,
    pub authorization: Option<String>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Value, ProxyError>;
}
