use async_trait::async_trait;
use serde_json::Value;

use crate::domain::product::errors::ProxyError;

pub struct DeleteProductParams {
    pub product_id: Option<String>,
    pub authorization: Option<String>,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<Value, ProxyError>;
}
