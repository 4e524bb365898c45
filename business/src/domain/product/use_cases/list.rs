use async_trait::async_trait;
use serde_json::Value;

use crate::domain::product::errors::ProxyError;

/// Raw query-string values and the inbound `Authorization` header.
pub struct ListProductsParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub search: Option<String>,
    pub authorization: Option<String>,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<Value, ProxyError>;
}
