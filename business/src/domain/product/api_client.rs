use async_trait::async_trait;

use crate::domain::envelope::ApiEnvelope;
use crate::domain::shared::value_objects::ProductId;

use super::model::{Product, ProductFormData, UpdateProductPayload};
use super::query::ListQuery;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("api_client.transport: {0}")]
    Transport(String),
    #[error("api_client.status: {0}")]
    Status(u16),
    #[error("api_client.decode: {0}")]
    Decode(String),
}

/// The proxy routes, seen from the list and detail coordinators. Every call carries the
/// session's bearer token.
#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn get_product(
        &self,
        id: &ProductId,
        token: &str,
    ) -> Result<ApiEnvelope<Product>, ApiClientError>;
    async fn list_products(
        &self,
        query: &ListQuery,
        token: &str,
    ) -> Result<ApiEnvelope<Vec<Product>>, ApiClientError>;
    async fn create_product(
        &self,
        values: &ProductFormData,
        token: &str,
    ) -> Result<ApiEnvelope<Product>, ApiClientError>;
    async fn update_product(
        &self,
        payload: &UpdateProductPayload,
        token: &str,
    ) -> Result<ApiEnvelope<Product>, ApiClientError>;
    async fn delete_product(
        &self,
        id: &ProductId,
        token: &str,
    ) -> Result<ApiEnvelope<serde_json::Value>, ApiClientError>;
}
