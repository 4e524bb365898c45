use async_trait::async_trait;
use reqwest::RequestBuilder;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde_json::Value;

use business::domain::envelope::ApiEnvelope;
use business::domain::product::api_client::{ApiClientError, ProductApi};
use business::domain::product::model::{Product, ProductFormData, UpdateProductPayload};
use business::domain::product::query::ListQuery;
use business::domain::shared::value_objects::ProductId;

use crate::client::GatewayClient;

const PRODUCT_ROUTE: &str = "/api/product";
const PRODUCTS_ROUTE: &str = "/api/products";

/// Talks to the proxy routes on behalf of the product coordinators.
pub struct ProxyApiClient {
    client: GatewayClient,
}

impl ProxyApiClient {
    pub fn new(client: GatewayClient) -> Self {
        Self { client }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        token: &str,
    ) -> Result<ApiEnvelope<T>, ApiClientError> {
        let response = request
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| ApiClientError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiClientError::Transport(e.to_string()))?;

        decode_envelope(status, &bytes)
    }
}

/// Every proxy answer, success or failure, should be an envelope. A body that
/// is not one is reported by status when the status already says failure.
fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    bytes: &[u8],
) -> Result<ApiEnvelope<T>, ApiClientError> {
    match serde_json::from_slice::<ApiEnvelope<T>>(bytes) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !(200..300).contains(&status) => Err(ApiClientError::Status(status)),
        Err(e) => Err(ApiClientError::Decode(e.to_string())),
    }
}

#[async_trait]
impl ProductApi for ProxyApiClient {
    async fn get_product(
        &self,
        id: &ProductId,
        token: &str,
    ) -> Result<ApiEnvelope<Product>, ApiClientError> {
        let request = self
            .client
            .client
            .get(self.client.url(PRODUCT_ROUTE))
            .query(&[("product_id", id.as_str())]);
        self.send(request, token).await
    }

    async fn list_products(
        &self,
        query: &ListQuery,
        token: &str,
    ) -> Result<ApiEnvelope<Vec<Product>>, ApiClientError> {
        let request = self
            .client
            .client
            .get(self.client.url(PRODUCTS_ROUTE))
            .query(&query.to_wire_params());
        self.send(request, token).await
    }

    async fn create_product(
        &self,
        values: &ProductFormData,
        token: &str,
    ) -> Result<ApiEnvelope<Product>, ApiClientError> {
        let request = self
            .client
            .client
            .post(self.client.url(PRODUCT_ROUTE))
            .json(values);
        self.send(request, token).await
    }

    async fn update_product(
        &self,
        payload: &UpdateProductPayload,
        token: &str,
    ) -> Result<ApiEnvelope<Product>, ApiClientError> {
        let request = self
            .client
            .client
            .put(self.client.url(PRODUCT_ROUTE))
            .json(payload);
        self.send(request, token).await
    }

    async fn delete_product(
        &self,
        id: &ProductId,
        token: &str,
    ) -> Result<ApiEnvelope<Value>, ApiClientError> {
        let request = self
            .client
            .client
            .delete(self.client.url(PRODUCT_ROUTE))
            .query(&[("product_id", id.as_str())]);
        self.send(request, token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::envelope::ErrorCode;

    #[test]
    fn should_decode_list_envelope_with_pagination() {
        let body = br#"{
            "status_code": "200",
            "is_success": true,
            "data": [{"product_id": "p-1", "product_title": "Lamp", "product_price": 12.5}],
            "pagination": {"page": 1, "limit": 10, "total": 1, "total_pages": 1}
        }"#;

        let envelope: ApiEnvelope<Vec<Product>> = decode_envelope(200, body).unwrap();

        assert!(envelope.is_success);
        assert_eq!(envelope.data.unwrap()[0].product_price, Some(12.5));
        assert_eq!(envelope.pagination.unwrap().total, 1);
    }

    #[test]
    fn should_decode_failure_envelope_regardless_of_status() {
        let body = br#"{"status_code": "401", "is_success": false, "error_code": "MISSING_TOKEN", "data": "Authorization token is required"}"#;

        let envelope: ApiEnvelope<Value> = decode_envelope(401, body).unwrap();

        assert!(!envelope.is_success);
        assert_eq!(envelope.error_code, Some(ErrorCode::MissingToken));
    }

    #[test]
    fn should_decode_single_product_envelope() {
        let body = br#"{"status_code": "200", "is_success": true, "data": {"product_id": "p-9", "product_title": "Stool", "product_price": 40}}"#;

        let envelope: ApiEnvelope<Product> = decode_envelope(200, body).unwrap();

        let product = envelope.into_result().unwrap().data.unwrap();
        assert_eq!(product.product_id, "p-9");
        assert_eq!(product.product_price, Some(40.0));
    }

    #[test]
    fn should_report_status_when_failure_body_is_not_an_envelope() {
        let result: Result<ApiEnvelope<Value>, _> = decode_envelope(502, b"Bad Gateway");

        assert!(matches!(result, Err(ApiClientError::Status(502))));
    }

    #[test]
    fn should_report_decode_error_when_success_body_is_not_an_envelope() {
        let result: Result<ApiEnvelope<Product>, _> = decode_envelope(200, b"[]");

        assert!(matches!(result, Err(ApiClientError::Decode(_))));
    }
}
