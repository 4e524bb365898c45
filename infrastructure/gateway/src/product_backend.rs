use async_trait::async_trait;
use reqwest::RequestBuilder;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

use business::domain::errors::BackendError;
use business::domain::product::backend::{BackendResponse, ProductBackend};
use business::domain::shared::value_objects::ProductId;

use crate::client::GatewayClient;

const PRODUCT_PATH: &str = "/api/web/v1/product";
const PRODUCTS_PATH: &str = "/api/web/v1/products";

/// `ProductBackend` over HTTP. Forwards the caller's `Authorization` header
/// as-is and never looks inside it.
pub struct HttpProductBackend {
    client: GatewayClient,
}

impl HttpProductBackend {
    pub fn new(client: GatewayClient) -> Self {
        Self { client }
    }

    async fn send(
        &self,
        request: RequestBuilder,
        authorization: Option<String>,
    ) -> Result<BackendResponse, BackendError> {
        let request = match authorization {
            Some(value) => request.header(AUTHORIZATION, value),
            None => request,
        };

        let response = request
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(BackendError::transport)?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            return Ok(BackendResponse {
                status,
                body: Value::Null,
            });
        }

        let bytes = response.bytes().await.map_err(BackendError::transport)?;
        decode_success(status, &bytes)
    }
}

/// Parses a 2xx body. An empty body becomes `null`; anything else must be JSON.
fn decode_success(status: u16, bytes: &[u8]) -> Result<BackendResponse, BackendError> {
    let body = if bytes.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(bytes).map_err(BackendError::malformed_response)?
    };
    Ok(BackendResponse { status, body })
}

#[async_trait]
impl ProductBackend for HttpProductBackend {
    async fn get_product(
        &self,
        id: &ProductId,
        authorization: Option<String>,
    ) -> Result<BackendResponse, BackendError> {
        let request = self
            .client
            .client
            .get(self.client.url(PRODUCT_PATH))
            .query(&[("product_id", id.as_str())]);
        self.send(request, authorization).await
    }

    async fn create_product(
        &self,
        body: &Value,
        authorization: Option<String>,
    ) -> Result<BackendResponse, BackendError> {
        let request = self
            .client
            .client
            .post(self.client.url(PRODUCT_PATH))
            .json(body);
        self.send(request, authorization).await
    }

    async fn update_product(
        &self,
        body: &Value,
        authorization: Option<String>,
    ) -> Result<BackendResponse, BackendError> {
        let request = self
            .client
            .client
            .put(self.client.url(PRODUCT_PATH))
            .json(body);
        self.send(request, authorization).await
    }

    async fn delete_product(
        &self,
        id: &ProductId,
        authorization: Option<String>,
    ) -> Result<BackendResponse, BackendError> {
        let request = self
            .client
            .client
            .delete(self.client.url(PRODUCT_PATH))
            .query(&[("product_id", id.as_str())]);
        self.send(request, authorization).await
    }

    async fn list_products(
        &self,
        params: Vec<(&'static str, String)>,
        authorization: Option<String>,
    ) -> Result<BackendResponse, BackendError> {
        let request = self
            .client
            .client
            .get(self.client.url(PRODUCTS_PATH))
            .query(&params);
        self.send(request, authorization).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_parse_json_body_of_successful_response() {
        let response = decode_success(201, br#"{"is_success": true, "data": {"product_id": "p-1"}}"#)
            .unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(response.body["data"], json!({"product_id": "p-1"}));
    }

    #[test]
    fn should_treat_empty_success_body_as_null() {
        let response = decode_success(204, b"  \n").unwrap();

        assert_eq!(response.body, Value::Null);
    }

    #[test]
    fn should_fail_when_success_body_is_not_json() {
        let result = decode_success(200, b"<html>oops</html>");

        assert!(matches!(result, Err(BackendError::MalformedResponse(_))));
    }

    #[test]
    fn should_build_backend_request_with_query_and_header() {
        let client = GatewayClient::new("https://backend.internal/", std::time::Duration::from_secs(1));
        let request = client
            .client
            .get(client.url(PRODUCTS_PATH))
            .query(&vec![("offset", "20".to_string()), ("search", "desk lamp".to_string())])
            .header(AUTHORIZATION, "Bearer t")
            .build()
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://backend.internal/api/web/v1/products?offset=20&search=desk+lamp"
        );
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer t");
    }
}
