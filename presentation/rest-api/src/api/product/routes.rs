use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Header, Query},
    payload::Json,
};
use serde_json::Value;

use business::domain::envelope::ErrorCode;
use business::domain::product::errors::ProxyError;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_id::{GetProductParams, GetProductUseCase};
use business::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{EnvelopeResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_use_case: Arc<dyn GetProductUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    list_use_case: Arc<dyn ListProductsUseCase>,
}

impl ProductApi {
    pub fn new(
        get_use_case: Arc<dyn GetProductUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        list_use_case: Arc<dyn ListProductsUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            list_use_case,
        }
    }
}

/// Product proxy API
///
/// Forwards product requests to the backend product service. Successful
/// backend bodies are returned unchanged; failures come back as envelopes.
#[OpenApi]
impl ProductApi {
    /// Get a product
    #[oai(path = "/api/product", method = "get", tag = "ApiTags::Products")]
    async fn get_product(
        &self,
        product_id: Query<Option<String>>,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
    ) -> ProxyResponse {
        self.get_use_case
            .execute(GetProductParams {
                product_id: product_id.0,
                authorization: authorization.0,
            })
            .await
            .into()
    }

    /// Create a product
    ///
    /// The body must carry `product_title` and `product_price`.
    #[oai(path = "/api/product", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        body: Json<Value>,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
    ) -> ProxyResponse {
        self.create_use_case
            .execute(CreateProductParams {
                body: body.0,
                authorization: authorization.0,
            })
            .await
            .into()
    }

    /// Update a product
    ///
    /// The body must carry the `product_id` of the record being edited.
    #[oai(path = "/api/product", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        body: Json<Value>,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
    ) -> ProxyResponse {
        self.update_use_case
            .execute(UpdateProductParams {
                body: body.0,
                authorization: authorization.0,
            })
            .await
            .into()
    }

    /// Delete a product
    #[oai(path = "/api/product", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(
        &self,
        product_id: Query<Option<String>>,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
    ) -> ProxyResponse {
        self.delete_use_case
            .execute(DeleteProductParams {
                product_id: product_id.0,
                authorization: authorization.0,
            })
            .await
            .into()
    }

    /// List products
    ///
    /// Requires `Authorization: Bearer <token>`. Supports `limit`, `offset`
    /// and `search`; defaults are not forwarded.
    #[oai(path = "/api/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(
        &self,
        limit: Query<Option<String>>,
        offset: Query<Option<String>>,
        search: Query<Option<String>>,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
    ) -> ProxyResponse {
        let result = self
            .list_use_case
            .execute(ListProductsParams {
                limit: limit.0,
                offset: offset.0,
                search: search.0,
                authorization: authorization.0,
            })
            .await;
        ProxyResponse::from(result).with_list_envelope()
    }
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "unreadable_request")]
pub enum ProxyResponse {
    /// Backend response body, unchanged
    #[oai(status = 200)]
    Ok(Json<Value>),
    /// Failure envelope with the matching HTTP status
    Failure(StatusCode, Json<EnvelopeResponse>),
}

impl From<Result<Value, ProxyError>> for ProxyResponse {
    fn from(result: Result<Value, ProxyError>) -> Self {
        match result {
            Ok(body) => ProxyResponse::Ok(Json(body)),
            Err(err) => {
                let (status, json) = err.into_error_response();
                ProxyResponse::Failure(status, json)
            }
        }
    }
}

impl ProxyResponse {
    /// List failures also carry `pagination: null`.
    fn with_list_envelope(self) -> Self {
        match self {
            ProxyResponse::Failure(status, Json(envelope)) => {
                ProxyResponse::Failure(status, Json(envelope.with_null_pagination()))
            }
            ok => ok,
        }
    }
}

/// A body that cannot be read as JSON is treated as an internal error.
fn unreadable_request(err: poem::Error) -> ProxyResponse {
    tracing::warn!("Unreadable proxy request: {}", err);
    let status = StatusCode::INTERNAL_SERVER_ERROR;
    ProxyResponse::Failure(
        status,
        Json(EnvelopeResponse::failure(
            status,
            ErrorCode::InternalServerError,
        )),
    )
}
