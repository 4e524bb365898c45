use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::auth::verifier::{TokenVerifier, bearer_token};
use crate::domain::envelope::ErrorCode;
use crate::domain::logger::Logger;
use crate::domain::product::backend::ProductBackend;
use crate::domain::product::errors::ProxyError;
use crate::domain::product::query::ListQuery;
use crate::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};

/// Collection route. Unlike the single-item routes it insists on a bearer
/// token and, when a verifier is configured, has it checked before anything
/// reaches the backend.
pub struct ListProductsUseCaseImpl {
    pub backend: Arc<dyn ProductBackend>,
    pub verifier: Option<Arc<dyn TokenVerifier>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<Value, ProxyError> {
        let token =
            bearer_token(params.authorization.as_deref()).ok_or(ProxyError::MissingToken)?;

        if let Some(verifier) = &self.verifier {
            match verifier.verify(token).await {
                Ok(identity) => self.logger.info(&format!(
                    "Authenticated user: {}",
                    identity.email.as_deref().unwrap_or(identity.user_id.as_str())
                )),
                Err(e) => {
                    self.logger
                        .warn(&format!("Token verification failed: {}", e));
                    return Err(ProxyError::InvalidToken);
                }
            }
        }

        let query = ListQuery::from_raw(
            params.limit.as_deref(),
            params.offset.as_deref(),
            params.search.as_deref(),
        )?;

        let response = self
            .backend
            .list_products(query.to_wire_params(), params.authorization)
            .await
            .inspect_err(|e| self.logger.error(&format!("Error fetching products: {}", e)))?;

        response.into_passthrough(ErrorCode::FetchProductsFailed)
    }
}
