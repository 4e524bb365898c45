use std::sync::Arc;

use crate::application::product_list::coordinator::{AUTH_FAILED, DELETE_FAILED};
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::product::api_client::ProductApi;
use crate::domain::product::model::{Product, ProductFormData, UpdateProductPayload};
use crate::domain::session::SessionContext;
use crate::domain::shared::value_objects::ProductId;

const DETAIL_FAILED: &str = "Failed to fetch product details";
const UPDATE_FAILED: &str = "Failed to update product";

/// Backs the single-product screens: show one product, edit it, delete it.
///
/// Ids arrive as raw route segments and are trimmed before any request.
/// Every outcome is reported through the notifier; the return values only
/// tell the caller whether to stay on the screen.
pub struct ProductDetailCoordinator {
    session: Arc<dyn SessionContext>,
    api: Arc<dyn ProductApi>,
    notifier: Arc<dyn Notifier>,
    logger: Arc<dyn Logger>,
}

impl ProductDetailCoordinator {
    pub fn new(
        session: Arc<dyn SessionContext>,
        api: Arc<dyn ProductApi>,
        notifier: Arc<dyn Notifier>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            session,
            api,
            notifier,
            logger,
        }
    }

    /// Loads one product, or `None` once the failure has been notified.
    pub async fn load_product_detail(&self, product_id: &str) -> Option<Product> {
        let Some(id) = ProductId::parse(product_id) else {
            self.logger.warn("Refusing to load a product with a blank id");
            self.notifier.error(DETAIL_FAILED);
            return None;
        };

        match self.fetch_detail(&id).await {
            Ok(product) => Some(product),
            Err(message) => {
                self.notifier.error(message);
                None
            }
        }
    }

    async fn fetch_detail(&self, id: &ProductId) -> Result<Product, &'static str> {
        let token = self.session.get_token().await.ok_or(AUTH_FAILED)?;

        self.api
            .get_product(id, &token)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Error fetching product {}: {}", id, e));
                DETAIL_FAILED
            })?
            .into_result()
            .map_err(|e| {
                self.logger
                    .warn(&format!("Product {} rejected: {}", id, e));
                DETAIL_FAILED
            })?
            .data
            .ok_or_else(|| {
                self.logger
                    .warn(&format!("Product {} came back without data", id));
                DETAIL_FAILED
            })
    }

    /// Saves the edit form for `product_id`. Returns true when the update
    /// went through.
    pub async fn update_product(&self, product_id: &str, values: ProductFormData) -> bool {
        if let Err(e) = values.validate() {
            self.logger.debug(&format!("Product form rejected: {}", e));
            self.notifier.error(e.user_message());
            return false;
        }
        let Some(id) = ProductId::parse(product_id) else {
            self.logger.warn("Refusing to update a product with a blank id");
            self.notifier.error(UPDATE_FAILED);
            return false;
        };

        let Some(token) = self.session.get_token().await else {
            self.notifier.error(AUTH_FAILED);
            return false;
        };

        let payload = UpdateProductPayload::new(&id, values);
        let saved = match self.api.update_product(&payload, &token).await {
            Ok(envelope) => envelope
                .into_result()
                .inspect_err(|e| {
                    self.logger
                        .warn(&format!("Update of {} rejected: {}", id, e))
                })
                .is_ok(),
            Err(e) => {
                self.logger
                    .error(&format!("Error updating product {}: {}", id, e));
                false
            }
        };

        if saved {
            self.notifier.success("Product updated successfully");
        } else {
            self.notifier.error(UPDATE_FAILED);
        }
        saved
    }

    /// Deletes the product being viewed. Returns true when it is gone and the
    /// caller should go back to the list.
    pub async fn delete_product(&self, product_id: &str) -> bool {
        let Some(id) = ProductId::parse(product_id) else {
            self.logger.warn("Refusing to delete a product with a blank id");
            self.notifier.error(DELETE_FAILED);
            return false;
        };

        let Some(token) = self.session.get_token().await else {
            self.notifier.error(AUTH_FAILED);
            return false;
        };

        let deleted = match self.api.delete_product(&id, &token).await {
            Ok(envelope) => envelope
                .into_result()
                .inspect_err(|e| {
                    self.logger
                        .warn(&format!("Delete of {} rejected: {}", id, e))
                })
                .is_ok(),
            Err(e) => {
                self.logger
                    .error(&format!("Error deleting product {}: {}", id, e));
                false
            }
        };

        if deleted {
            self.notifier.success("Product deleted successfully");
        } else {
            self.notifier.error(DELETE_FAILED);
        }
        deleted
    }
}
