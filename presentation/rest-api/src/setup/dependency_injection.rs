use std::sync::Arc;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::auth::verifier::TokenVerifier;
use business::domain::logger::Logger;
use business::domain::product::backend::ProductBackend;
use gateway::{GatewayClient, HttpProductBackend};
use logger::TracingLogger;

use crate::api::security::FirebaseTokenVerifier;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let backend: Arc<dyn ProductBackend> = Arc::new(HttpProductBackend::new(
            GatewayClient::new(&config.backend.base_url, config.backend.timeout),
        ));

        let verifier: Option<Arc<dyn TokenVerifier>> = match config.auth.firebase.clone() {
            Some(firebase) => Some(Arc::new(FirebaseTokenVerifier::new(firebase))),
            None => {
                logger.warn("Token verification disabled: bearer tokens are forwarded unchecked");
                None
            }
        };

        // Product use cases
        let get_use_case = Arc::new(GetProductUseCaseImpl {
            backend: backend.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            backend: backend.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            backend: backend.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            backend: backend.clone(),
            logger: logger.clone(),
        });
        let list_use_case = Arc::new(ListProductsUseCaseImpl {
            backend,
            verifier,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            get_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            list_use_case,
        );

        Self {
            health_api,
            product_api,
        }
    }
}
