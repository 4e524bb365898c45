pub mod client;
pub mod product_backend;
pub mod proxy_api;

pub use client::GatewayClient;
pub use product_backend::HttpProductBackend;
pub use proxy_api::ProxyApiClient;
