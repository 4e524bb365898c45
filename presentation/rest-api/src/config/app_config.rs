use super::{
    backend_config::BackendConfig, cors_config, firebase_config::AuthConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub backend: BackendConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            backend: BackendConfig::from_env()?,
            auth: AuthConfig::from_env()?,
        })
    }
}
