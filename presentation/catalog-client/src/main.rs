use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;

mod config;
mod render;

use business::application::product_detail::coordinator::ProductDetailCoordinator;
use business::application::product_list::coordinator::ProductListCoordinator;
use business::application::product_list::ui::{ProductUiState, ViewMode};
use business::domain::logger::Logger;
use business::domain::notifier::Notifier;
use business::domain::product::api_client::ProductApi;
use business::domain::session::{AuthContext, SessionContext, SessionUser};
use business::domain::shared::value_objects::UserId;
use config::{Cli, ClientConfig, Command};
use gateway::{GatewayClient, ProxyApiClient};
use logger::{TracingLogger, TracingNotifier};

/// Headless product screens: prints a list page, or shows or deletes one
/// product, through the proxy.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env()?;

    let session = Arc::new(AuthContext::new());
    session.sign_in(
        SessionUser {
            user_id: UserId::new(config.user_id),
            email: None,
        },
        config.id_token,
    );
    let session: Arc<dyn SessionContext> = session;

    let api: Arc<dyn ProductApi> = Arc::new(ProxyApiClient::new(GatewayClient::new(
        &config.proxy_url,
        config.timeout,
    )));
    let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);
    let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

    match &cli.command {
        Some(Command::Show { id }) => {
            let detail = ProductDetailCoordinator::new(session, api, notifier, logger);
            let product = detail
                .load_product_detail(id)
                .await
                .with_context(|| format!("product {id} could not be loaded"))?;
            print!("{}", render::render_detail(&product));
        }
        Some(Command::Delete { id }) => {
            let detail = ProductDetailCoordinator::new(session, api, notifier, logger);
            if !detail.delete_product(id).await {
                anyhow::bail!("product {id} was not deleted");
            }
            println!("Deleted {}", id.trim());
        }
        None => {
            let coordinator = Arc::new(ProductListCoordinator::new(session, api, notifier, logger));
            show_list(&coordinator, &cli).await?;
            coordinator.unmount();
        }
    }

    Ok(())
}

async fn show_list(coordinator: &Arc<ProductListCoordinator>, cli: &Cli) -> anyhow::Result<()> {
    let search = cli.search();
    if !search.is_empty() {
        let mut updates = coordinator.subscribe();
        coordinator.handle_search(search);
        updates
            .wait_for(|state| state.debounced_search_term == search && !state.loading)
            .await?;
    }
    if cli.page() > 1 || search.is_empty() {
        coordinator.handle_page_change(cli.page(), None).await;
    }

    let mut ui = ProductUiState::default();
    if cli.grid {
        ui.set_view_mode(ViewMode::Grid);
    }

    print!("{}", render::render(&coordinator.snapshot(), &ui));
    Ok(())
}
