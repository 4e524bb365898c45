use std::env;
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};

/// Client configuration
///
/// Environment variables:
/// - PROXY_URL: Base URL of the product proxy (default: "http://127.0.0.1:8080")
/// - ID_TOKEN: Identity token issued by the identity provider (required)
/// - USER_ID: Id of the signed-in user (default: "catalog-client")
/// - REQUEST_TIMEOUT_SECS: Request timeout in seconds (default: 30)
pub struct ClientConfig {
    pub proxy_url: String,
    pub id_token: String,
    pub user_id: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let proxy_url =
            env::var("PROXY_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
        let id_token = env::var("ID_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty())
            .context("ID_TOKEN must be set")?;
        let user_id = env::var("USER_ID").unwrap_or_else(|_| "catalog-client".to_string());
        let timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("REQUEST_TIMEOUT_SECS is not a number: {raw}"))?,
            Err(_) => 30,
        };

        Ok(Self {
            proxy_url,
            id_token,
            user_id,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Command line: `catalog-client [--grid] [SEARCH] [PAGE]` for a list page,
/// or `catalog-client show|delete <ID>` for a single product.
#[derive(Parser, Debug)]
#[command(name = "catalog-client", args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Lay products out as cards instead of a table.
    #[arg(long, action = ArgAction::SetTrue)]
    pub grid: bool,
    /// Title search term.
    pub search: Option<String>,
    /// Page to show, starting at 1.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,
    /// Single-product action.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Show one product.
    Show {
        /// Product id.
        id: String,
    },
    /// Delete one product.
    Delete {
        /// Product id.
        id: String,
    },
}

impl Cli {
    pub fn search(&self) -> &str {
        self.search.as_deref().unwrap_or_default()
    }

    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }
}
