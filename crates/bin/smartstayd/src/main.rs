//! # smartstayd — smartstay daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (TOML file, env vars)
//! - Initialize tracing
//! - Seed the in-memory store with the default home layout
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use smartstay_adapter_http_axum::state::AppState;
use smartstay_adapter_storage_memory::{MemoryHomeStateRepository, MemoryNewsletterRepository};
use smartstay_app::services::home_service::HomeService;
use smartstay_app::services::newsletter_service::NewsletterService;
use smartstay_domain::home::HomeState;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Repositories — everything lives in process memory; a restart resets
    // the home to the default layout.
    let home_repo = MemoryHomeStateRepository::new(HomeState::default_layout());
    let newsletter_repo = MemoryNewsletterRepository::default();

    // Services
    let home_service = HomeService::new(home_repo);
    let newsletter_service = NewsletterService::new(newsletter_repo);

    // HTTP
    let state = AppState::new(home_service, newsletter_service);
    let app = smartstay_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "smartstayd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
