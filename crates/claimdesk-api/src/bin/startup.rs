//! Production entry point for hosted deployments.
//!
//! Same service as `claimdesk-api`, but verbose diagnostics are always off and
//! the port defaults to 8000 when `PORT` is unset.

use claimdesk_core::Config;

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let mut config = Config::from_env_with_default_port(DEFAULT_PORT)?;
    config.environment = "production".to_string();

    let (_state, router) = claimdesk_api::setup::initialize_app(config.clone()).await?;
    claimdesk_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
