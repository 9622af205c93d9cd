//! Sandbox server: loads the config, then runs a scripted combat arena on the
//! tick loop until the configured number of ticks has passed or Ctrl-C.

mod arena;
mod events;
mod logging;

use std::path::Path;
use std::sync::Arc;

use steel_core::config::SteelConfig;
use steel_core::server::Server;
use tokio::signal;
use tokio_util::sync::CancellationToken;

use crate::arena::Arena;
use crate::events::LoggingEvents;

const CONFIG_PATH: &str = "config/steel_config.json5";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init()?;

    let config = SteelConfig::load_or_create(Path::new(CONFIG_PATH))?;
    let sandbox_ticks = config.sandbox_ticks;
    let cancel_token = CancellationToken::new();

    let shutdown = cancel_token.clone();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                log::info!("Shutting down");
                shutdown.cancel();
            }
            Err(err) => log::warn!("Could not listen for Ctrl-C: {err}"),
        }
    });

    let server = Server::new(config, Arc::new(LoggingEvents), cancel_token.clone());
    let mut arena = Arena::default();
    server
        .run(|server, tick| {
            arena.on_tick(server, tick);
            if sandbox_ticks > 0 && tick >= sandbox_ticks {
                cancel_token.cancel();
            }
        })
        .await;

    tracing::info!(
        ticks = server.tick_count(),
        entities = server.world.entity_count(),
        "Arena finished"
    );
    Ok(())
}
