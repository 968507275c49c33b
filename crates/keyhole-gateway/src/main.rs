use clap::Parser;
use keyhole_core::Shortener;
use keyhole_engine::{CounterGenerator, RandomGenerator, ShortenerService};
use keyhole_gateway::app::App;
use keyhole_gateway::cli::{GeneratorArg, CLI};
use keyhole_gateway::state::AppState;
use keyhole_storage::InMemoryStore;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        public_base_url = %config.public_base_url,
        generator = %config.generator,
        code_length = config.code_length,
        "starting gateway server"
    );

    let store = InMemoryStore::new();
    let shortener: Arc<dyn Shortener> = match config.generator {
        GeneratorArg::Random => Arc::new(ShortenerService::new(
            store,
            RandomGenerator::new(config.code_length),
        )),
        GeneratorArg::Counter => Arc::new(ShortenerService::new(
            store,
            CounterGenerator::new(config.code_length),
        )),
    };

    let state = AppState::new(shortener, config.public_base_url);
    let app = App::router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
