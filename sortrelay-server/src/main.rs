//! sortrelay server binary
//!
//! Reads configuration from the environment, then serves the device and
//! dashboard endpoints until terminated. Log level via `RUST_LOG`.

use log::error;

use sortrelay_server::{serve, ServerConfig, ServerError};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    serve(config).await
}
