pub mod api;
pub mod banner;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

use std::net::SocketAddr;

pub use api::create_router;
pub use banner::print_banner;
pub use config::{Config, DEFAULT_PORT};
pub use error::{EmbedError, EmbedResult};
pub use state::AppState;

pub async fn run_server(addr: SocketAddr, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(config)?;
    let app = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
