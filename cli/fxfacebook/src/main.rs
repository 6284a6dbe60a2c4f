use std::env;
use std::net::SocketAddr;

use server::{print_banner, Config, DEFAULT_PORT};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    print_banner(env!("CARGO_PKG_VERSION"));

    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| DEFAULT_PORT.to_string())
        .parse()?;
    let shortener_token = env::var("SHORTENER_TOKEN").ok().filter(|t| !t.is_empty());

    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;
    let config = Config::new(port, shortener_token);

    server::run_server(addr, config).await
}
