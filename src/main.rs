use anyhow::Result;
use clap::Parser;
use flash_briefings::{create_router, AppState, Config};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "flash-briefings")]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value = "config/flash-briefings")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} v0.1.0", cfg.service.name);
    info!(
        "Serving {} flash briefing(s) on {}:{}",
        cfg.flash_briefings.briefings.len(),
        cfg.service.http.bind,
        cfg.service.http.port
    );

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let state = AppState::new(cfg.flash_briefings);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
