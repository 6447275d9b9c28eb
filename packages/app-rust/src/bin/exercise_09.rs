//! Walks the promisified legacy API and prints what it returns.

use std::sync::Arc;

use clap::Parser;
use promisify_app::{run, Api, AppConfig, OldApi, Printer, SystemClock};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let api = Api::new(&OldApi::new(Arc::new(SystemClock)));
    let mut printer = Printer::new(std::io::stdout(), config.color_enabled());
    run(&api, &mut printer).await?;

    Ok(())
}
