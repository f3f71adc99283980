use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use binance_futures_cli::cli::{self, Cli};

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli::run(args).await {
        eprintln!("{}", style(format!("Error: {err}")).red());
        std::process::exit(1);
    }
}
