mod app;
mod args;
mod commands;

use anyhow::Result;
use clap::Parser;

use args::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    app::init_logging(cli.verbose);

    match cli.command {
        Commands::Preview { recipe, raw } => commands::preview::run(&recipe, raw),
        Commands::Push { recipe, push } => commands::push::run(&recipe, &push).await,
        Commands::Config {
            webhook_url,
            clear_webhook_url,
            timeout,
            show,
        } => commands::config::run(webhook_url, clear_webhook_url, timeout, show),
    }
}
