use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sous")]
#[command(version)]
#[command(about = "Fit voice-parsed recipes onto a TRMNL e-paper display")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print compression and delivery details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the payload a push would send, without sending it
    Preview {
        /// Recipe JSON file, or - for stdin
        recipe: PathBuf,

        /// Print only the wire body
        #[arg(long)]
        raw: bool,
    },

    /// Push a recipe to the TRMNL webhook
    Push {
        /// Recipe JSON file, or - for stdin
        recipe: PathBuf,

        #[command(flatten)]
        push: PushArgs,
    },

    /// Show or edit saved settings
    Config {
        /// Save the TRMNL webhook URL
        #[arg(long, conflicts_with = "clear_webhook_url")]
        webhook_url: Option<String>,

        /// Remove the saved webhook URL
        #[arg(long)]
        clear_webhook_url: bool,

        /// Save the push timeout in seconds (0 = no timeout)
        #[arg(long)]
        timeout: Option<u64>,

        /// Print current settings
        #[arg(long)]
        show: bool,
    },
}

#[derive(Args)]
pub struct PushArgs {
    /// Webhook URL (overrides settings and TRMNL_WEBHOOK_URL)
    #[arg(long)]
    pub webhook_url: Option<String>,

    /// Request timeout in seconds (overrides settings)
    #[arg(long)]
    pub timeout: Option<u64>,
}
