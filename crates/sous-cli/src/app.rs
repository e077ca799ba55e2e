use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::time::Duration;
use sous_core::settings::validate_webhook_url;
use sous_core::{PushConfig, Recipe, Settings};
use tracing_subscriber::EnvFilter;

use crate::args::PushArgs;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise warnings only, or debug output for
/// sous itself with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "warn,sous=debug,sous_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Read and validate a recipe from a file, or stdin when the path is `-`
pub fn load_recipe(path: &Path) -> Result<Recipe> {
    let recipe = if path.as_os_str() == "-" {
        Recipe::from_reader(io::stdin().lock()).context("Failed to read recipe from stdin")?
    } else {
        let file = File::open(path)
            .with_context(|| format!("Failed to open recipe file {}", path.display()))?;
        Recipe::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to read recipe from {}", path.display()))?
    };

    recipe.validate()?;
    Ok(recipe)
}

/// Merge command-line overrides onto saved settings.
///
/// A `--webhook-url` flag goes through the same checks as `sous config`.
pub fn resolve_push_config(settings: &Settings, args: &PushArgs) -> Result<PushConfig> {
    let mut config = settings.push_config();

    if let Some(url) = &args.webhook_url {
        config.webhook_url = Some(validate_webhook_url(url)?);
    }
    if let Some(secs) = args.timeout {
        config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
    }

    Ok(config)
}
