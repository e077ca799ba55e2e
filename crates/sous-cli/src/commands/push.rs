//! Push a recipe to the TRMNL webhook

use anyhow::{Context, Result};
use std::path::Path;
use sous_core::Settings;

use crate::app;
use crate::args::PushArgs;

pub async fn run(recipe_path: &Path, args: &PushArgs) -> Result<()> {
    let recipe = app::load_recipe(recipe_path)?;
    let settings = Settings::load()?;
    let config = app::resolve_push_config(&settings, args)?;
    tracing::debug!(
        configured = config.destination().is_some(),
        timeout = ?config.timeout,
        "resolved push config"
    );

    // Delivery problems come back as warnings, never as errors
    let result = sous_core::push(&recipe, &config).await;

    if let Some(warnings) = &result.warnings {
        for warning in warnings {
            eprintln!("Warning: {}", warning);
        }
    }

    let json = serde_json::to_string_pretty(&result).context("Failed to format push result")?;
    println!("{}", json);
    Ok(())
}
