//! Dry run: show the body a push would send

use anyhow::Result;
use std::path::Path;
use sous_core::BYTE_BUDGET;

use crate::app;

pub fn run(recipe_path: &Path, raw: bool) -> Result<()> {
    let recipe = app::load_recipe(recipe_path)?;
    let report = sous_core::preview(&recipe);

    println!("{}", report.measurement.serialized);
    if raw {
        return Ok(());
    }

    println!();
    println!(
        "Size:      {} / {} bytes{}",
        report.measurement.bytes,
        BYTE_BUDGET,
        if report.fits { "" } else { " (over budget)" }
    );
    println!(
        "Steps:     {} of {}",
        report.payload.step_count,
        recipe.step_count()
    );
    println!("Truncated: {}", report.payload.truncated);
    if report.stages.is_empty() {
        println!("Stages:    none (fits as is)");
    } else {
        let stages: Vec<String> = report.stages.iter().map(ToString::to_string).collect();
        println!("Stages:    {}", stages.join(", "));
    }

    Ok(())
}
