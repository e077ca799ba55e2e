//! Show or edit saved settings

use anyhow::Result;
use sous_core::Settings;
use sous_core::settings::WEBHOOK_URL_ENV_VAR;

pub fn run(
    webhook_url: Option<String>,
    clear_webhook_url: bool,
    timeout: Option<u64>,
    show: bool,
) -> Result<()> {
    let mut settings = Settings::load()?;
    let mut changed = false;

    if let Some(url) = webhook_url {
        settings.set_webhook_url(&url)?;
        println!("Webhook URL saved");
        changed = true;
    }

    if clear_webhook_url {
        settings.webhook_url = None;
        println!("Webhook URL cleared");
        changed = true;
    }

    if let Some(secs) = timeout {
        settings.timeout_secs = (secs > 0).then_some(secs);
        println!("Timeout saved");
        changed = true;
    }

    if changed {
        settings.save()?;
    }

    if show || !changed {
        print_settings(&settings);
    }

    Ok(())
}

fn print_settings(settings: &Settings) {
    println!("Config file: {}", Settings::path().display());
    match (&settings.webhook_url, settings.webhook_url()) {
        (Some(url), _) => println!("Webhook URL: {}", url),
        (None, Some(url)) => println!("Webhook URL: {} (from {})", url, WEBHOOK_URL_ENV_VAR),
        (None, None) => println!(
            "Webhook URL: not set\n  Set it with: sous config --webhook-url <url>\n  Or set the {} environment variable.",
            WEBHOOK_URL_ENV_VAR
        ),
    }
    match settings.timeout_secs {
        Some(secs) => println!("Timeout:     {}s", secs),
        None => println!("Timeout:     none"),
    }
}
