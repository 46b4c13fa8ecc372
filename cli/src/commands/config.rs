//! Config command - show and edit saved preferences.

use anyhow::Result;
use spiralsolve_core::{ConfigStore, OutputFormat};

pub async fn show(store: &ConfigStore, json: bool) -> Result<()> {
    let config = store.load().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("Config file:    {}", store.path().display());
    println!("Output format:  {}", config.output_format);
    println!("Strict parsing: {}", config.strict);
    println!("Log level:      {}", config.log_level);
    Ok(())
}

pub async fn set_format(store: &ConfigStore, format: OutputFormat) -> Result<()> {
    store.set_output_format(format).await?;
    println!("Output format set to {}", format);
    Ok(())
}

pub async fn set_strict(store: &ConfigStore, enabled: bool) -> Result<()> {
    store.set_strict(enabled).await?;
    println!(
        "Strict parsing {}",
        if enabled { "enabled" } else { "disabled" }
    );
    Ok(())
}

pub async fn set_log_level(store: &ConfigStore, level: &str) -> Result<()> {
    store.set_log_level(level).await?;
    println!("Log level set to {}", level.trim());
    Ok(())
}

pub async fn reset(store: &ConfigStore) -> Result<()> {
    store.reset().await?;
    println!("Configuration reset to defaults");
    Ok(())
}
