use anyhow::{Context, Result};
use rpawogen::configtool::{get_config_dir, AppConfig, CONFIG_FILE};

pub fn show_config(reset: bool) -> Result<()> {
    let config_dir = get_config_dir().context("Failed to locate configuration directory")?;
    let config = if reset {
        let config = AppConfig::default();
        config.save_to(&config_dir).context("Failed to write configuration")?;
        println!("Configuration reset to defaults.");
        config
    } else {
        AppConfig::load_from(&config_dir).context("Failed to load configuration")?
    };

    println!("Config file: {}", config_dir.join(CONFIG_FILE).display());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
