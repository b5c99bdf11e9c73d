use anyhow::{Context, Result, bail};

use cattle_core::config::RootConfig;
use cattle_infrastructure::{CattlePaths, ConfigService};

pub fn show(paths: &CattlePaths) -> Result<()> {
    let service = ConfigService::new(paths)?;
    let config = service.get_config()?;
    println!("# {}", service.path().display());
    print!(
        "{}",
        toml::to_string_pretty(&config).context("Failed to render configuration")?
    );
    Ok(())
}

pub fn init(paths: &CattlePaths, force: bool) -> Result<()> {
    let service = ConfigService::new(paths)?;
    if service.path().exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            service.path().display()
        );
    }
    service.save_config(&RootConfig::default())?;
    println!("✅ Wrote {}", service.path().display());
    Ok(())
}
