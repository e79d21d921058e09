use anyhow::Result;
use sessionfeed_runtime::ConfigFile;
use std::path::Path;

pub fn show(config_path: &Path) -> Result<()> {
    let config = ConfigFile::load_from(config_path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}
