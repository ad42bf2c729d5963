//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};

use ivp::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    print!("{}", toml_str);
    Ok(())
}

/// Print where the config file lives.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(path: &Path) {
    println!("{}", path.display());
}

/// Write the default configuration to `path`.
///
/// Refuses to overwrite an existing file unless `force` is set.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
