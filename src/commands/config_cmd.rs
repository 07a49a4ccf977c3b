//! Implementation of the `pracfile config` subcommands.

use crate::cli::ConfigInitArgs;
use crate::config::Config;
use crate::error::{PracfileError, Result};
use crate::fs::write_atomic;
use std::path::Path;

/// Execute `pracfile config show`: print the effective configuration.
pub fn cmd_config_show(config_path: &Path) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    print!("{}", config.to_yaml()?);
    Ok(())
}

/// Execute `pracfile config init`: write the default configuration file.
pub fn cmd_config_init(config_path: &Path, args: ConfigInitArgs) -> Result<()> {
    write_default_config(config_path, args.force)?;
    println!("Wrote default configuration to {}", config_path.display());
    Ok(())
}

fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        return Err(PracfileError::UserError(format!(
            "'{}' already exists (use --force to overwrite)",
            config_path.display()
        )));
    }

    let yaml = Config::default().to_yaml()?;
    write_atomic(config_path, &yaml)
}
