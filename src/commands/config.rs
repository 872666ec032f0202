use anyhow::{bail, Result};
use clap::Subcommand;
use ide_jump::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration (defaults when no file exists)
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration to disk
    Init {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Set a value, e.g. `paths.idea /opt/idea/bin/idea.sh` or `ide.Fleet fleet`
    Set { key: String, value: String },
    /// Get a configuration value
    Get { key: String },
}

pub fn cmd_config(action: ConfigAction) -> Result<()> {
    let path = Config::path()?;
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            if path.exists() {
                eprintln!("# {}", path.display());
            } else {
                eprintln!("# {} does not exist; showing defaults", path.display());
            }
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to replace it)", path.display());
            }
            Config::default().save()?;
            println!("Wrote default config to {}", path.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set_value(&key, &value)?;
            config.save()?;
            println!("Set {key} = {value}");
            report_effect(&config, &key);
        }
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.get_value(&key)?);
        }
    }
    Ok(())
}

/// Show where the affected IDE now resolves, so a typo in a path is visible
/// right away.
fn report_effect(config: &Config, key: &str) {
    let command_id = match key {
        "default_ide" | "search_dirs" => config.command_for(None),
        _ => match key.strip_prefix("paths.").or_else(|| key.strip_prefix("ide.")) {
            Some(name) => config.command_for(Some(name)),
            None => return,
        },
    };
    let resolution = config.resolver().resolve_with_source(command_id);
    let missing = if resolution.path.exists() { "" } else { " (not found on disk)" };
    eprintln!(
        "{command_id} resolves to {} via {}{missing}",
        resolution.path.display(),
        resolution.source
    );
}
