mod detect;
mod prompt;


use anyhow::Result;
use ide_jump::Config;

pub fn cmd_setup() -> Result<()> {
    let config_path = Config::path()?;
    let already_existed = config_path.exists();
    let mut config = Config::load()?;

    let detected = detect::detect_installed(&config);
    match prompt::prompt_ide(&detected) {
        Ok(Some(name)) => config.default_ide = name,
        Ok(None) => {}
        Err(e) => eprintln!("Warning: could not read IDE choice: {e}"),
    }

    config.save()?;
    if already_existed {
        eprintln!("Updated config at {}", config_path.display());
    } else {
        eprintln!("Created config at {}", config_path.display());
    }

    eprintln!(
        "\nSetup complete! Default IDE: {}. Run: ide-jump open <file> --line N",
        config.default_ide
    );
    Ok(())
}
