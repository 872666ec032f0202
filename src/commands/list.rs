use anyhow::Result;
use ide_jump::{resolver::Source, Config};

pub fn cmd_list() -> Result<()> {
    let config = Config::load()?;
    let resolver = config.resolver();

    let width = config
        .ides
        .iter()
        .map(|t| t.display_name.len())
        .max()
        .unwrap_or(0);

    for target in &config.ides {
        let is_default = target.display_name.eq_ignore_ascii_case(&config.default_ide)
            || target.command_id == config.default_ide;
        let resolution = resolver.resolve_with_source(&target.command_id);
        let location = if resolution.source == Source::Fallback {
            "(not found)".to_string()
        } else {
            resolution.path.display().to_string()
        };
        println!(
            "{} {:width$}  {:10}  {}",
            if is_default { '*' } else { ' ' },
            target.display_name,
            target.command_id,
            location,
        );
    }
    Ok(())
}

pub fn cmd_resolve(ide: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let command_id = config.command_for(ide);
    let resolution = config.resolver().resolve_with_source(command_id);
    eprintln!("Resolved {command_id} via {}", resolution.source);
    println!("{}", resolution.path.display());
    Ok(())
}
