use std::path::{Path, PathBuf};

use anyhow::Result;
use ide_jump::{Config, JumpRequest, Jumper};

pub struct OpenArgs {
    pub file: Option<PathBuf>,
    pub line: u32,
    pub column: u32,
    pub ide: Option<String>,
    pub project: Option<PathBuf>,
    pub dry_run: bool,
}

pub fn cmd_open(args: &OpenArgs) -> Result<()> {
    let config = Config::load()?;
    let command_id = config.command_for(args.ide.as_deref());
    let resolver = config.resolver();
    let probes = config.probes();
    let jumper = Jumper::new(&resolver, &probes);

    let request = jumper.file_request(
        command_id,
        args.file.as_deref(),
        args.line,
        args.column,
        args.project.as_deref(),
    )?;
    run(&jumper, &request, args.dry_run)
}

pub fn cmd_project(start: Option<&Path>, ide: Option<&str>, dry_run: bool) -> Result<()> {
    let config = Config::load()?;
    let command_id = config.command_for(ide);
    let resolver = config.resolver();
    let probes = config.probes();
    let jumper = Jumper::new(&resolver, &probes);

    let request = jumper.project_request(command_id, start)?;
    run(&jumper, &request, dry_run)
}

fn run(jumper: &Jumper<'_>, request: &JumpRequest, dry_run: bool) -> Result<()> {
    if dry_run {
        println!("{}", jumper.command(request).display_line());
        return Ok(());
    }

    jumper.launch(request)?;

    match (&request.file_path, &request.project_root) {
        (Some(file), _) => eprintln!(
            "Opened {}:{}:{} in {}",
            file.display(),
            request.line,
            request.column,
            request.command_id
        ),
        (None, Some(root)) => eprintln!("Opened {} in {}", root.display(), request.command_id),
        (None, None) => eprintln!("Started {}", request.command_id),
    }
    Ok(())
}
