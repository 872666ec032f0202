use std::io::{BufRead, Write};

use anyhow::Result;

use super::detect::Detected;

/// What the user typed at the IDE menu.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Choice {
    Skip,
    Pick(String),
    Custom,
    Invalid,
}

pub(super) fn menu_lines(detected: &[Detected]) -> Vec<String> {
    let width = detected
        .iter()
        .map(|d| d.target.display_name.len())
        .max()
        .unwrap_or(0);
    let mut lines: Vec<String> = detected
        .iter()
        .enumerate()
        .map(|(i, d)| {
            format!(
                "  {}. {:width$}  {} ({})",
                i + 1,
                d.target.display_name,
                d.resolution.path.display(),
                d.resolution.source,
            )
        })
        .collect();
    lines.push(format!("  {}. Enter a command name or path", detected.len() + 1));
    lines.push("  0. Skip (keep current default)".to_string());
    lines
}

/// Accepts a menu number, a display name or a command identifier.
/// Empty input picks the first detected IDE, or skips when none was found.
pub(super) fn parse_choice(input: &str, detected: &[Detected]) -> Choice {
    let input = input.trim();
    if input.is_empty() {
        return detected
            .first()
            .map_or(Choice::Skip, |d| Choice::Pick(d.target.display_name.clone()));
    }
    if let Ok(n) = input.parse::<usize>() {
        return match n {
            0 => Choice::Skip,
            n if n <= detected.len() => Choice::Pick(detected[n - 1].target.display_name.clone()),
            n if n == detected.len() + 1 => Choice::Custom,
            _ => Choice::Invalid,
        };
    }
    detected
        .iter()
        .find(|d| {
            d.target.display_name.eq_ignore_ascii_case(input) || d.target.command_id == input
        })
        .map_or(Choice::Invalid, |d| Choice::Pick(d.target.display_name.clone()))
}

pub(super) fn prompt_ide(detected: &[Detected]) -> Result<Option<String>> {
    if detected.is_empty() {
        eprintln!("\nNo IDE launchers found on PATH or in the search directories.");
    } else {
        eprintln!("\nSelect your default IDE:");
    }
    for line in menu_lines(detected) {
        eprintln!("{line}");
    }
    eprint!("Choice [{}]: ", usize::from(!detected.is_empty()));
    std::io::stderr().flush().ok();

    let stdin = std::io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;

    match parse_choice(&line, detected) {
        Choice::Skip => Ok(None),
        Choice::Pick(name) => Ok(Some(name)),
        Choice::Custom => {
            eprint!("Enter IDE command (e.g. \"idea\" or \"/opt/idea/bin/idea.sh\"): ");
            std::io::stderr().flush().ok();
            let mut custom = String::new();
            stdin.lock().read_line(&mut custom)?;
            let cmd = custom.trim().to_string();
            Ok(if cmd.is_empty() { None } else { Some(cmd) })
        }
        Choice::Invalid => {
            eprintln!("Invalid choice, keeping the current default.");
            Ok(None)
        }
    }
}
