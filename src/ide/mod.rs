//! The table of known IDEs and lookup by display name.

use serde::{Deserialize, Serialize};


/// Command identifier used when neither the CLI nor the config names an IDE.
pub const FALLBACK_IDE: &str = "idea";

/// An IDE the user can pick by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeTarget {
    /// Human-facing name, e.g. `"PyCharm"`.
    #[serde(rename = "name")]
    pub display_name: String,
    /// Name used to invoke the IDE from a shell, e.g. `"pycharm"`.
    #[serde(rename = "command")]
    pub command_id: String,
}

impl IdeTarget {
    /// Build a target from borrowed strings.
    pub fn new(display_name: &str, command_id: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            command_id: command_id.to_string(),
        }
    }
}

/// The JetBrains launchers that Toolbox and the standalone installers create.
pub fn default_targets() -> Vec<IdeTarget> {
    let table: &[(&str, &str)] = &[
        ("IntelliJ IDEA",  "idea"),
        ("PyCharm",        "pycharm"),
        ("WebStorm",       "webstorm"),
        ("GoLand",         "goland"),
        ("CLion",          "clion"),
        ("RustRover",      "rustrover"),
        ("RubyMine",       "rubymine"),
        ("PhpStorm",       "phpstorm"),
        ("Rider",          "rider"),
        ("DataGrip",       "datagrip"),
        ("DataSpell",      "dataspell"),
        ("Aqua",           "aqua"),
        ("Android Studio", "studio"),
    ];
    table
        .iter()
        .map(|&(name, cmd)| IdeTarget::new(name, cmd))
        .collect()
}

/// Map a user-supplied IDE name to a command identifier.
///
/// Display names match case-insensitively. Anything else is returned as-is and
/// treated as a raw command identifier, so `--ide my-launcher` or
/// `--ide /opt/idea/bin/idea.sh` bypass the table entirely.
pub fn command_for<'a>(targets: &'a [IdeTarget], name: &'a str) -> &'a str {
    targets
        .iter()
        .find(|t| t.display_name.eq_ignore_ascii_case(name))
        .map_or(name, |t| t.command_id.as_str())
}

/// Return the first display name that appears more than once (ignoring case).
pub fn find_duplicate(targets: &[IdeTarget]) -> Option<&str> {
    targets.iter().enumerate().find_map(|(i, t)| {
        targets[..i]
            .iter()
            .any(|prev| prev.display_name.eq_ignore_ascii_case(&t.display_name))
            .then_some(t.display_name.as_str())
    })
}
