use ide_jump::resolver::{Resolution, Source};
use ide_jump::{Config, IdeTarget};

/// An IDE from the config table whose launcher was found.
pub(super) struct Detected {
    pub target: IdeTarget,
    pub resolution: Resolution,
}

pub(super) fn detect_installed(config: &Config) -> Vec<Detected> {
    let resolver = config.resolver();
    config
        .ides
        .iter()
        .filter_map(|target| {
            let resolution = resolver.resolve_with_source(&target.command_id);
            (resolution.source != Source::Fallback).then(|| Detected {
                target: target.clone(),
                resolution,
            })
        })
        .collect()
}
