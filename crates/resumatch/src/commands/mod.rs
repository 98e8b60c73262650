pub mod config;
pub mod inspect;
pub mod rank;
pub mod version;

use anyhow::Context;
use resumatch_core::MatcherConfig;
use std::path::Path;

/// Config from `--config`, or the defaults.
fn load_config(path: Option<&Path>) -> anyhow::Result<MatcherConfig> {
    match path {
        Some(path) => MatcherConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(MatcherConfig::new()),
    }
}

/// File name used as the candidate identifier.
fn identifier_for(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
