//! Republishes the generated PNG under the names a web app manifest expects.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

pub const TARGET_NAMES: [&str; 3] = ["apple-touch-icon.png", "icon-192.png", "icon-512.png"];

/// Copies `source` into `dir` once per name in [`TARGET_NAMES`].
pub fn publish(source: &Path, dir: &Path) -> Result<Vec<PathBuf>> {
    if !source.exists() {
        bail!(
            "{} not found; generate the icons before publishing PWA copies",
            source.display()
        );
    }

    let icon = std::fs::read(source)
        .with_context(|| format!("Failed to read {}", source.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut written = Vec::with_capacity(TARGET_NAMES.len());
    for name in TARGET_NAMES {
        let target = dir.join(name);
        std::fs::write(&target, &icon)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        tracing::debug!("Copied {} -> {}", source.display(), target.display());
        written.push(target);
    }
    Ok(written)
}
