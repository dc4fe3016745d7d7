//! Asset discovery from a directory of `slide<N>.png` files.

use anyhow::{Context, Result};
use deck_core::AssetMap;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Matches `slide12.png` and captures the slide number.
static SLIDE_ASSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^slide(\d+)\.png$").unwrap());

/// Slide number embedded in an asset file name.
pub fn asset_ordinal(file_name: &str) -> Option<usize> {
    SLIDE_ASSET_REGEX
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Build an asset map from the `slide<N>.png` files in `dir`.
///
/// References are the file paths as found under `dir`. Other files are
/// skipped.
pub fn scan_assets(dir: &Path) -> Result<AssetMap> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read asset directory {}", dir.display()))?;

    let mut assets = AssetMap::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };

        match asset_ordinal(name) {
            Some(ordinal) => {
                log::debug!("Asset for slide {}: {}", ordinal, name);
                assets.insert(ordinal, entry.path().display().to_string());
            }
            None => log::debug!("Skipping {}", name),
        }
    }

    Ok(assets)
}
