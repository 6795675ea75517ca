//! Render the homepage feature grid.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use studio_features::FeatureRenderer;

use crate::config::Config;

/// Run the render command.
pub async fn run(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let html = FeatureRenderer::new()
        .with_base_url(&config.site.base_url)
        .render_homepage()
        .context("Failed to render homepage features")?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote feature grid to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
