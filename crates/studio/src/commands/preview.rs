//! Preview server command.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use minijinja::{context, Environment};
use studio_features::FeatureRenderer;
use tower_http::services::ServeDir;
use walkdir::WalkDir;

use crate::config::Config;

/// Write the preview page and static assets into `dir`.
///
/// Returns the path of the written page.
fn write_preview(config: &Config, dir: &Path) -> Result<PathBuf> {
    let features = FeatureRenderer::new()
        .with_base_url(&config.site.base_url)
        .render_homepage()
        .context("Failed to render homepage features")?;

    let mut env = Environment::new();
    env.add_template("preview.html", PREVIEW_TEMPLATE)?;
    let html = env.get_template("preview.html")?.render(context! {
        title => &config.site.title,
        styles => PREVIEW_CSS,
        features => features,
    })?;

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let copied = copy_static(&config.site.static_dir, dir)?;

    let page = dir.join(PREVIEW_PAGE);
    fs::write(&page, html).with_context(|| format!("Failed to write {}", page.display()))?;
    tracing::info!("Wrote preview page with {} static assets", copied);

    Ok(page)
}

/// Copy the static asset tree into the preview directory.
///
/// A top-level `index.html` is skipped, the preview page owns that path.
fn copy_static(static_dir: &Path, dir: &Path) -> Result<usize> {
    if !static_dir.exists() {
        tracing::debug!("Static directory not found: {}", static_dir.display());
        return Ok(0);
    }

    let mut count = 0;

    for entry in WalkDir::new(static_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let relative = path.strip_prefix(static_dir).unwrap_or(path);
        if relative == Path::new(PREVIEW_PAGE) {
            tracing::warn!("Skipping {}: conflicts with the preview page", path.display());
            continue;
        }

        let target = dir.join(relative);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        match fs::copy(path, &target) {
            Ok(_) => count += 1,
            Err(e) => tracing::warn!("Failed to copy {}: {}", path.display(), e),
        }
    }

    Ok(count)
}

/// Run the preview command.
pub async fn run(config: &Config, port: u16, dir: Option<PathBuf>, open: bool) -> Result<()> {
    let dir = dir.unwrap_or_else(|| config.output.dir.clone());
    let page = write_preview(config, &dir)?;

    let addr: SocketAddr = format!("127.0.0.1:{}", port)
        .parse()
        .context("Invalid address")?;

    tracing::info!("Serving {} at http://{}", page.display(), addr);

    let app = Router::new().fallback_service(ServeDir::new(&dir));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    if open {
        let url = format!("http://{}", addr);
        if let Err(e) = open::that(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    axum::serve(listener, app).await?;

    Ok(())
}

const PREVIEW_PAGE: &str = "index.html";

const PREVIEW_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  <style>{{ styles | safe }}</style>
</head>
<body>
  <main>
    {{ features | safe }}
  </main>
</body>
</html>"##;

// Minimal stand-in for the site theme's grid classes
const PREVIEW_CSS: &str = r#"
body { margin: 0; font-family: system-ui, -apple-system, sans-serif; line-height: 1.6; }
.container { max-width: 1140px; margin: 0 auto; padding: 0 1rem; }
.row { display: flex; flex-wrap: wrap; margin: 0 -1rem; }
.col { box-sizing: border-box; padding: 0 1rem; width: 100%; }
.col--4 { flex: 0 0 33.333%; max-width: 33.333%; }
.text--center { text-align: center; }
.padding-horiz--md { padding-left: 1rem; padding-right: 1rem; }
.features { display: flex; align-items: center; padding: 2rem 0; width: 100%; }
.featureSvg { height: 200px; width: 200px; }
@media (max-width: 996px) { .col--4 { flex-basis: 100%; max-width: 100%; } }
"#;
