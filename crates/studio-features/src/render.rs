//! Feature grid rendering.

use minijinja::{context, Environment, Value};
use pulldown_cmark_escape::escape_href;
use serde::Serialize;

use crate::feature::{FeatureImage, FeatureRecord};
use crate::list::FEATURE_LIST;
use crate::markup::{inline_markdown, resolve_src, svg_after_root, MarkupError};

/// Errors that can occur when rendering features.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid SVG asset {asset}: no <svg> root element")]
    InvalidSvg { asset: String },

    #[error("Invalid description for '{title}': {source}")]
    Description {
        title: String,
        #[source]
        source: MarkupError,
    },

    #[error("Failed to write markup: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),
}

/// Image as seen by the card template.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum ImageView<'a> {
    /// Inline SVG; `rest` follows the `<svg` tag name
    Svg { rest: &'a str },
    /// `<img>` element; `src` is already attribute-escaped
    Img { src: Value },
}

/// Renders feature records into the homepage grid markup.
pub struct FeatureRenderer {
    env: Environment<'static>,
    base_url: String,
}

impl FeatureRenderer {
    /// Create a renderer for a site served from `/`.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template("feature.html", FEATURE_TEMPLATE)
            .expect("Failed to add feature template");
        env.add_template("features.html", FEATURES_TEMPLATE)
            .expect("Failed to add features template");

        Self {
            env,
            base_url: "/".to_string(),
        }
    }

    /// Resolve root-relative image paths against `base_url`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Base URL image paths are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Render a single feature card.
    pub fn render_feature(&self, feature: &FeatureRecord) -> Result<String, RenderError> {
        let image = match feature.image {
            FeatureImage::Svg { asset, markup } => ImageView::Svg {
                rest: svg_after_root(markup).ok_or_else(|| RenderError::InvalidSvg {
                    asset: asset.to_string(),
                })?,
            },
            FeatureImage::Path { src } => {
                let mut href = String::new();
                escape_href(&mut href, &resolve_src(&self.base_url, src))?;
                ImageView::Img {
                    src: Value::from_safe_string(href),
                }
            }
        };

        let description =
            inline_markdown(feature.description).map_err(|source| RenderError::Description {
                title: feature.title.to_string(),
                source,
            })?;

        let tmpl = self.env.get_template("feature.html")?;
        let html = tmpl.render(context! {
            title => feature.title,
            image => image,
            description => description,
        })?;

        tracing::debug!("Rendered feature card '{}'", feature.title);

        Ok(html)
    }

    /// Render the grid section with one card per feature, in order.
    pub fn render_features(&self, features: &[FeatureRecord]) -> Result<String, RenderError> {
        let cards = features
            .iter()
            .map(|feature| self.render_feature(feature))
            .collect::<Result<Vec<_>, _>>()?;

        let count = cards.len();
        let tmpl = self.env.get_template("features.html")?;
        let html = tmpl.render(context! { cards => cards })?;

        tracing::debug!("Rendered feature grid with {} cards", count);

        Ok(html)
    }

    /// Render the homepage feature grid from [`FEATURE_LIST`].
    pub fn render_homepage(&self) -> Result<String, RenderError> {
        self.render_features(FEATURE_LIST)
    }
}

impl Default for FeatureRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the homepage feature grid with default settings.
pub fn homepage_features() -> Result<String, RenderError> {
    FeatureRenderer::new().render_homepage()
}

const FEATURE_TEMPLATE: &str = r##"<div class="col col--4">
  <div class="text--center">
    {% if image.kind == "svg" %}<svg class="featureSvg" role="img" aria-label="{{ title }}"{{ image.rest | safe }}{% else %}<img class="featureSvg" src="{{ image.src }}" alt="{{ title }}">{% endif %}
  </div>
  <div class="text--center padding-horiz--md">
    <h3>{{ title }}</h3>
    <p>{{ description | safe }}</p>
  </div>
</div>"##;

const FEATURES_TEMPLATE: &str = r##"<section class="features">
  <div class="container">
    <div class="row">
{% for card in cards %}{{ card | safe }}
{% endfor %}    </div>
  </div>
</section>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn headings(html: &str) -> Vec<&str> {
        html.split("<h3>")
            .skip(1)
            .filter_map(|rest| rest.split("</h3>").next())
            .collect()
    }

    fn card_count(html: &str) -> usize {
        html.matches(r#"<div class="col col--4">"#).count()
    }

    #[test]
    fn renders_one_card_per_feature() {
        let html = homepage_features().unwrap();

        assert_eq!(card_count(&html), FEATURE_LIST.len());
        assert_eq!(card_count(&html), 4);
    }

    #[test]
    fn preserves_feature_order() {
        let html = homepage_features().unwrap();

        assert_eq!(
            headings(&html),
            vec![
                "End-to-End Machine Learning Workflow",
                "Educational Value",
                "Powerful Infrastructure",
                "Flexible and Modular",
            ]
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let renderer = FeatureRenderer::new();

        let first = renderer.render_homepage().unwrap();
        let second = renderer.render_homepage().unwrap();

        assert_eq!(first, second);
        assert_eq!(first, homepage_features().unwrap());
    }

    #[test]
    fn svg_accessible_text_matches_title() {
        let html = homepage_features().unwrap();

        for feature in FEATURE_LIST {
            let label = format!(r#"role="img" aria-label="{}""#, feature.title);
            assert!(html.contains(&label), "missing label for {}", feature.title);
        }
        assert_eq!(html.matches(r#"<svg class="featureSvg""#).count(), 4);
    }

    #[test]
    fn cards_contain_title_and_description() {
        let renderer = FeatureRenderer::new();

        for feature in FEATURE_LIST {
            let card = renderer.render_feature(feature).unwrap();

            assert_eq!(headings(&card), vec![feature.title]);
            assert!(card.contains(feature.description));
        }
    }

    #[test]
    fn wraps_cards_in_grid_container() {
        let html = homepage_features().unwrap();

        assert!(html.starts_with(r#"<section class="features">"#));
        assert!(html.contains(r#"<div class="container">"#));
        assert!(html.contains(r#"<div class="row">"#));
        assert!(html.ends_with("</section>"));
    }

    #[test]
    fn renders_single_path_feature() {
        let features = [FeatureRecord::with_path("X", "/img/x.jpg", "Y")];

        let html = FeatureRenderer::new().render_features(&features).unwrap();

        assert_eq!(card_count(&html), 1);
        assert_eq!(html.matches("<img ").count(), 1);
        assert!(html.contains(r#"<img class="featureSvg" src="/img/x.jpg" alt="X">"#));
        assert_eq!(headings(&html), vec!["X"]);
        assert!(html.contains("<p>Y</p>"));
    }

    #[test]
    fn escapes_titles() {
        let feature = FeatureRecord::with_path("Fast & <Safe>", "/img/x.jpg", "Y");

        let card = FeatureRenderer::new().render_feature(&feature).unwrap();

        assert!(card.contains("<h3>Fast &amp; &lt;Safe&gt;</h3>"));
        assert!(!card.contains("<Safe>"));
    }

    #[test]
    fn resolves_image_against_base_url() {
        let feature = FeatureRecord::with_path("X", "/img/x.jpg", "Y");

        let renderer = FeatureRenderer::new().with_base_url("/studio/");
        let card = renderer.render_feature(&feature).unwrap();

        assert_eq!(renderer.base_url(), "/studio/");
        assert!(card.contains(r#"src="/studio/img/x.jpg""#));
        assert!(!card.contains("&#x2f;"));
    }

    #[test]
    fn escapes_image_src_attribute() {
        let feature = FeatureRecord::with_path("X", "/img/a\"b&c.jpg", "Y");

        let card = FeatureRenderer::new().render_feature(&feature).unwrap();

        assert!(card.contains(r#"src="/img/a%22b&amp;c.jpg""#));
    }

    #[test]
    fn joins_description_paragraphs() {
        let feature = FeatureRecord::with_path("X", "/img/x.jpg", "First para.\n\nSecond para.");

        let card = FeatureRenderer::new().render_feature(&feature).unwrap();

        assert!(card.contains("<p>First para.<br>Second para.</p>"));
    }

    #[test]
    fn rejects_block_description() {
        let feature = FeatureRecord::with_path("X", "/img/x.jpg", "- a\n- b");

        let result = FeatureRenderer::new().render_feature(&feature);

        assert!(matches!(
            result,
            Err(RenderError::Description {
                ref title,
                source: MarkupError::BlockElement("list"),
            }) if title == "X"
        ));
    }

    #[test]
    fn rejects_invalid_svg() {
        let feature = FeatureRecord::new(
            "Broken",
            FeatureImage::Svg {
                asset: "broken.svg",
                markup: "<png/>",
            },
            "Y",
        );

        let result = FeatureRenderer::new().render_feature(&feature);

        assert!(matches!(
            result,
            Err(RenderError::InvalidSvg { ref asset }) if asset == "broken.svg"
        ));
    }

    #[test]
    fn empty_list_renders_empty_grid() {
        let html = FeatureRenderer::new().render_features(&[]).unwrap();

        assert_eq!(card_count(&html), 0);
        assert!(html.contains(r#"<div class="row">"#));
    }

    #[test]
    fn renderer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FeatureRenderer>();
    }
}
