//! Feature record types.

use serde::Serialize;

/// Embed an SVG illustration from `assets/img` as a [`FeatureImage::Svg`].
///
/// The markup is pulled in with `include_str!`, so a missing asset fails the build.
#[macro_export]
macro_rules! svg_asset {
    ($name:literal) => {
        $crate::FeatureImage::Svg {
            asset: $name,
            markup: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/img/", $name)),
        }
    };
}

/// Illustration shown at the top of a feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FeatureImage {
    /// Vector graphic inlined into the markup
    Svg {
        /// Asset file name, for diagnostics
        asset: &'static str,
        /// Raw SVG document
        #[serde(skip)]
        markup: &'static str,
    },

    /// Image resource referenced by URL path (e.g. `/img/x.jpg`)
    Path {
        /// Resource path, resolved against the site base URL when absolute
        src: &'static str,
    },
}

impl FeatureImage {
    /// Asset name or path, whichever identifies this image.
    pub fn source(&self) -> &'static str {
        match self {
            Self::Svg { asset, .. } => *asset,
            Self::Path { src } => *src,
        }
    }
}

/// One card of the homepage feature grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureRecord {
    /// Plain text title, also used as the image's accessible text
    pub title: &'static str,

    /// Card illustration
    pub image: FeatureImage,

    /// Inline markdown body
    pub description: &'static str,
}

impl FeatureRecord {
    /// Create a feature record.
    pub const fn new(title: &'static str, image: FeatureImage, description: &'static str) -> Self {
        Self {
            title,
            image,
            description,
        }
    }

    /// Create a feature record illustrated by an image path.
    pub const fn with_path(
        title: &'static str,
        src: &'static str,
        description: &'static str,
    ) -> Self {
        Self::new(title, FeatureImage::Path { src }, description)
    }
}
