//! Feature grid component for the Studio.AI documentation homepage.
//!
//! Holds the fixed list of homepage features and renders it into the grid
//! markup consumed by the site's page layout.

pub mod feature;
pub mod list;
pub mod markup;
pub mod render;

pub use feature::{FeatureImage, FeatureRecord};
pub use list::FEATURE_LIST;
pub use markup::MarkupError;
pub use render::{homepage_features, FeatureRenderer, RenderError};
