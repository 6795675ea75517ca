//! The Studio.AI homepage features.

use crate::feature::FeatureRecord;
use crate::svg_asset;

/// Homepage features, in display order.
pub static FEATURE_LIST: &[FeatureRecord] = &[
    FeatureRecord::new(
        "End-to-End Machine Learning Workflow",
        svg_asset!("undraw_docusaurus_mountain.svg"),
        "Studio.AI guides you through an entire pipeline: from data preparation and image \
         tiling, to annotation, training, and model application. This end-to-end approach \
         ensures you gain a comprehensive understanding of AI-driven microscopy workflows.",
    ),
    FeatureRecord::new(
        "Educational Value",
        svg_asset!("undraw_docusaurus_tree.svg"),
        "Designed with learning in mind, Studio.AI helps students and researchers \
         bridge theoretical knowledge with practical, real-world machine learning \
         applications for microscopy image analysis.",
    ),
    FeatureRecord::new(
        "Powerful Infrastructure",
        svg_asset!("undraw_docusaurus_react.svg"),
        "Built on modern technologies, Studio.AI leverages GPU acceleration, advanced \
         segmentation models, and distributed processing to handle large datasets and \
         deliver scalable, efficient performance.",
    ),
    FeatureRecord::new(
        "Flexible and Modular",
        svg_asset!("undraw_docusaurus_mountain.svg"),
        "Each phase of the workflow\u{2014}tiling, annotation, training, and analysis\u{2014}can be \
         customized or extended. Use only the components you need, or follow the \
         entire pipeline to get the most complete experience.",
    ),
];
