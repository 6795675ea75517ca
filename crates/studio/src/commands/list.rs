//! List the homepage features.

use anyhow::Result;
use studio_features::FEATURE_LIST;

/// Format the feature list as numbered titles or as JSON.
fn format_list(json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(FEATURE_LIST)?);
    }

    let lines: Vec<String> = FEATURE_LIST
        .iter()
        .enumerate()
        .map(|(i, feature)| format!("{}. {} ({})", i + 1, feature.title, feature.image.source()))
        .collect();

    Ok(lines.join("\n"))
}

/// Run the list command.
pub async fn run(json: bool) -> Result<()> {
    println!("{}", format_list(json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_titles_in_order() {
        let text = format_list(false).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "1. End-to-End Machine Learning Workflow (undraw_docusaurus_mountain.svg)"
        );
        assert!(lines[3].starts_with("4. Flexible and Modular"));
    }

    #[test]
    fn lists_features_as_json() {
        let text = format_list(true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let features = value.as_array().unwrap();

        assert_eq!(features.len(), 4);
        assert_eq!(features[1]["title"], "Educational Value");
        assert_eq!(features[2]["image"]["asset"], "undraw_docusaurus_react.svg");
        assert!(features[0]["description"]
            .as_str()
            .unwrap()
            .starts_with("Studio.AI guides you"));
    }
}
