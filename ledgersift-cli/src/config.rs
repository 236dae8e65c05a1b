//! JSON rules config.
//!
//! ```json
//! {
//!   "categories": { "Coffee": ["STARBUCKS"], "Food": ["RESTAURANT", "CAFE"] },
//!   "excludes": ["PAYMENT - THANK YOU"],
//!   "default_category": "Other"
//! }
//! ```
//!
//! Category order in the file is match priority, so the JSON map must keep
//! insertion order (serde_json's `preserve_order` feature). The rules are
//! loaded once per run and passed into every extraction call; there is no
//! process-wide rule state.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ledgersift_core::Ruleset;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    categories: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    excludes: Vec<String>,
    #[serde(default)]
    default_category: Option<String>,
}

/// Load and compile the ruleset. A missing config file means empty rules,
/// not an error.
pub fn load_rules(path: &Path) -> Result<Ruleset> {
    if !path.exists() {
        log::debug!("no config at {}, using empty rules", path.display());
        return Ok(Ruleset::empty());
    }

    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let file: ConfigFile =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;

    ruleset_from(file)
}

fn ruleset_from(file: ConfigFile) -> Result<Ruleset> {
    let mut categories = Vec::with_capacity(file.categories.len());
    for (name, value) in file.categories {
        let patterns: Vec<String> = serde_json::from_value(value)
            .with_context(|| format!("patterns for category '{name}' must be a string array"))?;
        categories.push((name, patterns));
    }

    Ruleset::new(
        categories,
        file.excludes,
        file.default_category.as_deref().unwrap_or("Other"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_is_preserved() {
        let file: ConfigFile = serde_json::from_str(
            r#"{"categories": {"Coffee": ["STARBUCKS"], "Food": [".*"]}}"#,
        )
        .unwrap();
        let rules = ruleset_from(file).unwrap();
        // Coffee declared first, so it wins over the catch-all
        assert_eq!(rules.category_for("STARBUCKS #123"), "Coffee");
        assert_eq!(rules.category_for("WENDY'S"), "Food");
    }

    #[test]
    fn test_defaults() {
        let rules = ruleset_from(ConfigFile::default()).unwrap();
        assert_eq!(rules.category_for("ANYTHING"), "Other");
        assert!(!rules.is_excluded("ANYTHING"));
    }

    #[test]
    fn test_default_category_override() {
        let file: ConfigFile =
            serde_json::from_str(r#"{"default_category": "Uncategorized"}"#).unwrap();
        let rules = ruleset_from(file).unwrap();
        assert_eq!(rules.category_for("ANYTHING"), "Uncategorized");
    }

    #[test]
    fn test_bad_pattern_is_an_error() {
        let file: ConfigFile =
            serde_json::from_str(r#"{"categories": {"Bad": ["("]}}"#).unwrap();
        assert!(ruleset_from(file).is_err());
    }
}
