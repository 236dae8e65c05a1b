//! Category matching and exclusion filtering, driven by user-supplied regex
//! rules. Rules are injected per extraction call; nothing here is global.

use anyhow::{Context, Result};
use regex::Regex;

/// One category with its regex alternatives. Position in the parent list is
/// the match priority.
#[derive(Debug)]
struct CategoryRule {
    name: String,
    patterns: Vec<Regex>,
}

/// Ordered category rules. First category with any matching pattern wins, so
/// the order rules were supplied in is load-bearing.
///
/// Matching is case-insensitive unanchored search over the description.
#[derive(Debug, Default)]
pub struct CategoryRules {
    rules: Vec<CategoryRule>,
}

impl CategoryRules {
    pub fn new(pairs: Vec<(String, Vec<String>)>) -> Result<Self> {
        let mut rules = Vec::with_capacity(pairs.len());
        for (name, patterns) in pairs {
            let mut compiled = Vec::with_capacity(patterns.len());
            for pattern in patterns {
                let re = Regex::new(&format!("(?i){pattern}")).with_context(|| {
                    format!("invalid pattern '{pattern}' for category '{name}'")
                })?;
                compiled.push(re);
            }
            rules.push(CategoryRule {
                name,
                patterns: compiled,
            });
        }
        Ok(Self { rules })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// First category whose any pattern matches the description.
    pub fn matched(&self, description: &str) -> Option<&str> {
        for rule in &self.rules {
            if rule.patterns.iter().any(|re| re.is_match(description)) {
                return Some(&rule.name);
            }
        }
        None
    }
}

/// Exclusion rules: any match against the final cleaned description drops
/// the transaction entirely. Anchored at the start of the description,
/// case-insensitive.
#[derive(Debug, Default)]
pub struct ExcludeRules {
    patterns: Vec<Regex>,
}

impl ExcludeRules {
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let re = Regex::new(&format!(r"(?i)\A(?:{pattern})"))
                .with_context(|| format!("invalid exclusion pattern '{pattern}'"))?;
            compiled.push(re);
        }
        Ok(Self { patterns: compiled })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_excluded(&self, description: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(description))
    }
}

/// The full injected rule configuration one extraction call runs under.
#[derive(Debug)]
pub struct Ruleset {
    pub categories: CategoryRules,
    pub excludes: ExcludeRules,
    pub default_category: String,
}

impl Ruleset {
    pub fn new(
        categories: Vec<(String, Vec<String>)>,
        excludes: Vec<String>,
        default_category: &str,
    ) -> Result<Self> {
        Ok(Self {
            categories: CategoryRules::new(categories)?,
            excludes: ExcludeRules::new(excludes)?,
            default_category: default_category.to_string(),
        })
    }

    /// No rules at all: everything categorizes to the default label and
    /// nothing is excluded.
    pub fn empty() -> Self {
        Self {
            categories: CategoryRules::empty(),
            excludes: ExcludeRules::empty(),
            default_category: "Other".to_string(),
        }
    }

    /// Matched category, or the configured fallback label.
    pub fn category_for<'a>(&'a self, description: &str) -> &'a str {
        self.categories
            .matched(description)
            .unwrap_or(&self.default_category)
    }

    pub fn is_excluded(&self, description: &str) -> bool {
        self.excludes.is_excluded(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_category_wins() {
        let rules = CategoryRules::new(vec![
            ("Coffee".to_string(), vec!["STARBUCKS".to_string()]),
            ("Food".to_string(), vec![".*".to_string()]),
        ])
        .unwrap();

        assert_eq!(rules.matched("STARBUCKS #123"), Some("Coffee"));
        assert_eq!(rules.matched("WENDY'S"), Some("Food"));
    }

    #[test]
    fn test_match_is_unanchored_search() {
        let rules =
            CategoryRules::new(vec![("Coffee".to_string(), vec!["STARBUCKS".to_string()])])
                .unwrap();
        // pattern matches mid-description, case-insensitively
        assert_eq!(rules.matched("pos purchase starbucks 0441"), Some("Coffee"));
    }

    #[test]
    fn test_no_match_is_none() {
        let rules =
            CategoryRules::new(vec![("Coffee".to_string(), vec!["STARBUCKS".to_string()])])
                .unwrap();
        assert_eq!(rules.matched("GROCERY STORE"), None);
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        assert!(CategoryRules::new(vec![("Bad".to_string(), vec!["(".to_string()])]).is_err());
        assert!(ExcludeRules::new(vec!["(".to_string()]).is_err());
    }

    #[test]
    fn test_exclusion_is_anchored_at_start() {
        let rules = ExcludeRules::new(vec!["PAYMENT - THANK YOU".to_string()]).unwrap();
        assert!(rules.is_excluded("Payment - Thank You"));
        assert!(!rules.is_excluded("PREAUTH PAYMENT - THANK YOU"));
    }

    #[test]
    fn test_ruleset_fallback_label() {
        let rules = Ruleset::new(vec![], vec![], "Other").unwrap();
        assert_eq!(rules.category_for("ANYTHING"), "Other");
    }
}
