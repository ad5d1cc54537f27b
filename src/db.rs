use indexmap::IndexMap;
use serde::Deserialize;

use crate::types::{ContentBundle, Theme};

// ---------------------------------------------------------------------------
// Heuristic rules  (rules.yml)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct RulesFile {
    pub tablet_keywords: Vec<String>,
    pub mobile_patterns: Vec<MatcherEntry>,
    pub android_token: String,
    pub mobile_token: String,
    #[serde(default)]
    pub embedding_keywords: Vec<String>,
    #[serde(default)]
    pub webview_patterns: Vec<MatcherEntry>,
    #[serde(default)]
    pub policy: PolicyEntry,
}

/// One matcher row. Exactly one of `keyword` or `pattern` must be set;
/// `unless` is only valid alongside `pattern`.
#[derive(Debug, Deserialize)]
pub(crate) struct MatcherEntry {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub unless: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct PolicyEntry {
    #[serde(default = "default_true")]
    pub honor_stored_override: bool,
    #[serde(default)]
    pub hint_sets_category: bool,
}

impl Default for PolicyEntry {
    fn default() -> Self {
        Self {
            honor_stored_override: true,
            hint_sets_category: false,
        }
    }
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Presentation tables  (presentation.yml)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct PresentationFile {
    /// Keyed by category token. IndexMap keeps file order for error reporting.
    pub categories: IndexMap<String, PresentationEntry>,
    pub embedded_theme: Theme,
    pub fallback: PresentationEntry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PresentationEntry {
    pub content: ContentBundle,
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_defaults_when_omitted() {
        let yaml = "tablet_keywords: [ipad]\nmobile_patterns: [{keyword: mobile}]\nandroid_token: android\nmobile_token: mobile\n";
        let rules: RulesFile = serde_yaml::from_str(yaml).unwrap();
        assert!(rules.policy.honor_stored_override);
        assert!(!rules.policy.hint_sets_category);
        assert!(rules.webview_patterns.is_empty());
    }

    #[test]
    fn matcher_rows_keep_both_fields() {
        let rows: Vec<MatcherEntry> =
            serde_yaml::from_str("- keyword: phone\n- pattern: 'android.*mobile'\n  unless: tablet\n").unwrap();
        assert_eq!(rows[0].keyword.as_deref(), Some("phone"));
        assert!(rows[0].pattern.is_none());
        assert!(rows[0].unless.is_none());
        assert_eq!(rows[1].pattern.as_deref(), Some("android.*mobile"));
        assert_eq!(rows[1].unless.as_deref(), Some("tablet"));
    }
}
