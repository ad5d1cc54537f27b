use crate::db::{PolicyEntry, RulesFile};
use crate::error::Result;
use crate::matcher::MatcherSet;
use crate::types::{CategorySource, DeviceCategory, Resolution, SignalBundle};

/// Combines the UA category with the bundle's override and hint signals.
///
/// Precedence, highest first: a valid stored override, then (only when
/// `hint_sets_category` is enabled) a hint naming a category, then the UA
/// category. The webview flag is computed independently and never changes
/// the category.
pub(crate) struct OverrideResolver {
    embedding: MatcherSet,
    webview: MatcherSet,
    policy: PolicyEntry,
}

impl OverrideResolver {
    pub fn build(rules: &RulesFile) -> Result<Self> {
        Ok(Self {
            embedding: MatcherSet::from_keywords("embedding_keywords", &rules.embedding_keywords)?,
            webview: MatcherSet::from_entries("webview_patterns", &rules.webview_patterns)?,
            policy: rules.policy,
        })
    }

    pub fn is_webview(&self, bundle: &SignalBundle) -> bool {
        let ua = bundle.user_agent();
        bundle.hint().is_some_and(|h| self.embedding.has_keyword(h))
            || self.embedding.is_match(ua)
            || self.webview.is_match(ua)
    }

    pub fn resolve(&self, ua_category: DeviceCategory, bundle: &SignalBundle) -> Resolution {
        let webview_origin = self.is_webview(bundle);
        let (category, source) = self.select_category(ua_category, bundle);
        Resolution {
            category,
            webview_origin,
            source,
        }
    }

    fn select_category(
        &self,
        ua_category: DeviceCategory,
        bundle: &SignalBundle,
    ) -> (DeviceCategory, CategorySource) {
        if self.policy.honor_stored_override {
            if let Some(raw) = bundle.stored_override() {
                match DeviceCategory::from_token(raw) {
                    Some(c) => return (c, CategorySource::StoredOverride),
                    None => tracing::warn!(value = raw, "discarding invalid stored override"),
                }
            }
        }

        if self.policy.hint_sets_category {
            if let Some(c) = bundle.hint().and_then(DeviceCategory::from_token) {
                return (c, CategorySource::Hint);
            }
        }

        (ua_category, CategorySource::UserAgent)
    }
}
