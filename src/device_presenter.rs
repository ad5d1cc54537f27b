use super::classifier::Classifier;
use super::db::{PresentationFile, RulesFile};
use super::error::Result;
use super::helpers::char_prefix;
use super::presentation::PresentationMapper;
use super::resolver::OverrideResolver;
use super::types::*;
use rayon::prelude::*;
use std::path::Path;

/// How much of the User-Agent goes into the per-request debug event.
const LOGGED_UA_CHARS: usize = 100;

/// Device classification and presentation mapping over immutable rule tables.
///
/// Build once and share by reference: every method is a pure function of its
/// arguments and the tables, so any number of requests may call in parallel.
pub struct DevicePresenter {
    classifier: Classifier,
    resolver: OverrideResolver,
    mapper: PresentationMapper,
}

impl DevicePresenter {
    /// Build from the tables compiled into the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(crate::BUILTIN_RULES, crate::BUILTIN_PRESENTATION)
    }

    /// Load `rules.yml` and `presentation.yml` from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let rules = std::fs::read_to_string(dir.join("rules.yml"))?;
        let presentation = std::fs::read_to_string(dir.join("presentation.yml"))?;
        let presenter = Self::from_yaml(&rules, &presentation)?;
        tracing::debug!(dir = %dir.display(), "loaded device tables");
        Ok(presenter)
    }

    /// Build from the YAML text of both table files.
    pub fn from_yaml(rules: &str, presentation: &str) -> Result<Self> {
        let rules: RulesFile = serde_yaml::from_str(rules)?;
        let presentation: PresentationFile = serde_yaml::from_str(presentation)?;

        let (rule_engines, mapper) = rayon::join(
            || -> Result<_> { Ok((Classifier::build(&rules)?, OverrideResolver::build(&rules)?)) },
            || PresentationMapper::build(presentation),
        );
        let (classifier, resolver) = rule_engines?;

        Ok(Self {
            classifier,
            resolver,
            mapper: mapper?,
        })
    }

    /// Classify a raw User-Agent. Never fails; unrecognized input is desktop.
    pub fn classify(&self, ua: &str) -> DeviceCategory {
        self.classifier.classify(&ua.to_lowercase())
    }

    /// Classify the User-Agent signal of an already normalized bundle.
    pub fn classify_bundle(&self, bundle: &SignalBundle) -> DeviceCategory {
        self.classifier.classify(bundle.user_agent())
    }

    /// Classify a batch of User-Agents in parallel, preserving order.
    pub fn classify_many<S>(&self, uas: &[S]) -> Vec<DeviceCategory>
    where
        S: AsRef<str> + Sync,
    {
        uas.par_iter().map(|ua| self.classify(ua.as_ref())).collect()
    }

    /// Whether the bundle looks like it comes from an embedded in-app browser.
    pub fn is_webview(&self, bundle: &SignalBundle) -> bool {
        self.resolver.is_webview(bundle)
    }

    /// Resolve the final category and webview flag for one request.
    pub fn resolve(&self, bundle: &SignalBundle) -> Resolution {
        let ua_category = self.classify_bundle(bundle);
        let resolution = self.resolver.resolve(ua_category, bundle);
        tracing::debug!(
            category = %resolution.category,
            source = resolution.source.as_str(),
            webview = resolution.webview_origin,
            ua = char_prefix(bundle.user_agent(), LOGGED_UA_CHARS),
            "resolved device"
        );
        resolution
    }

    /// Presentation for an already resolved request.
    pub fn present(&self, resolution: &Resolution) -> PresentationConfig<'_> {
        self.mapper.map(resolution.category, resolution.webview_origin)
    }

    /// Resolve a bundle and map it to its presentation. The category is
    /// returned alongside so the caller can persist it.
    pub fn resolve_presentation(
        &self,
        bundle: &SignalBundle,
    ) -> (DeviceCategory, PresentationConfig<'_>) {
        let resolution = self.resolve(bundle);
        (resolution.category, self.present(&resolution))
    }

    /// Error-page presentation for callers whose own rendering failed.
    pub fn fallback(&self) -> PresentationConfig<'_> {
        self.mapper.fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presenter() -> DevicePresenter {
        DevicePresenter::builtin().unwrap()
    }

    #[test]
    fn classify_is_case_insensitive() {
        let p = presenter();
        assert_eq!(p.classify("Mozilla/5.0 (IPAD; CPU OS 14_0)"), DeviceCategory::Tablet);
        assert_eq!(p.classify("MOZILLA/5.0 (IPHONE)"), DeviceCategory::Mobile);
    }

    #[test]
    fn classify_many_preserves_order() {
        let p = presenter();
        let uas = ["Mozilla/5.0 (iPad)", "", "Mozilla/5.0 (iPhone)", "Mozilla/5.0 (X11; Linux x86_64)"];
        assert_eq!(
            p.classify_many(&uas),
            vec![
                DeviceCategory::Tablet,
                DeviceCategory::Desktop,
                DeviceCategory::Mobile,
                DeviceCategory::Desktop,
            ]
        );
    }

    #[test]
    fn fallback_is_error_page() {
        let p = presenter();
        let f = p.fallback();
        assert_eq!(f.content.headline, "Something went wrong");
        assert_eq!(f.theme.accent, "text-red-600");
    }

    #[test]
    fn presentation_follows_resolution() {
        let p = presenter();
        let b = SignalBundle::new(Some("Mozilla/5.0 (iPad)"), Some("flutterflow"), None);
        let res = p.resolve(&b);
        assert_eq!(res.category, DeviceCategory::Tablet);
        assert!(res.webview_origin);
        let cfg = p.present(&res);
        assert_eq!(cfg.content.title, "AdaptiveSite — Studio");
        assert_eq!(cfg.theme.accent, "text-violet-600");
        assert_eq!(res.persist_token(), "tablet");
    }

    #[test]
    fn from_dir_reports_missing_files() {
        let err = DevicePresenter::from_dir("/nonexistent/adaptive-site-tables").err();
        assert!(matches!(err, Some(crate::Error::IO(_))));
    }

    #[test]
    fn from_dir_loads_shipped_tables() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tables");
        let p = DevicePresenter::from_dir(dir).unwrap();
        assert_eq!(p.classify("Kindle Fire"), DeviceCategory::Tablet);
    }
}
