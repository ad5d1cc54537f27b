use crate::db::RulesFile;
use crate::error::{Error, Result};
use crate::matcher::{Matcher, MatcherSet};
use crate::types::DeviceCategory;

/// User-Agent → device category, by ordered heuristics.
///
/// 1. any tablet keyword → tablet
/// 2. any mobile pattern → mobile
/// 3. android token without the mobile token → tablet
/// 4. otherwise desktop
///
/// The tablet scan completes before any mobile pattern is evaluated, so UAs
/// carrying both kinds of marker classify as tablet.
pub(crate) struct Classifier {
    tablet: MatcherSet,
    mobile: MatcherSet,
    android: Matcher,
    mobile_token: Matcher,
}

impl Classifier {
    pub fn build(rules: &RulesFile) -> Result<Self> {
        let tablet = MatcherSet::from_keywords("tablet_keywords", &rules.tablet_keywords)?;
        let mobile = MatcherSet::from_entries("mobile_patterns", &rules.mobile_patterns)?;
        let android = Matcher::keyword(&rules.android_token).ok_or(Error::InvalidMatcher {
            table: "android_token",
            index: 0,
        })?;
        let mobile_token = Matcher::keyword(&rules.mobile_token).ok_or(Error::InvalidMatcher {
            table: "mobile_token",
            index: 0,
        })?;
        Ok(Self {
            tablet,
            mobile,
            android,
            mobile_token,
        })
    }

    /// `ua` must already be lower-cased.
    pub fn classify(&self, ua: &str) -> DeviceCategory {
        if ua.is_empty() {
            return DeviceCategory::Desktop;
        }
        if self.tablet.is_match(ua) {
            return DeviceCategory::Tablet;
        }
        if self.mobile.is_match(ua) {
            return DeviceCategory::Mobile;
        }
        if self.android.is_match(ua) && !self.mobile_token.is_match(ua) {
            return DeviceCategory::Tablet;
        }
        DeviceCategory::Desktop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        let rules: RulesFile = serde_yaml::from_str(crate::BUILTIN_RULES).unwrap();
        Classifier::build(&rules).unwrap()
    }

    fn classify(ua: &str) -> DeviceCategory {
        classifier().classify(&ua.to_lowercase())
    }

    #[test]
    fn tablet_keyword_beats_mobile_token() {
        // Galaxy Tab running a phone-style browser still reports "Mobile".
        let ua = "Mozilla/5.0 (Linux; Android 11; SM-T500) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/96.0 Mobile Safari/537.36";
        assert_eq!(classify(ua), DeviceCategory::Tablet);
        assert_eq!(classify("Kindle mobile phone"), DeviceCategory::Tablet);
    }

    #[test]
    fn phones_are_mobile() {
        for ua in [
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1",
            "Mozilla/5.0 (Linux; Android 10; SM-G960F) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/83.0 Mobile Safari/537.36",
            "Mozilla/5.0 (Windows Phone 10.0; Android 6.0.1; Microsoft; Lumia 950)",
            "BlackBerry9700/5.0.0.862 Profile/MIDP-2.1 Configuration/CLDC-1.1",
            "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80 (S60; SymbOS; Opera Mobi/23.348; U; en) Presto/2.5.25 Version/10.54",
        ] {
            assert_eq!(classify(ua), DeviceCategory::Mobile, "ua: {}", ua);
        }
    }

    #[test]
    fn android_without_mobile_is_tablet() {
        let ua = "Mozilla/5.0 (Linux; Android 9; Lenovo TB-X505F) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/79.0 Safari/537.36";
        assert_eq!(classify(ua), DeviceCategory::Tablet);
    }

    #[test]
    fn desktops_and_empty_default() {
        for ua in [
            "",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15",
            "curl/8.4.0",
            "\u{0}\u{1}garbage",
        ] {
            assert_eq!(classify(ua), DeviceCategory::Desktop, "ua: {:?}", ua);
        }
    }
}
