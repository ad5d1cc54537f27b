use crate::helpers::{decode_text, normalize_token, normalize_user_agent};

/// Per-request evidence, normalized once and never mutated afterwards.
///
/// Construction never fails: missing or non-text inputs degrade to "no
/// signal". The stored override is kept as supplied (trimmed, lower-cased)
/// and only validated when resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignalBundle {
    user_agent: String,
    hint: Option<String>,
    stored_override: Option<String>,
}

impl SignalBundle {
    /// Build a bundle from text inputs.
    pub fn new(user_agent: Option<&str>, hint: Option<&str>, stored_override: Option<&str>) -> Self {
        Self {
            user_agent: normalize_user_agent(user_agent),
            hint: normalize_token(hint),
            stored_override: normalize_token(stored_override),
        }
    }

    /// Build a bundle from raw header, query and cookie bytes. Values that
    /// are not valid UTF-8 count as absent.
    pub fn from_raw(
        user_agent: Option<&[u8]>,
        hint: Option<&[u8]>,
        stored_override: Option<&[u8]>,
    ) -> Self {
        Self::new(
            decode_text(user_agent),
            decode_text(hint),
            decode_text(stored_override),
        )
    }

    /// Lower-cased User-Agent; empty when none was supplied.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// The caller's stored override, not yet validated.
    pub fn stored_override(&self) -> Option<&str> {
        self.stored_override.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_every_signal() {
        let b = SignalBundle::new(Some("Mozilla/5.0 (iPad)"), Some(" FlutterFlow "), Some("Tablet\n"));
        assert_eq!(b.user_agent(), "mozilla/5.0 (ipad)");
        assert_eq!(b.hint(), Some("flutterflow"));
        assert_eq!(b.stored_override(), Some("tablet"));
    }

    #[test]
    fn absent_inputs_are_no_signal() {
        let b = SignalBundle::new(None, None, None);
        assert_eq!(b, SignalBundle::default());
        assert_eq!(b.user_agent(), "");
        assert_eq!(b.hint(), None);
        assert_eq!(b.stored_override(), None);
    }

    #[test]
    fn non_text_bytes_are_absent() {
        let b = SignalBundle::from_raw(Some(&[0xc3, 0x28]), Some(&[0xff]), Some(b"mobile"));
        assert_eq!(b.user_agent(), "");
        assert_eq!(b.hint(), None);
        assert_eq!(b.stored_override(), Some("mobile"));
    }
}
