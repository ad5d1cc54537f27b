use super::DeviceCategory;

/// Which signal decided the final category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySource {
    StoredOverride,
    Hint,
    UserAgent,
}

impl CategorySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StoredOverride => "stored override",
            Self::Hint => "hint",
            Self::UserAgent => "user agent",
        }
    }
}

/// Outcome of resolving a [`SignalBundle`](super::SignalBundle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub category: DeviceCategory,
    /// The request appears to come from an embedded in-app browser. Affects
    /// the theme only, never the category.
    pub webview_origin: bool,
    pub source: CategorySource,
}

impl Resolution {
    /// Token the caller may store and send back as the next override.
    pub fn persist_token(&self) -> &'static str {
        self.category.as_str()
    }
}
