use serde::{Deserialize, Serialize};
use std::fmt;

/// The unit of classification. Exactly one applies to any request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceCategory {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl DeviceCategory {
    pub const ALL: [DeviceCategory; 3] = [Self::Desktop, Self::Tablet, Self::Mobile];

    /// Parse a boundary token. Only the exact lower-case tokens `desktop`,
    /// `tablet` and `mobile` are accepted.
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "desktop" => Some(Self::Desktop),
            "tablet" => Some(Self::Tablet),
            "mobile" => Some(Self::Mobile),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Tablet => "tablet",
            Self::Mobile => "mobile",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Desktop => 0,
            Self::Tablet => 1,
            Self::Mobile => 2,
        }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
