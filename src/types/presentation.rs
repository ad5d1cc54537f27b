use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Page copy for one device category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBundle {
    pub title: String,
    pub headline: String,
    pub subhead: String,
    /// Feature bullets, in display order.
    pub bullets: Vec<String>,
}

/// Visual tokens handed to the page template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub background_gradient: String,
    pub accent: String,
    pub accent_dot: String,
    pub avatar_gradient: String,
}

/// Content plus theme for one request.
///
/// Borrows from the presenter's tables; use [`PresentationConfig::into_owned`]
/// to detach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationConfig<'a> {
    pub content: Cow<'a, ContentBundle>,
    pub theme: Cow<'a, Theme>,
}

impl<'a> PresentationConfig<'a> {
    pub fn new(content: &'a ContentBundle, theme: &'a Theme) -> Self {
        Self {
            content: Cow::Borrowed(content),
            theme: Cow::Borrowed(theme),
        }
    }

    pub fn into_owned(self) -> PresentationConfig<'static> {
        PresentationConfig {
            content: Cow::Owned(self.content.into_owned()),
            theme: Cow::Owned(self.theme.into_owned()),
        }
    }
}
