use crate::db::{PresentationEntry, PresentationFile};
use crate::error::{Error, Result};
use crate::types::{ContentBundle, DeviceCategory, PresentationConfig, Theme};

/// Category (+ webview flag) → presentation. Total over all six inputs.
pub(crate) struct PresentationMapper {
    /// Indexed by `DeviceCategory::index()`.
    entries: [PresentationEntry; 3],
    embedded_theme: Theme,
    fallback: PresentationEntry,
}

impl PresentationMapper {
    pub fn build(file: PresentationFile) -> Result<Self> {
        let PresentationFile {
            categories,
            embedded_theme,
            fallback,
        } = file;

        let mut slots: [Option<PresentationEntry>; 3] = [None, None, None];
        for (token, entry) in categories {
            let category = DeviceCategory::from_token(token.trim())
                .ok_or_else(|| Error::UnknownCategory(token.clone()))?;
            validate_entry(category.as_str(), &entry)?;
            slots[category.index()] = Some(entry);
        }
        validate_theme("embedded_theme", &embedded_theme)?;
        validate_entry("fallback", &fallback)?;

        let [desktop, tablet, mobile] = slots;
        let take = |slot: Option<PresentationEntry>, c: DeviceCategory| {
            slot.ok_or(Error::MissingCategory(c.as_str()))
        };
        Ok(Self {
            entries: [
                take(desktop, DeviceCategory::Desktop)?,
                take(tablet, DeviceCategory::Tablet)?,
                take(mobile, DeviceCategory::Mobile)?,
            ],
            embedded_theme,
            fallback,
        })
    }

    pub fn map(&self, category: DeviceCategory, webview_origin: bool) -> PresentationConfig<'_> {
        let entry = &self.entries[category.index()];
        let theme = if webview_origin {
            &self.embedded_theme
        } else {
            &entry.theme
        };
        PresentationConfig::new(&entry.content, theme)
    }

    pub fn fallback(&self) -> PresentationConfig<'_> {
        PresentationConfig::new(&self.fallback.content, &self.fallback.theme)
    }
}

fn validate_entry(name: &str, entry: &PresentationEntry) -> Result<()> {
    validate_content(name, &entry.content)?;
    validate_theme(name, &entry.theme)
}

fn validate_content(name: &str, content: &ContentBundle) -> Result<()> {
    let fields = [
        ("title", content.title.as_str()),
        ("headline", content.headline.as_str()),
        ("subhead", content.subhead.as_str()),
    ];
    check_fields(name, &fields)?;
    if content.bullets.is_empty() || content.bullets.iter().any(|b| b.trim().is_empty()) {
        return Err(empty(name, "bullets"));
    }
    Ok(())
}

fn validate_theme(name: &str, theme: &Theme) -> Result<()> {
    let fields = [
        ("background_gradient", theme.background_gradient.as_str()),
        ("accent", theme.accent.as_str()),
        ("accent_dot", theme.accent_dot.as_str()),
        ("avatar_gradient", theme.avatar_gradient.as_str()),
    ];
    check_fields(name, &fields)
}

fn check_fields(name: &str, fields: &[(&'static str, &str)]) -> Result<()> {
    match fields.iter().find(|(_, v)| v.trim().is_empty()) {
        Some((field, _)) => Err(empty(name, *field)),
        None => Ok(()),
    }
}

fn empty(entry: &str, field: &'static str) -> Error {
    Error::EmptyField {
        entry: entry.to_string(),
        field,
    }
}
