mod classifier;
mod db;
mod device_presenter;
mod error;
mod helpers;
mod literal;
mod matcher;
mod presentation;
mod resolver;
mod types;

use std::sync::OnceLock;

pub use device_presenter::DevicePresenter;
pub use error::{Error, Result};
pub use types::*;

pub(crate) const BUILTIN_RULES: &str = include_str!("../tables/rules.yml");
pub(crate) const BUILTIN_PRESENTATION: &str = include_str!("../tables/presentation.yml");

static BUILTIN: OnceLock<DevicePresenter> = OnceLock::new();

/// Process-wide presenter over the embedded tables, built on first use.
///
/// # Panics
///
/// Panics if the tables compiled into the crate fail to load. They are
/// validated by this crate's own tests, so a release build never hits this.
pub fn builtin() -> &'static DevicePresenter {
    BUILTIN.get_or_init(|| DevicePresenter::builtin().expect("embedded tables are valid"))
}

/// Classify a User-Agent with the embedded rules.
pub fn classify(ua: &str) -> DeviceCategory {
    builtin().classify(ua)
}

/// Resolve a bundle to its category and presentation with the embedded tables.
pub fn resolve_presentation(bundle: &SignalBundle) -> (DeviceCategory, PresentationConfig<'static>) {
    builtin().resolve_presentation(bundle)
}
