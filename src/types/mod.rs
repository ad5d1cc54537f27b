mod device_category;
mod presentation;
mod resolution;
mod signal_bundle;

pub use device_category::*;
pub use presentation::*;
pub use resolution::*;
pub use signal_bundle::*;
