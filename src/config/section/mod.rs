//! Configuration section definitions.

mod build;
mod serve;
mod site;

pub use build::BuildConfig;
pub use serve::ServeConfig;
pub use site::{DEFAULT_SITE_TITLE, MetaConfig, NavEntry, SiteSectionConfig};
