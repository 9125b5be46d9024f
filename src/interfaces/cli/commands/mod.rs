//! CLI command implementations

pub mod config_management;
mod list;
mod short;

pub use config_management::{config_generate, config_show};
pub use list::list_short_urls;
pub use short::{ShortOptions, shorten_urls};
