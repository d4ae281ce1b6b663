// Configuration module.
// Resolves config/cache locations and loads user settings from JSON.

pub mod paths;
pub mod store;

pub use paths::{config_path, log_path};
pub use store::{Config, load_or_default};
