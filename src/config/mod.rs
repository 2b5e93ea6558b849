//! Configuration loading and application.
mod apply;
mod loader;
pub mod types;


pub use apply::{CreateDefaults, Settings, resolve_settings};
pub use loader::{load_config, load_config_file};
