// Settings service module
// Loads grid and layout settings from a TOML file

mod service;

pub use service::{SettingsService, CONFIG_ENV_VAR};
