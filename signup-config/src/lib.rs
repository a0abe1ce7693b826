// Settings for the signup form controller

pub mod env;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use settings::{FormSettings, MAX_RESET_DELAY_MS, SettingsBuilder};
pub use validation::{ConfigValidator, Validate};

/// Prefix of the environment variables read by default.
pub const DEFAULT_PREFIX: &str = "SIGNUP";
