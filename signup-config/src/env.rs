// Environment variable loading

use crate::{ConfigError, Result};
use std::collections::HashMap;
use std::env;

/// Reads `PREFIX_*` variables and exposes them under lowercase keys with the
/// prefix removed (`SIGNUP_RESET_DELAY_MS` -> `reset_delay_ms`).
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Key under which a variable is exposed, or `None` when it does not
    /// carry the prefix.
    pub fn settings_key(&self, var: &str) -> Option<String> {
        let rest = var.strip_prefix(self.prefix.as_str())?;
        let rest = rest.strip_prefix('_')?;
        (!rest.is_empty()).then(|| rest.to_ascii_lowercase())
    }

    /// All prefixed variables of the current process.
    pub fn load(&self) -> HashMap<String, String> {
        env::vars()
            .filter_map(|(var, value)| self.settings_key(&var).map(|key| (key, value)))
            .collect()
    }

    /// A single variable, looked up as `PREFIX_KEY`.
    pub fn load_var(&self, key: &str) -> Result<String> {
        let full = format!("{}_{}", self.prefix, key.to_ascii_uppercase());
        env::var(&full).map_err(ConfigError::EnvError)
    }

    pub fn load_var_or(&self, key: &str, default: &str) -> String {
        self.load_var(key).unwrap_or_else(|_| default.to_string())
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(crate::DEFAULT_PREFIX)
    }
}
