// Form controller settings and their layered loading

use crate::{ConfigError, ConfigLoader, ConfigValidator, EnvLoader, FileFormat, Result, Validate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use signup_log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Longest accepted post-submit reset delay.
pub const MAX_RESET_DELAY_MS: u64 = 60_000;

/// Settings consumed by the form controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Pause between a successful submit and the automatic reset
    pub reset_delay_ms: u64,
    /// Status text after a successful submit
    pub success_message: String,
    /// Status text after a rejected submit
    pub failure_message: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            reset_delay_ms: 800,
            success_message: "Form submitted successfully (demo).".to_string(),
            failure_message: "Please fix the highlighted fields and try again.".to_string(),
        }
    }
}

impl FormSettings {
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    /// Defaults overridden by `SIGNUP_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::builder().load_env().build()
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

impl Validate for FormSettings {
    fn validate(&self) -> Result<()> {
        ConfigValidator::at_most(self.reset_delay_ms, MAX_RESET_DELAY_MS, "reset_delay_ms")?;
        ConfigValidator::not_empty(&self.success_message, "success_message")?;
        ConfigValidator::not_empty(&self.failure_message, "failure_message")?;
        Ok(())
    }
}

/// Layers defaults, files, a dotenv file, the environment and explicit
/// overrides, in that order; later layers win.
pub struct SettingsBuilder {
    env: EnvLoader,
    files: Vec<(PathBuf, FileFormat)>,
    dotenv: Option<Option<PathBuf>>,
    load_env: bool,
    overrides: Map<String, Value>,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self {
            env: EnvLoader::default(),
            files: Vec::new(),
            dotenv: None,
            load_env: false,
            overrides: Map::new(),
        }
    }

    /// Environment prefix, `SIGNUP` by default.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env = EnvLoader::new(prefix);
        self
    }

    /// Add a settings file; the format comes from its extension.
    pub fn add_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = FileFormat::detect(path)?;
        self.files.push((path.to_path_buf(), format));
        Ok(self)
    }

    pub fn add_file_with_format(mut self, path: impl AsRef<Path>, format: FileFormat) -> Self {
        self.files.push((path.as_ref().to_path_buf(), format));
        self
    }

    /// Load a `.env` file into the process environment before reading it.
    /// `None` looks for `.env` in the working directory and tolerates its
    /// absence.
    pub fn load_dotenv(mut self, path: Option<PathBuf>) -> Self {
        self.dotenv = Some(path);
        self.load_env = true;
        self
    }

    pub fn load_env(mut self) -> Self {
        self.load_env = true;
        self
    }

    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.overrides.insert(key.to_string(), value.into());
        self
    }

    pub fn build(self) -> Result<FormSettings> {
        let mut merged = match serde_json::to_value(FormSettings::default()) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };

        for (path, format) in &self.files {
            let layer = ConfigLoader::new(*format).load_file(path)?;
            debug!(target: "signup::config", "loaded settings from {}", path.display());
            self.merge(&mut merged, layer);
        }

        match &self.dotenv {
            Some(Some(path)) => {
                dotenvy::from_path(path).map_err(|e| ConfigError::LoadError(e.to_string()))?;
            }
            Some(None) => {
                dotenvy::dotenv().ok();
            }
            None => {}
        }

        if self.load_env {
            let vars = self.env.load();
            merged.extend(
                vars.into_iter()
                    .map(|(key, value)| (key, Value::String(value))),
            );
        }

        merged.extend(self.overrides.clone());
        coerce_numbers(&mut merged);

        let settings: FormSettings = serde_json::from_value(Value::Object(merged))
            .map_err(|e| ConfigError::DeserializationError(e.to_string()))?;
        settings.validate()?;

        info!(
            target: "signup::config",
            "form settings ready: reset_delay_ms={}",
            settings.reset_delay_ms
        );
        Ok(settings)
    }

    /// File keys may be written either bare or with the env prefix.
    fn merge(&self, target: &mut Map<String, Value>, layer: Map<String, Value>) {
        for (key, value) in layer {
            let key = self
                .env
                .settings_key(&key)
                .unwrap_or_else(|| key.to_ascii_lowercase());
            target.insert(key, value);
        }
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Text-only sources (env vars, dotenv files) deliver numbers as strings.
fn coerce_numbers(map: &mut Map<String, Value>) {
    if let Some(Value::String(raw)) = map.get("reset_delay_ms") {
        if let Ok(ms) = raw.trim().parse::<u64>() {
            map.insert("reset_delay_ms".to_string(), Value::from(ms));
        }
    }
}
