// Settings file loaders

use crate::{ConfigError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Supported settings file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
    Env,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            "env" => Some(FileFormat::Env),
            _ => None,
        }
    }

    /// Detect the format from a path's extension.
    pub fn detect(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ConfigError::LoadError(format!("No file extension: {}", path.display())))?;

        Self::from_extension(ext)
            .ok_or_else(|| ConfigError::LoadError(format!("Unsupported format: {}", ext)))
    }
}

/// Reads a settings file into a flat JSON object.
pub struct ConfigLoader {
    format: FileFormat,
}

impl ConfigLoader {
    pub fn new(format: FileFormat) -> Self {
        Self { format }
    }

    pub fn load_file(&self, path: &Path) -> Result<Map<String, Value>> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::LoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        self.parse(&content)
    }

    /// Parse file content. The top level must be a table/object.
    pub fn parse(&self, content: &str) -> Result<Map<String, Value>> {
        let value = match self.format {
            FileFormat::Json => serde_json::from_str::<Value>(content)
                .map_err(|e| ConfigError::ParseError(format!("JSON parse error: {}", e)))?,
            FileFormat::Toml => {
                let table: toml::Table = toml::from_str(content)
                    .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))?;
                serde_json::to_value(table)
                    .map_err(|e| ConfigError::ParseError(format!("TOML conversion error: {}", e)))?
            }
            FileFormat::Env => Value::Object(parse_env(content)),
        };

        match value {
            Value::Object(map) => Ok(map),
            _ => Err(ConfigError::ParseError(
                "settings must be a key/value table".to_string(),
            )),
        }
    }
}

fn parse_env(content: &str) -> Map<String, Value> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.trim().to_string(), Value::String(value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json() {
        let map = ConfigLoader::new(FileFormat::Json)
            .parse(r#"{"reset_delay_ms": 250}"#)
            .unwrap();
        assert_eq!(map["reset_delay_ms"], 250);
    }

    #[test]
    fn test_parse_toml() {
        let map = ConfigLoader::new(FileFormat::Toml)
            .parse("reset_delay_ms = 250\nsuccess_message = \"Done\"\n")
            .unwrap();
        assert_eq!(map["reset_delay_ms"], 250);
        assert_eq!(map["success_message"], "Done");
    }

    #[test]
    fn test_parse_env() {
        let map = ConfigLoader::new(FileFormat::Env)
            .parse("# comment\nSIGNUP_RESET_DELAY_MS=100\n\nFAILURE_MESSAGE=\"Try again\"\nnot a pair\n")
            .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["SIGNUP_RESET_DELAY_MS"], "100");
        assert_eq!(map["FAILURE_MESSAGE"], "Try again");
    }

    #[test]
    fn test_json_must_be_object() {
        assert!(matches!(
            ConfigLoader::new(FileFormat::Json).parse("[1, 2]"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(FileFormat::from_extension("TOML"), Some(FileFormat::Toml));
        assert_eq!(FileFormat::from_extension("yaml"), None);
        assert_eq!(
            FileFormat::detect(Path::new("form.json")).unwrap(),
            FileFormat::Json
        );
        assert!(FileFormat::detect(Path::new("form")).is_err());
    }
}
