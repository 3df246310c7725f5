//! Response script loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::ResponseScript;
use crate::config::validation::{validate_script, ValidationError};

/// Error type for script loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

/// Load and validate a response script from a TOML file.
///
/// A relative `body_file` is resolved against the script's directory.
pub fn load_script(path: &Path) -> Result<ResponseScript, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let script = parse_script(&content, base_dir)?;

    tracing::debug!(path = %path.display(), "Response script loaded");
    Ok(script)
}

/// Parse and validate a response script held in memory.
pub fn parse_script(content: &str, base_dir: &Path) -> Result<ResponseScript, ConfigError> {
    let mut script: ResponseScript = toml::from_str(content).map_err(ConfigError::Parse)?;

    validate_script(&script).map_err(ConfigError::Validation)?;

    if let Some(file) = script.body_file.take() {
        script.body_file = Some(if file.is_relative() { base_dir.join(file) } else { file });
    }
    Ok(script)
}
