use crate::adapters::pypi::DEFAULT_REGISTRY_URL;
use crate::utils::error::{DevcracksError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_PYTHON: &str = "python3";

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

/// Optional `devcracks.toml` settings file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub registry: RegistrySettings,
    #[serde(default)]
    pub python: PythonSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrySettings {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PythonSettings {
    pub executable: Option<String>,
}

impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| DevcracksError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DevcracksError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay literal.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn registry_url(&self) -> &str {
        self.registry
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_REGISTRY_URL)
    }

    pub fn python_executable(&self) -> &str {
        self.python.executable.as_deref().unwrap_or(DEFAULT_PYTHON)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("registry.base_url", self.registry_url())?;
        validation::validate_non_empty_string("python.executable", self.python_executable())?;
        Ok(())
    }
}
