use crate::adapters::process;
use crate::domain::model::InstalledPackage;
use crate::domain::ports::PackageManager;
use crate::utils::error::{DevcracksError, Result};
use async_trait::async_trait;

/// Delegates to `<python> -m pip`.
#[derive(Debug, Clone)]
pub struct PipDelegate {
    python: String,
}

impl PipDelegate {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    fn pip_args<'a>(args: &[&'a str]) -> Vec<&'a str> {
        let mut full = vec!["-m", "pip"];
        full.extend_from_slice(args);
        full
    }
}

#[async_trait]
impl PackageManager for PipDelegate {
    async fn install(&self, library: &str) -> Result<()> {
        process::run_inherited(&self.python, &Self::pip_args(&["install", library])).await
    }

    async fn uninstall(&self, library: &str) -> Result<()> {
        process::run_inherited(&self.python, &Self::pip_args(&["uninstall", "-y", library])).await
    }

    async fn upgrade(&self, library: &str) -> Result<()> {
        process::run_inherited(
            &self.python,
            &Self::pip_args(&["install", "--upgrade", library]),
        )
        .await
    }

    async fn version(&self) -> Result<String> {
        let out = process::capture(&self.python, &Self::pip_args(&["--version"])).await?;
        Ok(out.trim().to_string())
    }

    async fn list_installed(&self) -> Result<Vec<InstalledPackage>> {
        let args = Self::pip_args(&["list", "--format=json"]);
        let out = process::capture(&self.python, &args).await?;
        let packages: Vec<InstalledPackage> =
            serde_json::from_str(out.trim()).map_err(|source| DevcracksError::DelegateOutput {
                command: format!("{} {}", self.python, args.join(" ")),
                source,
            })?;
        tracing::debug!("pip reported {} installed packages", packages.len());
        Ok(packages)
    }
}
