use crate::domain::model::{InstalledPackage, ProjectMetadata};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Registry: Send + Sync {
    /// `Ok(None)` when the registry answers with a non-success status.
    async fn project(&self, library: &str) -> Result<Option<ProjectMetadata>>;
}

#[async_trait]
pub trait PackageManager: Send + Sync {
    async fn install(&self, library: &str) -> Result<()>;
    async fn uninstall(&self, library: &str) -> Result<()>;
    async fn upgrade(&self, library: &str) -> Result<()>;
    async fn version(&self) -> Result<String>;
    async fn list_installed(&self) -> Result<Vec<InstalledPackage>>;
}

#[async_trait]
pub trait Interpreter: Send + Sync {
    async fn version(&self) -> Result<String>;
    async fn executable_path(&self) -> Result<String>;
}
