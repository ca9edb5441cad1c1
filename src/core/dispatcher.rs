use crate::core::{Interpreter, PackageManager, Registry};
use crate::domain::model::{Action, GUI_LIBRARIES};
use crate::utils::error::Result;
use std::io::Write;

const USAGE: &str = "\
-------------------------------DEVCRACKS VERSION 1.0-------------------------------
Devcracks is licensed under GNU GENERAL PUBLIC LICENSE V3 and is open source

--------------------------------------USAGE---------------------------------------------
Commands:
-devcracks --gui-libraries      : Show a list of popular GUI libraries for Python
-devcracks --pypi-info <library> : Show information about a specific library on PyPI
-devcracks --install <library>   : Install a Python library using pip
-devcracks --uninstall <library> : Uninstall a Python library using pip
-devcracks --python-version      : Show the Python version
-devcracks --list-packages       : List installed Python packages
-devcracks --python-path         : Show Python executable path
-devcracks --list-versions <library> : List available versions for a package from PyPI
-devcracks --pip-version         : Check the installed pip version
-devcracks --upgrade <library>   : Upgrade a Python library to the latest version
";

fn or_none(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("None")
}

/// Runs a single [`Action`] and writes its report to `out`.
pub struct Dispatcher<R: Registry, P: PackageManager, I: Interpreter> {
    registry: R,
    package_manager: P,
    interpreter: I,
}

impl<R: Registry, P: PackageManager, I: Interpreter> Dispatcher<R, P, I> {
    pub fn new(registry: R, package_manager: P, interpreter: I) -> Self {
        Self {
            registry,
            package_manager,
            interpreter,
        }
    }

    pub async fn run<W: Write>(&self, action: &Action, out: &mut W) -> Result<()> {
        tracing::debug!("Dispatching {:?}", action);

        match action {
            Action::GuiLibraries => {
                writeln!(out, "List of GUI Libraries available for Python:")?;
                for lib in GUI_LIBRARIES {
                    writeln!(out, "- {}", lib)?;
                }
            }
            Action::PypiInfo(library) => self.show_pypi_info(library, out).await?,
            Action::Install(library) => {
                writeln!(out, "Installing {}...", library)?;
                out.flush()?;
                self.package_manager.install(library).await?;
            }
            Action::Uninstall(library) => {
                writeln!(out, "Uninstalling {}...", library)?;
                out.flush()?;
                self.package_manager.uninstall(library).await?;
            }
            Action::PythonVersion => {
                let version = self.interpreter.version().await?;
                writeln!(out, "Python version: {}", version)?;
            }
            Action::ListPackages => {
                let packages = self.package_manager.list_installed().await?;
                writeln!(out, "Installed Python Packages:")?;
                for package in packages {
                    writeln!(out, "- {} ({})", package.name, package.version)?;
                }
            }
            Action::PythonPath => {
                let path = self.interpreter.executable_path().await?;
                writeln!(out, "Python executable path: {}", path)?;
            }
            Action::ListVersions(library) => self.list_versions(library, out).await?,
            Action::PipVersion => {
                let version = self.package_manager.version().await?;
                writeln!(out, "Pip version: {}", version)?;
            }
            Action::Upgrade(library) => {
                writeln!(out, "Upgrading {} to the latest version...", library)?;
                out.flush()?;
                self.package_manager.upgrade(library).await?;
            }
            Action::Usage => write!(out, "{}", USAGE)?,
        }

        out.flush()?;
        Ok(())
    }

    async fn show_pypi_info<W: Write>(&self, library: &str, out: &mut W) -> Result<()> {
        let Some(metadata) = self.registry.project(library).await? else {
            tracing::info!("{} not found on registry", library);
            writeln!(out, "Library {} not found on PyPI.", library)?;
            return Ok(());
        };

        let info = &metadata.info;
        writeln!(out, "Information for {}:", library)?;
        writeln!(out, "Version: {}", or_none(&info.version))?;
        writeln!(out, "Summary: {}", or_none(&info.summary))?;
        writeln!(out, "Home Page: {}", or_none(&info.home_page))?;
        writeln!(out, "Author: {}", or_none(&info.author))?;
        writeln!(out, "License: {}", or_none(&info.license))?;
        Ok(())
    }

    async fn list_versions<W: Write>(&self, library: &str, out: &mut W) -> Result<()> {
        let Some(metadata) = self.registry.project(library).await? else {
            tracing::info!("{} not found on registry", library);
            writeln!(out, "Library {} not found on PyPI.", library)?;
            return Ok(());
        };

        writeln!(out, "Available versions for {}:", library)?;
        for version in metadata.release_versions() {
            writeln!(out, "- {}", version)?;
        }
        Ok(())
    }
}
