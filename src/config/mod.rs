pub mod settings;

pub use settings::Settings;

#[cfg(feature = "cli")]
use crate::domain::model::Action;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "devcracks")]
#[command(about = "Devcracks: Advanced Python Developer Tools")]
pub struct CliConfig {
    #[arg(long, help = "Show list of GUI libraries for Python")]
    pub gui_libraries: bool,

    #[arg(long, value_name = "LIBRARY", help = "Show information about a specific library on PyPI")]
    pub pypi_info: Option<String>,

    #[arg(long, value_name = "LIBRARY", help = "Install a Python library using pip")]
    pub install: Option<String>,

    #[arg(long, value_name = "LIBRARY", help = "Uninstall a Python library using pip")]
    pub uninstall: Option<String>,

    #[arg(long, help = "Show Python version")]
    pub python_version: bool,

    #[arg(long, help = "List installed Python packages")]
    pub list_packages: bool,

    #[arg(long, help = "Show Python executable path")]
    pub python_path: bool,

    #[arg(long, value_name = "LIBRARY", help = "List available versions of a package from PyPI")]
    pub list_versions: Option<String>,

    #[arg(long, help = "Check the installed pip version")]
    pub pip_version: bool,

    #[arg(long, value_name = "LIBRARY", help = "Upgrade a Python library to the latest version")]
    pub upgrade: Option<String>,

    #[arg(long, value_name = "PATH", help = "Read settings from a TOML file")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "EXECUTABLE", help = "Python interpreter to query and run pip with")]
    pub python: Option<String>,

    #[arg(long, value_name = "URL", help = "Base URL of the package registry")]
    pub registry_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
fn given(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// First set flag wins, in declaration order; nothing set means usage.
    /// An empty library value counts as unset.
    pub fn action(&self) -> Action {
        if self.gui_libraries {
            Action::GuiLibraries
        } else if let Some(lib) = given(&self.pypi_info) {
            Action::PypiInfo(lib)
        } else if let Some(lib) = given(&self.install) {
            Action::Install(lib)
        } else if let Some(lib) = given(&self.uninstall) {
            Action::Uninstall(lib)
        } else if self.python_version {
            Action::PythonVersion
        } else if self.list_packages {
            Action::ListPackages
        } else if self.python_path {
            Action::PythonPath
        } else if let Some(lib) = given(&self.list_versions) {
            Action::ListVersions(lib)
        } else if self.pip_version {
            Action::PipVersion
        } else if let Some(lib) = given(&self.upgrade) {
            Action::Upgrade(lib)
        } else {
            Action::Usage
        }
    }

    /// Settings file (if any) with command-line overrides applied.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };

        if let Some(python) = &self.python {
            settings.python.executable = Some(python.clone());
        }
        if let Some(url) = &self.registry_url {
            settings.registry.base_url = Some(url.clone());
        }

        Ok(settings)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some((flag, lib)) = self.action().delegate_library() {
            validation::validate_delegate_argument(flag, lib)?;
        }
        if let Some(url) = &self.registry_url {
            validation::validate_url("--registry-url", url)?;
        }
        if let Some(python) = &self.python {
            validation::validate_non_empty_string("--python", python)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("devcracks").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_no_flags_is_usage() {
        assert_eq!(parse(&[]).action(), Action::Usage);
    }

    #[test]
    fn test_each_flag_selects_its_action() {
        assert_eq!(parse(&["--gui-libraries"]).action(), Action::GuiLibraries);
        assert_eq!(
            parse(&["--pypi-info", "requests"]).action(),
            Action::PypiInfo("requests".to_string())
        );
        assert_eq!(
            parse(&["--uninstall", "flask"]).action(),
            Action::Uninstall("flask".to_string())
        );
        assert_eq!(parse(&["--python-version"]).action(), Action::PythonVersion);
        assert_eq!(parse(&["--list-packages"]).action(), Action::ListPackages);
        assert_eq!(parse(&["--python-path"]).action(), Action::PythonPath);
        assert_eq!(
            parse(&["--list-versions", "django"]).action(),
            Action::ListVersions("django".to_string())
        );
        assert_eq!(parse(&["--pip-version"]).action(), Action::PipVersion);
        assert_eq!(
            parse(&["--upgrade", "pip"]).action(),
            Action::Upgrade("pip".to_string())
        );
    }

    #[test]
    fn test_precedence_follows_flag_order() {
        let config = parse(&["--upgrade", "pip", "--install", "requests", "--python-version"]);
        assert_eq!(config.action(), Action::Install("requests".to_string()));

        let config = parse(&["--pip-version", "--gui-libraries"]);
        assert_eq!(config.action(), Action::GuiLibraries);
    }

    #[test]
    fn test_missing_library_argument_is_rejected() {
        let result = CliConfig::try_parse_from(["devcracks", "--install"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_value_falls_through() {
        let config = parse(&["--install", "", "--upgrade", "pip"]);
        assert_eq!(config.action(), Action::Upgrade("pip".to_string()));
        assert!(config.validate().is_ok());

        assert_eq!(parse(&["--pypi-info", ""]).action(), Action::Usage);
        assert_eq!(
            parse(&["--list-versions", "", "--pip-version"]).action(),
            Action::PipVersion
        );
    }

    #[test]
    fn test_registry_names_are_not_validated() {
        let config = parse(&["--pypi-info", "foo bar"]);
        assert_eq!(config.action(), Action::PypiInfo("foo bar".to_string()));
        assert!(config.validate().is_ok());

        assert!(parse(&["--list-versions=-x"]).validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(parse(&["--install", "requests"]).validate().is_ok());
        assert!(parse(&["--install=-r"]).validate().is_err());
        assert!(parse(&["--uninstall=--yes"]).validate().is_err());
        assert!(parse(&["--registry-url", "ftp://mirror"]).validate().is_err());
    }

    #[test]
    fn test_cli_overrides_settings() {
        let config = parse(&["--python", "/usr/bin/python3.12", "--registry-url", "http://localhost:8080"]);
        let settings = config.settings().unwrap();
        assert_eq!(settings.python_executable(), "/usr/bin/python3.12");
        assert_eq!(settings.registry_url(), "http://localhost:8080");
    }
}
