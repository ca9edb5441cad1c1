use serde::Deserialize;

pub const GUI_LIBRARIES: [&str; 7] = [
    "tkinter", "PyQt5", "wxPython", "Kivy", "PySide2", "Flask", "Django",
];

/// One operation per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    GuiLibraries,
    PypiInfo(String),
    Install(String),
    Uninstall(String),
    PythonVersion,
    ListPackages,
    PythonPath,
    ListVersions(String),
    PipVersion,
    Upgrade(String),
    Usage,
}

impl Action {
    /// The library handed to pip and the flag that carried it.
    pub fn delegate_library(&self) -> Option<(&'static str, &str)> {
        match self {
            Action::Install(lib) => Some(("--install", lib)),
            Action::Uninstall(lib) => Some(("--uninstall", lib)),
            Action::Upgrade(lib) => Some(("--upgrade", lib)),
            _ => None,
        }
    }
}

/// `GET /pypi/{project}/json` payload, reduced to the fields we print.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectMetadata {
    pub info: ProjectInfo,
    /// Keys are release versions in payload order.
    #[serde(default)]
    pub releases: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectInfo {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub home_page: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
}

impl ProjectMetadata {
    pub fn release_versions(&self) -> impl Iterator<Item = &str> {
        self.releases.keys().map(String::as_str)
    }
}

/// Row of `pip list --format=json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InstalledPackage {
    pub name: String,
    pub version: String,
}
