pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::Settings;

pub use adapters::{PipDelegate, PypiClient, PythonRuntime};
pub use crate::core::{dispatcher::Dispatcher, Action};
pub use utils::error::{DevcracksError, Result};
