pub mod dispatcher;

pub use crate::domain::model::{Action, InstalledPackage, ProjectInfo, ProjectMetadata};
pub use crate::domain::ports::{Interpreter, PackageManager, Registry};
pub use crate::utils::error::Result;
