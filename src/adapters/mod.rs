// Adapters layer: concrete implementations of the domain ports (registry http, pip, interpreter).

pub mod pip;
pub mod process;
pub mod pypi;
pub mod python;

pub use pip::PipDelegate;
pub use pypi::PypiClient;
pub use python::PythonRuntime;
