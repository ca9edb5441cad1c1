use crate::adapters::process;
use crate::domain::ports::Interpreter;
use crate::utils::error::Result;
use async_trait::async_trait;

const VERSION_SNIPPET: &str = "import platform; print(platform.python_version())";
const EXECUTABLE_SNIPPET: &str = "import sys; print(sys.executable)";

/// Asks the configured interpreter about itself.
#[derive(Debug, Clone)]
pub struct PythonRuntime {
    executable: String,
}

impl PythonRuntime {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    async fn eval(&self, snippet: &str) -> Result<String> {
        let out = process::capture(&self.executable, &["-c", snippet]).await?;
        Ok(out.trim().to_string())
    }
}

#[async_trait]
impl Interpreter for PythonRuntime {
    async fn version(&self) -> Result<String> {
        self.eval(VERSION_SNIPPET).await
    }

    async fn executable_path(&self) -> Result<String> {
        self.eval(EXECUTABLE_SNIPPET).await
    }
}
