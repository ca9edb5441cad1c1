use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevcracksError {
    #[error("Registry request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Command `{command}` failed with {status}")]
    DelegateFailed { command: String, status: ExitStatus },

    #[error("Unexpected output from `{command}`: {source}")]
    DelegateOutput {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to start `{program}`: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid registry URL `{url}`: {reason}")]
    InvalidRegistryUrl { url: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: `{value}` ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Delegate,
    Network,
    Configuration,
    System,
}

impl DevcracksError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DelegateFailed { .. } | Self::DelegateOutput { .. } | Self::SpawnFailed { .. } => {
                ErrorCategory::Delegate
            }
            Self::ApiError(_) | Self::SerializationError(_) => ErrorCategory::Network,
            Self::InvalidRegistryUrl { .. }
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Delegate | ErrorCategory::System => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Network => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::DelegateFailed { command, status } => match status.code() {
                Some(code) => format!("`{}` exited with status {}", command, code),
                None => format!("`{}` was terminated by a signal", command),
            },
            Self::DelegateOutput { command, .. } => {
                format!("Could not understand the output of `{}`", command)
            }
            Self::SpawnFailed { program, .. } => {
                format!("Could not run `{}`", program)
            }
            Self::ApiError(e) if e.is_connect() => {
                "Could not connect to the package registry".to_string()
            }
            Self::SerializationError(_) => {
                "The package registry returned an unexpected response".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Delegate => {
                "Check that the Python interpreter exists and has pip installed (see --python)"
            }
            ErrorCategory::Network => "Check your network connection or the --registry-url value",
            ErrorCategory::Configuration => "Fix the command-line flags or the settings file",
            ErrorCategory::System => "Check file permissions and paths",
        }
    }
}

pub type Result<T> = std::result::Result<T, DevcracksError>;
