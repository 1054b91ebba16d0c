use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("{type_name} cannot {operation}: operation not implemented")]
    NotImplemented {
        type_name: &'static str,
        operation: &'static str,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DemoError {
    pub fn not_implemented(type_name: &'static str, operation: &'static str) -> Self {
        Self::NotImplemented {
            type_name,
            operation,
        }
    }

    /// 是否為示範用的「違反原則」錯誤，而非真正的執行失敗
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NotImplemented { .. } => format!("Design violation: {}", self),
            Self::IoError(e) => format!("Could not write to the console or read a file: {}", e),
            Self::ConfigError { message } => format!("Configuration file is invalid: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Please check '{}': {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
