use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid argument for {operation}: {reason}")]
    InvalidArgument {
        operation: &'static str,
        reason: String,
    },

    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// 錯誤分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
    Configuration,
    System,
}

/// 錯誤嚴重程度，CLI 以此決定退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        CalcError::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }

    pub fn overflow(operation: &'static str) -> Self {
        CalcError::Overflow { operation }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::DivisionByZero | CalcError::InvalidArgument { .. } => ErrorCategory::Input,
            CalcError::Overflow { .. } => ErrorCategory::Arithmetic,
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            CalcError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Arithmetic => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Arithmetic => 2,
            ErrorCategory::Configuration | ErrorCategory::System => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::DivisionByZero => "Cannot divide by zero".to_string(),
            CalcError::InvalidArgument { operation, reason } => {
                format!("{} cannot accept this input: {}", operation, reason)
            }
            CalcError::Overflow { operation } => {
                format!("The result of {} does not fit in a 64-bit integer", operation)
            }
            CalcError::ConfigError { message } => format!("Configuration problem: {}", message),
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            CalcError::IoError(e) => format!("File access failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero => "Use a non-zero divisor",
            CalcError::InvalidArgument { .. } => "Check the argument range for this operation",
            CalcError::Overflow { .. } => {
                "Use smaller inputs, or pass --overflow wrap / --overflow saturate"
            }
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again"
            }
            CalcError::IoError(_) => "Make sure the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_category() {
        assert_eq!(CalcError::DivisionByZero.exit_code(), 1);
        assert_eq!(CalcError::invalid_argument("factorial", "negative").exit_code(), 1);
        assert_eq!(CalcError::overflow("add").exit_code(), 2);
        assert_eq!(
            CalcError::ConfigError {
                message: "bad".to_string()
            }
            .exit_code(),
            3
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(
            CalcError::overflow("factorial").to_string(),
            "Arithmetic overflow in factorial"
        );
        assert_eq!(
            CalcError::invalid_argument("factorial", "negative input: -1").to_string(),
            "Invalid argument for factorial: negative input: -1"
        );
    }

    #[test]
    fn test_severity_ordering() {
        assert!(CalcError::overflow("add").severity() > CalcError::DivisionByZero.severity());
        assert_eq!(
            CalcError::IoError(std::io::Error::other("boom")).severity(),
            ErrorSeverity::Critical
        );
    }
}
