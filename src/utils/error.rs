use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnumError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Depth {depth} would emit {expected} lines, limit is {limit}")]
    OutputLimitExceeded { depth: u32, expected: String, limit: u64 },

    #[error("Enumeration task failed: {message}")]
    TaskError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Limit,
    Runtime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EnumError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EnumError::IoError(_) | EnumError::SerializationError(_) => ErrorCategory::Io,
            EnumError::ConfigError { .. }
            | EnumError::ConfigValidationError { .. }
            | EnumError::InvalidConfigValueError { .. }
            | EnumError::MissingConfigError { .. } => ErrorCategory::Configuration,
            EnumError::OutputLimitExceeded { .. } => ErrorCategory::Limit,
            EnumError::TaskError { .. } => ErrorCategory::Runtime,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // downstream reader went away (`digit-enum -n 6 | head`)
            e if e.is_broken_pipe() => ErrorSeverity::Low,
            EnumError::OutputLimitExceeded { .. } => ErrorSeverity::Medium,
            EnumError::IoError(_)
            | EnumError::SerializationError(_)
            | EnumError::ConfigError { .. }
            | EnumError::ConfigValidationError { .. }
            | EnumError::InvalidConfigValueError { .. }
            | EnumError::MissingConfigError { .. } => ErrorSeverity::High,
            EnumError::TaskError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, EnumError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            e if e.is_broken_pipe() => "Output was closed by the reading process; nothing to do",
            EnumError::IoError(_) => "Check that the output path is writable and the disk has space",
            EnumError::SerializationError(_) => "Check the metrics file path and retry",
            EnumError::ConfigError { .. } | EnumError::ConfigValidationError { .. } => {
                "Check the configuration file syntax"
            }
            EnumError::InvalidConfigValueError { .. } => "Correct the reported value and retry",
            EnumError::MissingConfigError { .. } => "Add the missing field to the configuration",
            EnumError::OutputLimitExceeded { .. } => {
                "Lower --depth or raise --max-lines if the output volume is intended"
            }
            EnumError::TaskError { .. } => "Re-run with --verbose and report the failure",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EnumError::IoError(e) => format!("Could not write output: {}", e),
            EnumError::SerializationError(e) => format!("Could not write metrics: {}", e),
            EnumError::ConfigError { message } => format!("Configuration problem: {}", message),
            EnumError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            EnumError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for {}: {}", value, field, reason),
            EnumError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
            EnumError::OutputLimitExceeded {
                depth,
                expected,
                limit,
            } => format!(
                "Depth {} produces {} lines, which exceeds the limit of {}",
                depth, expected, limit
            ),
            EnumError::TaskError { message } => format!("Enumeration aborted: {}", message),
        }
    }

    /// Exit code the binaries use for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, EnumError>;
