use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("DOMAIN_NAME environment variable not set and not provided as argument.")]
    MissingDomainError,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Host rule '{rule}' could not be used: {reason}")]
    HostRuleError { rule: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Logged and skipped, the run continues.
    Recoverable,
    /// Bad input from the operator.
    Config,
    /// Writing or reading failed.
    System,
}

impl GenError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GenError::HostRuleError { .. } | GenError::YamlError(_) => ErrorSeverity::Recoverable,
            GenError::MissingDomainError
            | GenError::ConfigError { .. }
            | GenError::ValidationError { .. }
            | GenError::InvalidConfigValueError { .. }
            | GenError::TomlError(_) => ErrorSeverity::Config,
            GenError::IoError(_) => ErrorSeverity::System,
        }
    }

    /// Process exit code for a fatal error. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Config | ErrorSeverity::Recoverable => 1,
            ErrorSeverity::System => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GenError::MissingDomainError => format!("Error: {}", self),
            GenError::IoError(e) => format!("Error: could not write output: {}", e),
            other => format!("Error: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GenError::MissingDomainError => {
                "Export DOMAIN_NAME or pass the domain as the first argument"
            }
            GenError::IoError(_) => "Check that the output directory is writable",
            GenError::TomlError(_) | GenError::ConfigError { .. } => {
                "Check the settings file syntax and referenced environment variables"
            }
            GenError::ValidationError { .. } | GenError::InvalidConfigValueError { .. } => {
                "Fix the offending value in the settings file"
            }
            GenError::YamlError(_) | GenError::HostRuleError { .. } => {
                "Check the compose file labels"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
