use thiserror::Error;

/// Shown for every failure that is not an application error.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

#[derive(Error, Debug)]
pub enum StudyCafeError {
    /// Business-rule or input failure; the message goes to the user as is.
    #[error("{message}")]
    Application { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid catalog entry {entry}: {reason}")]
    InvalidCatalogEntry { entry: usize, reason: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Application,
    Unrecognized,
}

impl StudyCafeError {
    pub fn application(message: impl Into<String>) -> Self {
        StudyCafeError::Application {
            message: message.into(),
        }
    }

    pub fn invalid_input() -> Self {
        Self::application("Invalid input.")
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            StudyCafeError::Application { .. } => ErrorCategory::Application,
            _ => ErrorCategory::Unrecognized,
        }
    }

    pub fn is_application(&self) -> bool {
        self.category() == ErrorCategory::Application
    }

    /// Text that may be put in front of the customer. Anything not modeled
    /// as an application error collapses into the generic message.
    pub fn user_friendly_message(&self) -> &str {
        match self {
            StudyCafeError::Application { message } => message,
            _ => UNKNOWN_ERROR_MESSAGE,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StudyCafeError::Application { .. } => "Start a new order and pick one of the listed options",
            StudyCafeError::IoError(_) => "Check that the catalog files exist and are readable",
            StudyCafeError::CsvError(_) => "Check the catalog rows: TYPE,duration,price[,discount_rate]",
            StudyCafeError::InvalidCatalogEntry { .. } => {
                "Durations start at 1 and discount rates lie between 0.0 and 1.0"
            }
            StudyCafeError::TomlParseError(_) => "Check the syntax of the TOML configuration file",
            StudyCafeError::ConfigError { .. }
            | StudyCafeError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
            StudyCafeError::Internal { .. } => "Run again with --verbose and report the log",
        }
    }
}

pub type Result<T> = std::result::Result<T, StudyCafeError>;
