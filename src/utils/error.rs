use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelocateError {
    #[error("No such file or directory: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Destination already exists: {}", .path.display())]
    DestinationCollision { path: PathBuf },

    #[error("Move failed at {}: {source}", .path.display())]
    MoveFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, RelocateError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Source,
    Destination,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RelocateError {
    /// 將 `io::Error` 依照種類對應到錯誤分類，並附上出錯的路徑
    pub fn from_io(path: impl AsRef<Path>, err: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::AlreadyExists => Self::DestinationCollision { path },
            _ => Self::Io { path, source: err },
        }
    }

    /// Same as `from_io`, for failures while moving a single entry. A path whose
    /// parent component is a regular file does not exist either.
    pub fn from_move_io(path: impl AsRef<Path>, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotADirectory => Self::NotFound {
                path: path.as_ref().to_path_buf(),
            },
            _ => match Self::from_io(path, err) {
                Self::Io { path, source } => Self::MoveFailed { path, source },
                other => other,
            },
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::Source,
            Self::DestinationCollision { .. } | Self::MoveFailed { .. } => {
                ErrorCategory::Destination
            }
            Self::PermissionDenied { .. } | Self::Io { .. } => ErrorCategory::System,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::ValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Source | ErrorCategory::Destination => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::NotFound { path } => format!(
                "Check that '{}' exists. Files moved before the failure are already in the destination",
                path.display()
            ),
            Self::PermissionDenied { path } => format!(
                "Check read/write permissions on '{}' and its parent directory",
                path.display()
            ),
            Self::DestinationCollision { path } => format!(
                "Remove or rename '{}' before running again",
                path.display()
            ),
            Self::MoveFailed { path, .. } => format!(
                "Inspect '{}'; entries before it were already moved",
                path.display()
            ),
            Self::Io { .. } => "Check disk space and that the filesystem is mounted read-write".to_string(),
            Self::ConfigError { .. } => "Check the TOML job file syntax".to_string(),
            Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}'", field)
            }
            Self::MissingConfigError { field } => {
                format!("Provide '{}' on the command line or in the job file", field)
            }
            Self::ValidationError { .. } => "Run with --help to see valid arguments".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NotFound { path } => format!("Not found: {}", path.display()),
            Self::PermissionDenied { path } => {
                format!("Not allowed to access {}", path.display())
            }
            Self::DestinationCollision { path } => {
                format!("Refusing to overwrite existing {}", path.display())
            }
            Self::MoveFailed { path, source } => {
                format!("Could not move {}: {}", path.display(), source)
            }
            Self::Io { path, source } => {
                format!("Filesystem error on {}: {}", path.display(), source)
            }
            other => other.to_string(),
        }
    }
}
