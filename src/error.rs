use std::fmt;

/// Errors reported by window and monitor operations
#[derive(Debug)]
pub enum WindowError {
    /// The window could not be operated on right now (closed, hung, or
    /// refused by the window manager)
    Unavailable { reason: String },
    /// The OS refused the operation for this process
    PermissionDenied(String),
    /// A resize was requested with a size the OS cannot apply
    InvalidGeometry { width: i32, height: i32 },
    /// No monitor exists at the requested index
    MonitorNotFound { index: usize, count: usize },
    /// Raw failure from a platform call
    Platform { op: &'static str, code: u32 },
    /// Configuration loading or validation errors
    Config(String),
}

impl WindowError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        WindowError::Unavailable {
            reason: reason.into(),
        }
    }

    /// True for the transient failure kind that `activate` ignores
    pub fn is_unavailable(&self) -> bool {
        matches!(self, WindowError::Unavailable { .. })
    }
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::Unavailable { reason } => write!(f, "Window unavailable: {}", reason),
            WindowError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            WindowError::InvalidGeometry { width, height } => {
                write!(f, "Invalid window geometry {}x{}", width, height)
            }
            WindowError::MonitorNotFound { index, count } => {
                write!(
                    f,
                    "Monitor {} not found - {} monitor(s) available",
                    index, count
                )
            }
            WindowError::Platform { op, code } => {
                write!(f, "{} failed with error: {}", op, code)
            }
            WindowError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

impl From<std::io::Error> for WindowError {
    fn from(err: std::io::Error) -> Self {
        WindowError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for WindowError {
    fn from(err: serde_json::Error) -> Self {
        WindowError::Config(err.to_string())
    }
}

/// Result type alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;
