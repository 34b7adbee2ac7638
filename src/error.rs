use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Unknown time zone: {0}")]
    InvalidZone(String),

    #[error("Invalid time '{0}': expected HH:MM")]
    InvalidTime(String),

    #[error("Avatar error: {0}")]
    Avatar(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type DashboardResult<T> = Result<T, DashboardError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> DashboardResult<T>;
    fn with_context<F>(self, f: F) -> DashboardResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> DashboardResult<T> {
        self.map_err(|e| DashboardError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> DashboardResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| DashboardError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> DashboardResult<T> {
        self.ok_or_else(|| DashboardError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> DashboardResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| DashboardError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! dashboard_error {
    ($error_type:ident, $msg:expr) => {
        DashboardError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        DashboardError::$error_type(format!($fmt, $($arg)*))
    };
}
