use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Severity of a console dialog entry.
pub enum LogLevel {
    /// Verbose detail.
    Debug,
    /// Plain output.
    Log,
    /// Informational.
    Info,
    /// Recoverable problem.
    Warn,
    /// Failure.
    Error,
}

impl LogLevel {
    /// Stable token, also used as the entry's CSS class.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Log => "log",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConsoleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "log" => Ok(Self::Log),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ConsoleError::UnknownLevel(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Rejected console input.
pub enum ConsoleError {
    /// Level token is not one of `debug`, `log`, `info`, `warn`, `error`.
    #[error("unknown console level `{0}`")]
    UnknownLevel(String),
    /// Writing the entry to the console dialog failed.
    #[error(transparent)]
    Dialog(#[from] super::DialogError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One line in the console dialog.
pub struct ConsoleEntry {
    /// Severity.
    pub level: LogLevel,
    /// Text.
    pub message: String,
}

impl ConsoleEntry {
    /// Builds an entry from a raw level token.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::UnknownLevel`] for unrecognized tokens.
    pub fn parse(level: &str, message: impl Into<String>) -> Result<Self, ConsoleError> {
        Ok(Self {
            level: level.parse()?,
            message: message.into(),
        })
    }
}
