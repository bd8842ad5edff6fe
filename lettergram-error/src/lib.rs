#![forbid(unsafe_code)]
#![deny(
    dead_code,
    unused_imports,
    unused_mut,
    missing_docs,
    missing_debug_implementations
)]
//! internal library to provide structures for errors in lettergram.
//!
//! # Examples
//! ```rust
//! use lettergram_error::{Error, ErrorType, IoError, Result};
//!
//! fn read() -> Result<()> {
//!     Err(Error::new(
//!         ErrorType::InputOutput(IoError::ReadingError),
//!         None,
//!         Some("stdin closed unexpectedly".to_string()),
//!     )
//!     .into())
//! }
//!
//! assert!(read().is_err());
//! ```

use std::error::Error as StdError;
use std::fmt;

/// Boxed error to bypass specific [Error](StdError).
pub type BError = Box<dyn StdError + Send + Sync>;
/// anyhow-like error handler.
pub type Result<T> = core::result::Result<T, BError>;

/// The struct that represents an error
#[derive(Debug)]
pub struct Error {
    /// The error type.
    pub etype: ErrorType,
    /// The cause of this error.
    pub cause: Option<BError>,
    /// Explains the context in which the error occurs.
    pub context: Option<String>,
}

impl Error {
    /// Throw an [`Error`].
    pub fn new(
        etype: ErrorType,
        cause: Option<BError>,
        context: Option<String>,
    ) -> Self {
        Error {
            etype,
            cause,
            context,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.etype)?;
        if let Some(context) = &self.context {
            write!(f, " ({})", context)?;
        }
        if let Some(cause) = &self.cause {
            write!(f, ": {}", cause)?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| &**cause as &(dyn StdError + 'static))
    }
}

/// Errors in lettergram.
#[derive(Debug)]
pub enum ErrorType {
    /// IO errors, from the text source or the output sink.
    InputOutput(IoError),
    /// Errors related to the configuration file.
    Config(ConfigError),
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorType::InputOutput(error) => write!(f, "{}", error),
            ErrorType::Config(error) => write!(f, "{}", error),
        }
    }
}
impl StdError for ErrorType {}

/// Errors related to reading the text and writing the report.
#[derive(Debug)]
pub enum IoError {
    /// The text source could not be read.
    ReadingError,
    /// The report could not be written.
    WritingError,
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IoError::ReadingError => write!(f, "Failed to read the input text."),
            IoError::WritingError => write!(f, "Failed to write the histogram."),
        }
    }
}
impl StdError for IoError {}

/// Errors related to the configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file exists but cannot be opened or read.
    Unreadable,
    /// The file is not valid YAML or does not match the expected structure.
    Malformed,
    /// A value is out of its accepted range.
    InvalidValue,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Unreadable => {
                write!(f, "The configuration file cannot be read.")
            },
            ConfigError::Malformed => {
                write!(f, "The configuration file is not valid YAML.")
            },
            ConfigError::InvalidValue => {
                write!(f, "The configuration file contains an invalid value.")
            },
        }
    }
}
impl StdError for ConfigError {}
