// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Surface(SurfaceError),
}

/// Reasons a preview surface navigation did not complete.
///
/// These never surface as failures to the user: the component collapses
/// them into the `error` signal and dismisses the loading overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The preview address could not be turned into an absolute URL.
    InvalidUrl(String),

    /// Connection, TLS or protocol failure.
    Request(String),

    /// The server answered with a non-success status code.
    Status(u16),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::InvalidUrl(url) => write!(f, "Invalid preview URL: {}", url),
            SurfaceError::Request(msg) => write!(f, "Request failed: {}", msg),
            SurfaceError::Status(code) => write!(f, "HTTP status {}", code),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Surface(e) => write!(f, "Surface Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SurfaceError> for Error {
    fn from(err: SurfaceError) -> Self {
        Error::Surface(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::Surface(SurfaceError::Status(status.as_u16())),
            None => Error::Surface(SurfaceError::Request(err.to_string())),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
