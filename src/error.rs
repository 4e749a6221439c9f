// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
}

/// Specific error types for catalog loading issues.
///
/// A failed catalog load is fatal to the playback UI; it is shown to the
/// user as a single message with a manual retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The request never produced a response (DNS, connection, timeout).
    Network(String),

    /// The server answered with a non-success status.
    Status { url: String, status: u16 },

    /// A document was fetched but failed schema validation.
    Schema { document: String, message: String },
}

impl CatalogError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::Network(_) => "error-catalog-network",
            CatalogError::Status { .. } => "error-catalog-status",
            CatalogError::Schema { .. } => "error-catalog-schema",
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(msg) => write!(f, "Network error: {}", msg),
            CatalogError::Status { url, status } => {
                write!(f, "Failed to load {}: HTTP {}", url, status)
            }
            CatalogError::Schema { document, message } => {
                write!(f, "Invalid {} document: {}", document, message)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
        }
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
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

pub type Result<T> = std::result::Result<T, Error>;
