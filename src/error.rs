//! Error types for keyword extraction.
//!
//! Problems in grammar documents are never errors; they are reported as
//! [`Diagnostic`](crate::diagnostics::Diagnostic)s. These are the failures a
//! caller has to handle.

use thiserror::Error;

use crate::base::RuleName;

/// Error returned by a [`DocumentProvider`](crate::extract::DocumentProvider).
pub type FetchError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that abort an extraction.
#[derive(Debug, Error)]
pub enum Error {
    /// A requested selector rule has no definition.
    #[error("Unknown selector rule: {0}")]
    UnknownSelector(RuleName),

    /// The document provider failed.
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// A markup source was requested but no markup parser is installed.
    #[error("No markup parser configured (selectors: {0})")]
    MissingMarkupParser(String),

    /// The markup parser rejected a document.
    #[error("Markup error: {0}")]
    Markup(String),

    /// A configured regular expression does not compile.
    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration could not be deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// IO error while reading configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a fetch error.
    pub fn fetch(url: impl Into<String>, source: impl Into<FetchError>) -> Self {
        Self::Fetch {
            url: url.into(),
            source: source.into(),
        }
    }

    /// Create a markup error.
    pub fn markup(message: impl Into<String>) -> Self {
        Self::Markup(message.into())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
