//! Error types for sieve.

use derive_more::{Display, Error};

/// Main error type for sieve operations.
///
/// Filters are fail-fast: the first [`Error::Filter`] returned by a step
/// unwinds the whole chain and reaches the caller of [`crate::FilterChain::run`].
#[derive(Debug, Display, Error)]
pub enum Error {
    /// A filter refused or failed to process the request.
    #[display("filter '{name}' failed: {message}")]
    Filter {
        /// Name of the failing filter.
        name: String,
        /// Error message.
        message: String,
    },

    /// A substitution rule cannot be applied.
    #[display("invalid rule: {_0}")]
    InvalidRule(#[error(not(source))] String),

    /// Configuration could not be deserialized.
    #[display("invalid configuration at '{path}': {message}")]
    Config {
        /// Path to the offending field (e.g., "filters[2].rules[0].pattern").
        path: String,
        /// Error message.
        message: String,
    },
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a filter failure.
    #[must_use]
    pub fn filter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Filter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an invalid rule error.
    #[must_use]
    pub fn invalid_rule(message: impl Into<String>) -> Self {
        Self::InvalidRule(message.into())
    }

    /// Create a configuration error with path context.
    #[must_use]
    pub fn config(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if a filter failed during a pass.
    #[must_use]
    pub const fn is_filter(&self) -> bool {
        matches!(self, Self::Filter { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::InvalidRule(_))
    }

    /// Returns the name of the failing filter, if any.
    #[must_use]
    pub fn filter_name(&self) -> Option<&str> {
        match self {
            Self::Filter { name, .. } => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::filter("profanity", "blocked term found");
        assert_eq!(err.to_string(), "filter 'profanity' failed: blocked term found");

        let err = Error::invalid_rule("empty pattern");
        assert_eq!(err.to_string(), "invalid rule: empty pattern");

        let err = Error::config("filters[0].kind", "unknown variant `xml`");
        assert_eq!(
            err.to_string(),
            "invalid configuration at 'filters[0].kind': unknown variant `xml`"
        );
    }

    #[test]
    fn error_predicates() {
        let err = Error::filter("html", "boom");
        assert!(err.is_filter());
        assert!(!err.is_config());
        assert_eq!(err.filter_name(), Some("html"));

        let err = Error::invalid_rule("empty pattern");
        assert!(!err.is_filter());
        assert!(err.is_config());
        assert_eq!(err.filter_name(), None);

        assert!(Error::config(".", "eof").is_config());
    }
}
