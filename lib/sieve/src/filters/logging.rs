//! Pass logging filter.
//!
//! This filter logs the request on its way in and the response on its way out
//! using the `tracing` crate. It never rewrites either message.

use std::time::Instant;

use tracing::{Level, debug, info, span, warn};

use crate::{Filter, FilterChain, Request, Response, Result};

/// Log level for the logging filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Log at debug level (full request/response text).
    Debug,
    /// Log at info level (summary only).
    #[default]
    Info,
}

/// Filter that logs the downstream part of the chain.
///
/// Register it first to observe the whole pass, or between two filters to
/// observe only what follows it.
///
/// # Example
///
/// ```
/// use sieve::filters::{HtmlFilter, LoggingFilter};
/// use sieve::FilterChain;
///
/// let chain = FilterChain::new()
///     .with_filter(LoggingFilter::new())
///     .with_filter(HtmlFilter::new());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingFilter {
    level: LogLevel,
}

impl LoggingFilter {
    /// Create a new logging filter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logging filter that logs at debug level.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            level: LogLevel::Debug,
        }
    }

    /// Configured log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl Filter for LoggingFilter {
    fn process(
        &self,
        request: &mut Request,
        response: &mut Response,
        chain: &FilterChain,
    ) -> Result<()> {
        let span = span!(Level::INFO, "sieve_pass", cursor = chain.cursor(), len = chain.len());
        let _entered = span.enter();
        let start = Instant::now();

        match self.level {
            LogLevel::Debug => {
                debug!(request = %request, response = %response, "entering chain");
            }
            LogLevel::Info => {
                info!(request_len = request.text().len(), "entering chain");
            }
        }

        let result = chain.advance(request, response, chain);

        // Saturating conversion to u64 (truncates after ~584 million years)
        let elapsed_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);

        match &result {
            Ok(()) => match self.level {
                LogLevel::Debug => {
                    debug!(request = %request, response = %response, elapsed_us, "chain completed");
                }
                LogLevel::Info => {
                    info!(
                        request_len = request.text().len(),
                        response_len = response.text().len(),
                        elapsed_us,
                        "chain completed"
                    );
                }
            },
            Err(err) => {
                warn!(error = %err, elapsed_us, "chain failed");
            }
        }

        result
    }

    fn name(&self) -> &str {
        "LoggingFilter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::filters::FaceFilter;

    #[test]
    fn logging_filter_default() {
        let filter = LoggingFilter::new();
        assert_eq!(filter.level(), LogLevel::Info);
    }

    #[test]
    fn logging_filter_debug() {
        let filter = LoggingFilter::debug();
        assert_eq!(filter.level(), LogLevel::Debug);
    }

    #[test]
    fn logging_is_transparent() {
        let chain = FilterChain::new()
            .with_filter(LoggingFilter::debug())
            .with_filter(FaceFilter::new());

        let mut request = Request::new(":):");
        let mut response = Response::new("r:");
        chain.run(&mut request, &mut response).expect("run");

        assert_eq!(request.text(), "^V^----FaceFilter()");
        assert_eq!(response.text(), "r:---FaceFilter()");
    }

    #[test]
    fn logging_propagates_errors() {
        let chain = FilterChain::new()
            .with_filter(LoggingFilter::new())
            .with_filter(crate::filter_fn(|_, _, _| Err(Error::filter("x", "boom"))));

        let mut request = Request::default();
        let mut response = Response::default();
        let err = chain.run(&mut request, &mut response).expect_err("should fail");

        assert_eq!(err.filter_name(), Some("x"));
    }
}
