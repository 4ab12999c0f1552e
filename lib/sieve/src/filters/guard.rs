//! Short-circuiting guard filter.
//!
//! [`GuardFilter`] inspects the request before anything downstream sees it.
//! When a blocked term is present it either stops the chain quietly
//! ([`GuardAction::Halt`]) or fails the whole pass ([`GuardAction::Reject`]).

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{Error, Filter, FilterChain, Request, Response, Result};

/// What a [`GuardFilter`] does when it finds a blocked term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuardAction {
    /// Stop the chain, annotate the response, return `Ok`.
    #[default]
    Halt,
    /// Stop the chain and return [`Error::Filter`] to the caller.
    Reject,
}

/// Filter that halts the chain when the request contains a blocked term.
///
/// Requests without blocked terms pass through untouched, and the response is
/// not annotated.
///
/// # Example
///
/// ```
/// use sieve::filters::{FaceFilter, GuardFilter};
/// use sieve::{FilterChain, Request, Response};
///
/// let chain = FilterChain::new()
///     .with_filter(GuardFilter::new(["<script>"]))
///     .with_filter(FaceFilter::new());
///
/// let mut request = Request::new(":): <script>");
/// let mut response = Response::new("response:");
/// chain.run(&mut request, &mut response)?;
///
/// // FaceFilter never ran
/// assert_eq!(request.text(), ":): <script>");
/// assert_eq!(response.text(), "response:---GuardFilter(<script>)");
/// # Ok::<(), sieve::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct GuardFilter {
    blocked: Arc<[String]>,
    action: GuardAction,
}

impl GuardFilter {
    /// Create a guard halting on any of the given terms.
    pub fn new<I, S>(blocked: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            blocked: blocked.into_iter().map(Into::into).collect(),
            action: GuardAction::Halt,
        }
    }

    /// Create a guard that fails the pass on any of the given terms.
    pub fn rejecting<I, S>(blocked: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(blocked).with_action(GuardAction::Reject)
    }

    /// Sets the action taken on a match.
    #[must_use]
    pub fn with_action(mut self, action: GuardAction) -> Self {
        self.action = action;
        self
    }

    /// Blocked terms.
    #[must_use]
    pub fn blocked(&self) -> &[String] {
        &self.blocked
    }

    /// Action taken on a match.
    #[must_use]
    pub const fn action(&self) -> GuardAction {
        self.action
    }

    fn find_blocked(&self, text: &str) -> Option<&str> {
        self.blocked
            .iter()
            .map(String::as_str)
            .find(|term| !term.is_empty() && text.contains(term))
    }
}

impl Filter for GuardFilter {
    fn process(
        &self,
        request: &mut Request,
        response: &mut Response,
        chain: &FilterChain,
    ) -> Result<()> {
        let Some(term) = self.find_blocked(request.text()) else {
            return chain.advance(request, response, chain);
        };

        match self.action {
            GuardAction::Halt => {
                debug!(term, "blocked term found, halting chain");
                response.append(&format!("---GuardFilter({term})"));
                Ok(())
            }
            GuardAction::Reject => {
                warn!(term, "blocked term found, rejecting request");
                Err(Error::filter(self.name(), format!("blocked term '{term}'")))
            }
        }
    }

    fn name(&self) -> &str {
        "GuardFilter"
    }
}
