//! Ordered filter executor.
//!
//! A [`FilterChain`] owns its filters and a cursor pointing at the next filter
//! to dispatch. The chain is itself a [`Filter`], so the same value is both the
//! thing being run and the continuation handed to every step.
//!
//! # Cursor
//!
//! For a chain of `N` filters the cursor moves `0 → 1 → … → N`, one step per
//! [`FilterChain::advance`] call. Once it reaches `N` the chain is exhausted
//! and `advance` is a no-op until [`FilterChain::reset`] is called.

use std::cell::Cell;
use std::fmt;

use tracing::{debug, trace};

use crate::{Filter, Request, Response, Result};

/// Ordered sequence of filters plus a dispatch cursor.
///
/// # Example
///
/// ```
/// use sieve_core::{FilterChain, Request, Response, filter_fn};
///
/// let tag = |label: &'static str| {
///     filter_fn(move |request, response, chain| {
///         request.append(label);
///         chain.advance(request, response, chain)?;
///         response.append(label);
///         Ok(())
///     })
/// };
///
/// let chain = FilterChain::new().with_filter(tag("a")).with_filter(tag("b"));
///
/// let mut request = Request::new(">");
/// let mut response = Response::new("<");
/// chain.run(&mut request, &mut response)?;
///
/// assert_eq!(request.text(), ">ab");
/// assert_eq!(response.text(), "<ba");
/// # Ok::<(), sieve_core::Error>(())
/// ```
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
    cursor: Cell<usize>,
}

impl FilterChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter; registration order is execution order.
    ///
    /// Returns the chain for fluent registration. The cursor is not affected.
    pub fn add_filter(&mut self, filter: impl Filter + 'static) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Appends a filter, builder style.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.add_filter(filter);
        self
    }

    /// Dispatches the filter under the cursor, handing it `continuation`.
    ///
    /// Does nothing once the chain is exhausted. Otherwise the cursor moves
    /// forward by exactly one before the filter runs, so a filter that calls
    /// back into `continuation.advance` reaches the next step.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a dispatched filter, unchanged.
    pub fn advance(
        &self,
        request: &mut Request,
        response: &mut Response,
        continuation: &FilterChain,
    ) -> Result<()> {
        let cursor = self.cursor.get();
        let Some(filter) = self.filters.get(cursor) else {
            debug!(len = self.filters.len(), "filter chain exhausted");
            return Ok(());
        };

        self.cursor.set(cursor + 1);
        trace!(
            cursor,
            len = self.filters.len(),
            filter = filter.name(),
            "dispatching filter"
        );
        filter.process(request, response, continuation)
    }

    /// Runs a full pass, using the chain as its own continuation.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any filter.
    pub fn run(&self, request: &mut Request, response: &mut Response) -> Result<()> {
        self.advance(request, response, self)
    }

    /// Rewinds the cursor so the chain can drive another pass.
    pub fn reset(&self) {
        self.cursor.set(0);
    }

    /// Index of the next filter to dispatch.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor.get()
    }

    /// Number of registered filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns `true` if no filter is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns `true` once every filter has been dispatched.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor.get() >= self.filters.len()
    }

    /// Names of the registered filters, in execution order.
    #[must_use]
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }
}

impl Filter for FilterChain {
    fn process(
        &self,
        request: &mut Request,
        response: &mut Response,
        chain: &FilterChain,
    ) -> Result<()> {
        self.advance(request, response, chain)
    }
}

impl fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterChain")
            .field("filters", &self.filter_names())
            .field("cursor", &self.cursor.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use assert2::{check, let_assert};

    use super::*;
    use crate::{Error, filter_fn};

    type Log = Rc<RefCell<Vec<String>>>;

    fn tag(label: &'static str) -> impl Filter {
        filter_fn(move |request, response, chain| {
            request.append(&format!("+{label}"));
            chain.advance(request, response, chain)?;
            response.append(&format!("-{label}"));
            Ok(())
        })
        .named(label)
    }

    fn recording(label: &'static str, log: &Log) -> impl Filter + use<> {
        let log = Rc::clone(log);
        filter_fn(move |request, response, chain| {
            log.borrow_mut().push(format!("before {label}"));
            chain.advance(request, response, chain)?;
            log.borrow_mut().push(format!("after {label}"));
            Ok(())
        })
    }

    #[test]
    fn forward_in_order_backward_in_reverse() {
        let chain = FilterChain::new()
            .with_filter(tag("a"))
            .with_filter(tag("b"))
            .with_filter(tag("c"));

        let mut request = Request::new("req");
        let mut response = Response::new("resp");
        chain.run(&mut request, &mut response).expect("run");

        check!(request.text() == "req+a+b+c");
        check!(response.text() == "resp-c-b-a");
        check!(chain.is_exhausted());
    }

    #[test]
    fn empty_chain_is_noop() {
        let chain = FilterChain::new();
        let mut request = Request::new("untouched");
        let mut response = Response::new("seed");

        chain.run(&mut request, &mut response).expect("run");

        check!(chain.is_empty());
        check!(chain.is_exhausted());
        check!(chain.cursor() == 0);
        check!(request.text() == "untouched");
        check!(response.text() == "seed");
    }

    #[test]
    fn cursor_moves_one_step_per_advance() {
        // Filters that never continue, so each advance dispatches exactly one
        let stop = || filter_fn(|request, _, _| {
            request.append(".");
            Ok(())
        });
        let chain = FilterChain::new()
            .with_filter(stop())
            .with_filter(stop())
            .with_filter(stop());

        let mut request = Request::default();
        let mut response = Response::default();
        for expected in 1..=3 {
            chain.advance(&mut request, &mut response, &chain).expect("advance");
            check!(chain.cursor() == expected);
        }
        check!(request.text() == "...");

        // Terminal state is absorbing
        chain.advance(&mut request, &mut response, &chain).expect("advance");
        check!(chain.cursor() == 3);
        check!(request.text() == "...");
    }

    #[test]
    fn exhausted_chain_leaves_messages_unchanged() {
        let chain = FilterChain::new().with_filter(tag("a")).with_filter(tag("b"));
        let mut request = Request::new("");
        let mut response = Response::new("");
        chain.run(&mut request, &mut response).expect("first run");

        let (request_before, response_before) = (request.clone(), response.clone());
        chain.run(&mut request, &mut response).expect("second run");

        check!(request == request_before);
        check!(response == response_before);
    }

    #[test]
    fn reset_allows_another_pass() {
        let chain = FilterChain::new().with_filter(tag("a"));
        let mut request = Request::new("");
        let mut response = Response::new("");

        chain.run(&mut request, &mut response).expect("first run");
        chain.reset();
        check!(chain.cursor() == 0);
        chain.run(&mut request, &mut response).expect("second run");

        check!(request.text() == "+a+a");
        check!(response.text() == "-a-a");
    }

    #[test]
    fn short_circuit_halts_downstream() {
        let log = Log::default();
        let chain = FilterChain::new()
            .with_filter(recording("first", &log))
            .with_filter(filter_fn(|_, response, _| {
                response.append("---blocked");
                Ok(())
            }))
            .with_filter(recording("never", &log));

        let mut request = Request::new("x");
        let mut response = Response::new("r");
        chain.run(&mut request, &mut response).expect("run");

        check!(*log.borrow() == ["before first", "after first"]);
        check!(response.text() == "r---blocked");
        check!(chain.cursor() == 2);
        check!(!chain.is_exhausted());
    }

    #[test]
    fn failure_is_fail_fast() {
        let log = Log::default();
        let chain = FilterChain::new()
            .with_filter(recording("outer", &log))
            .with_filter(tag("mid"))
            .with_filter(filter_fn(|_, _, _| Err(Error::filter("broken", "bad input"))))
            .with_filter(recording("never", &log));

        let mut request = Request::new("x");
        let mut response = Response::new("r");
        let result = chain.run(&mut request, &mut response);

        let_assert!(Err(err) = result);
        check!(err.filter_name() == Some("broken"));
        // Upstream request edits stay, upstream response hooks never run
        check!(request.text() == "x+mid");
        check!(response.text() == "r");
        check!(*log.borrow() == ["before outer"]);
    }

    #[test]
    fn duplicates_allowed() {
        let chain = FilterChain::new().with_filter(tag("a")).with_filter(tag("a"));
        let mut request = Request::new("");
        let mut response = Response::new("");
        chain.run(&mut request, &mut response).expect("run");

        check!(chain.len() == 2);
        check!(request.text() == "+a+a");
    }

    #[test]
    fn add_filter_is_fluent() {
        let mut chain = FilterChain::new();
        chain.add_filter(tag("a")).add_filter(tag("b"));

        check!(chain.filter_names() == ["a", "b"]);
        check!(chain.cursor() == 0);
    }

    #[test]
    fn nested_chain_hands_over_outer_continuation() {
        let inner = FilterChain::new().with_filter(tag("inner"));
        let outer = FilterChain::new()
            .with_filter(tag("a"))
            .with_filter(inner)
            .with_filter(tag("b"));

        let mut request = Request::new("");
        let mut response = Response::new("");
        outer.run(&mut request, &mut response).expect("run");

        check!(request.text() == "+a+inner+b");
        check!(response.text() == "-b-inner-a");
    }

    #[test]
    fn debug_lists_filters_and_cursor() {
        let chain = FilterChain::new().with_filter(tag("a")).with_filter(tag("b"));
        check!(format!("{chain:?}") == r#"FilterChain { filters: ["a", "b"], cursor: 0 }"#);
    }
}
