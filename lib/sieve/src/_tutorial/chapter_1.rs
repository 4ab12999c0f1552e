//! # Chapter 1: Writing Filters
//!
//! Implement [`Filter`](crate::Filter) for your own types.
//!
//! ## The Shape of a Filter
//!
//! ```
//! use sieve::{Filter, FilterChain, Request, Response, Result};
//!
//! struct Trim;
//!
//! impl Filter for Trim {
//!     fn process(
//!         &self,
//!         request: &mut Request,
//!         response: &mut Response,
//!         chain: &FilterChain,
//!     ) -> Result<()> {
//!         // before: rewrite the request
//!         let trimmed = request.text().trim().to_string();
//!         request.set_text(trimmed);
//!
//!         // continue: run every downstream filter
//!         chain.advance(request, response, chain)?;
//!
//!         // after: annotate the response
//!         response.append("---Trim()");
//!         Ok(())
//!     }
//! }
//! ```
//!
//! ## Closures
//!
//! For one-off steps, [`filter_fn`](crate::filter_fn) avoids the boilerplate:
//!
//! ```
//! use sieve::filter_fn;
//!
//! let lower = filter_fn(|request, response, chain| {
//!     request.set_text(request.text().to_lowercase());
//!     chain.advance(request, response, chain)
//! })
//! .named("lower");
//! ```
//!
//! ## Short-Circuits
//!
//! A filter that does not call `chain.advance` stops the chain: no downstream
//! filter touches the request or the response.
//! [`GuardFilter`](crate::filters::GuardFilter) does exactly this when it
//! finds a blocked term.
//!
//! ## Errors
//!
//! Return [`Error::filter`](crate::Error::filter) to fail the pass. The error
//! travels back through every upstream `?`, so upstream response hooks are
//! skipped and the caller of [`FilterChain::run`](crate::FilterChain::run)
//! receives it unchanged:
//!
//! ```
//! use sieve::prelude::*;
//!
//! let chain = FilterChain::new()
//!     .with_filter(HtmlFilter::new())
//!     .with_filter(filter_fn(|_, _, _| Err(Error::filter("strict", "nope"))));
//!
//! let mut request = Request::new("<x>");
//! let mut response = Response::new("response:");
//! let err = chain.run(&mut request, &mut response).unwrap_err();
//!
//! assert_eq!(err.filter_name(), Some("strict"));
//! assert_eq!(response.text(), "response:");
//! ```
//!
//! ## Next Steps
//!
//! Continue to [Chapter 2: Configuration & Observability][super::chapter_2].
