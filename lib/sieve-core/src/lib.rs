//! Core types and traits for the sieve filter chain.
//!
//! This crate provides the foundational types used by sieve:
//! - [`Request`] - forward-flowing text, rewritten by each filter in turn
//! - [`Response`] - backward-flowing text, annotated on the way back out
//! - [`Filter`] - the single capability every chain step implements
//! - [`FilterChain`] - ordered executor of filters, itself a [`Filter`]
//! - [`FilterFn`] and [`filter_fn`] - closure adapter for ad-hoc filters
//! - [`Error`] and [`Result`] - Error handling
//! - [`from_json`] - JSON deserialization with path-aware errors
//!
//! # Example
//!
//! ```
//! use sieve_core::{FilterChain, Request, Response, filter_fn};
//!
//! let mut chain = FilterChain::new();
//! chain.add_filter(filter_fn(|request, response, chain| {
//!     request.set_text(request.text().to_uppercase());
//!     chain.advance(request, response, chain)?;
//!     response.append("-upper");
//!     Ok(())
//! }));
//!
//! let mut request = Request::new("hello");
//! let mut response = Response::new("response:");
//! chain.run(&mut request, &mut response)?;
//!
//! assert_eq!(request.text(), "HELLO");
//! assert_eq!(response.text(), "response:-upper");
//! # Ok::<(), sieve_core::Error>(())
//! ```

mod chain;
mod error;
mod filter;
mod json;
mod message;
pub mod prelude;

pub use chain::FilterChain;
pub use error::{Error, Result};
pub use filter::{Filter, FilterFn, filter_fn};
pub use json::from_json;
pub use message::{Request, Response};
