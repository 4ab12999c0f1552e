//! Chain-of-responsibility text filters.
//!
//! Register filters on a [`FilterChain`] and drive a [`Request`]/[`Response`]
//! pair through them: each filter rewrites the request on the way in and
//! annotates the response on the way out.
//!
//! # Example
//!
//! ```
//! use sieve::prelude::*;
//!
//! let chain = ChainConfig::reference().build_chain()?;
//!
//! let mut request = Request::new(":):,<script>,敏感,被就业,网络授课");
//! let mut response = Response::new("response:");
//! chain.run(&mut request, &mut response)?;
//!
//! assert_eq!(
//!     request.text(),
//!     "^V^,[script],,就业,网络授课----HTMLFilter() ---sensitiveFilter()----FaceFilter()"
//! );
//! assert_eq!(
//!     response.text(),
//!     "response:---FaceFilter()---sensitiveFilter()---HTMLFilter()"
//! );
//! # Ok::<(), sieve::Error>(())
//! ```
//!
//! See the [tutorial][_tutorial] for a complete guide.

pub mod _tutorial;
mod config;
pub mod filters;
pub mod prelude;

pub use config::{ChainConfig, ChainConfigBuilder, FilterConfig};

// Re-export core types
pub use sieve_core::{
    Error, Filter, FilterChain, FilterFn, Request, Response, Result, filter_fn, from_json,
};
