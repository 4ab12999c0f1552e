//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use sieve_core::prelude::*;
//! ```

pub use crate::{Error, Filter, FilterChain, FilterFn, Request, Response, Result, filter_fn};
