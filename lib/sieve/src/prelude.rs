//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types, functions, and filters
//! for easy glob importing:
//!
//! ```ignore
//! use sieve::prelude::*;
//! ```

pub use crate::filters::{
    FaceFilter, GuardFilter, HtmlFilter, SensitiveFilter, Substitution, SubstitutionFilter,
};
pub use crate::{
    ChainConfig, Error, Filter, FilterChain, FilterConfig, Request, Response, Result, filter_fn,
};
