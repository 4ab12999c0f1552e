//! The filter capability.
//!
//! A [`Filter`] is one step of a [`FilterChain`]. Each step has a "before" hook
//! and an "after" hook around the rest of the chain:
//!
//! ```text
//! process(request, response, chain)
//!   ├─ rewrite request            (forward, registration order)
//!   ├─ chain.advance(...)         (runs every downstream filter)
//!   └─ annotate response          (backward, reverse registration order)
//! ```
//!
//! Skipping the `advance` call short-circuits the chain: no downstream filter
//! runs.

use std::fmt;

use crate::{FilterChain, Request, Response, Result};

/// A single step of a [`FilterChain`].
///
/// # Example
///
/// ```
/// use sieve_core::{Filter, FilterChain, Request, Response, Result};
///
/// struct Shout;
///
/// impl Filter for Shout {
///     fn process(
///         &self,
///         request: &mut Request,
///         response: &mut Response,
///         chain: &FilterChain,
///     ) -> Result<()> {
///         request.append("!");
///         chain.advance(request, response, chain)?;
///         response.append("---Shout()");
///         Ok(())
///     }
/// }
/// ```
pub trait Filter {
    /// Process the request, continue the chain, then annotate the response.
    ///
    /// `chain` is the continuation handle: call
    /// `chain.advance(request, response, chain)` to run the next step.
    fn process(
        &self,
        request: &mut Request,
        response: &mut Response,
        chain: &FilterChain,
    ) -> Result<()>;

    /// Name used in diagnostics and errors.
    fn name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

impl<F: Filter + ?Sized> Filter for Box<F> {
    fn process(
        &self,
        request: &mut Request,
        response: &mut Response,
        chain: &FilterChain,
    ) -> Result<()> {
        (**self).process(request, response, chain)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Filter built from a closure, see [`filter_fn`].
pub struct FilterFn<F> {
    name: String,
    f: F,
}

/// Create a [`Filter`] from a closure.
///
/// The closure receives the same arguments as [`Filter::process`].
///
/// # Example
///
/// ```
/// use sieve_core::filter_fn;
///
/// // Short-circuits: never calls `advance`
/// let stop = filter_fn(|_request, response, _chain| {
///     response.append("---stopped");
///     Ok(())
/// });
/// ```
pub fn filter_fn<F>(f: F) -> FilterFn<F>
where
    F: Fn(&mut Request, &mut Response, &FilterChain) -> Result<()>,
{
    FilterFn {
        name: "filter_fn".to_string(),
        f,
    }
}

impl<F> FilterFn<F> {
    /// Sets the name reported by [`Filter::name`].
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<F> fmt::Debug for FilterFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterFn").field("name", &self.name).finish_non_exhaustive()
    }
}

impl<F> Filter for FilterFn<F>
where
    F: Fn(&mut Request, &mut Response, &FilterChain) -> Result<()>,
{
    fn process(
        &self,
        request: &mut Request,
        response: &mut Response,
        chain: &FilterChain,
    ) -> Result<()> {
        (self.f)(request, response, chain)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl Filter for Plain {
        fn process(
            &self,
            request: &mut Request,
            response: &mut Response,
            chain: &FilterChain,
        ) -> Result<()> {
            chain.advance(request, response, chain)
        }
    }

    #[test]
    fn default_name_is_type_name() {
        assert_eq!(Plain.name(), "Plain");
        assert_eq!(Box::new(Plain).name(), "Plain");
    }

    #[test]
    fn filter_fn_name() {
        let f = filter_fn(|_, _, _| Ok(()));
        assert_eq!(f.name(), "filter_fn");

        let f = f.named("noop");
        assert_eq!(f.name(), "noop");
        assert_eq!(format!("{f:?}"), r#"FilterFn { name: "noop", .. }"#);
    }
}
