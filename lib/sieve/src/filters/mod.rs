//! Ready-made filters for sieve chains.
//!
//! Every filter here follows the same shape: rewrite the request, continue the
//! chain, annotate the response. Filters run on the request in registration
//! order and on the response in reverse order.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `filter-logging` | [`LoggingFilter`] (enabled by default) |
//! | `filter-metrics` | [`MetricsFilter`] |
//! | `filter-full` | All filters |
//!
//! # Available Filters
//!
//! ## Text filters
//!
//! - [`SubstitutionFilter`] - Ordered literal [`Substitution`] rules
//! - [`HtmlFilter`] - `<`/`>` to `[`/`]`
//! - [`SensitiveFilter`] - Softens or deletes sensitive terms
//! - [`FaceFilter`] - `:):` to `^V^`
//!
//! ## Control filters
//!
//! - [`GuardFilter`] - Short-circuits the chain on blocked terms
//!
//! ## Observability filters
//!
//! - [`LoggingFilter`] - Logs each pass using `tracing`
//! - [`MetricsFilter`] - Records pass counters and durations
//!
//! # Example
//!
//! ```
//! use sieve::filters::{FaceFilter, HtmlFilter, SensitiveFilter};
//! use sieve::{FilterChain, Request, Response};
//!
//! let mut chain = FilterChain::new();
//! chain
//!     .add_filter(HtmlFilter::new())
//!     .add_filter(SensitiveFilter::new())
//!     .add_filter(FaceFilter::new());
//!
//! let mut request = Request::new("<b>:):</b>");
//! let mut response = Response::new("response:");
//! chain.run(&mut request, &mut response)?;
//!
//! assert_eq!(
//!     response.text(),
//!     "response:---FaceFilter()---sensitiveFilter()---HTMLFilter()"
//! );
//! # Ok::<(), sieve::Error>(())
//! ```

mod face;
mod guard;
mod html;
#[cfg(feature = "filter-logging")]
mod logging;
#[cfg(feature = "filter-metrics")]
mod metrics;
mod sensitive;
mod substitution;

pub use face::FaceFilter;
pub use guard::{GuardAction, GuardFilter};
pub use html::HtmlFilter;
#[cfg(feature = "filter-logging")]
pub use logging::{LogLevel, LoggingFilter};
#[cfg(feature = "filter-metrics")]
pub use metrics::MetricsFilter;
pub use sensitive::SensitiveFilter;
pub use substitution::{Substitution, SubstitutionFilter, SubstitutionFilterBuilder};
