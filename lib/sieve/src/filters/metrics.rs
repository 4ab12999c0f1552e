//! Metrics filter using the metrics crate facade.
//!
//! This filter records pass metrics using the `metrics` crate, which allows
//! integration with various metrics backends (Prometheus, `StatsD`, etc.).

use std::time::Instant;

use crate::{Filter, FilterChain, Request, Response, Result};

/// Labels used for metrics.
const LABEL_OUTCOME: &str = "outcome";

/// Metric names.
const METRIC_PASSES_TOTAL: &str = "sieve_passes_total";
const METRIC_PASS_DURATION: &str = "sieve_pass_duration_seconds";
const METRIC_PASSES_IN_FLIGHT: &str = "sieve_passes_in_flight";

/// Filter that records chain metrics.
///
/// Records the following metrics:
/// - `sieve_passes_total` (counter): Downstream passes, labeled by outcome (`ok` or `error`)
/// - `sieve_pass_duration_seconds` (histogram): Downstream pass duration in seconds
/// - `sieve_passes_in_flight` (gauge): Passes currently running below this filter
///
/// # Example
///
/// ```ignore
/// use sieve::filters::MetricsFilter;
///
/// let chain = FilterChain::new().with_filter(MetricsFilter::new());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsFilter {
    _private: (),
}

impl MetricsFilter {
    /// Create a new metrics filter.
    #[must_use]
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Filter for MetricsFilter {
    fn process(
        &self,
        request: &mut Request,
        response: &mut Response,
        chain: &FilterChain,
    ) -> Result<()> {
        let start = Instant::now();
        metrics::gauge!(METRIC_PASSES_IN_FLIGHT).increment(1.0);

        let result = chain.advance(request, response, chain);

        metrics::gauge!(METRIC_PASSES_IN_FLIGHT).decrement(1.0);
        let outcome = if result.is_ok() { "ok" } else { "error" };
        metrics::counter!(METRIC_PASSES_TOTAL, LABEL_OUTCOME => outcome).increment(1);
        metrics::histogram!(METRIC_PASS_DURATION).record(start.elapsed().as_secs_f64());

        result
    }

    fn name(&self) -> &str {
        "MetricsFilter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::HtmlFilter;

    #[test]
    fn metrics_filter_is_transparent() {
        // No recorder installed: the facade is a no-op
        let chain = FilterChain::new()
            .with_filter(MetricsFilter::new())
            .with_filter(HtmlFilter::new());

        let mut request = Request::new("<i>");
        let mut response = Response::new("r:");
        chain.run(&mut request, &mut response).expect("run");

        assert_eq!(request.text(), "[i]----HTMLFilter()");
        assert_eq!(response.text(), "r:---HTMLFilter()");
    }
}
