//! Sensitive-term filter.

use crate::{Filter, FilterChain, Request, Response, Result};

use super::SubstitutionFilter;

/// Softens `被就业` to `就业`, then deletes `敏感`.
///
/// Appends ` ---sensitiveFilter()` to the request and `---sensitiveFilter()`
/// to the response.
#[derive(Debug, Clone)]
pub struct SensitiveFilter {
    inner: SubstitutionFilter,
}

impl SensitiveFilter {
    /// Create the filter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: SubstitutionFilter::preset(
                "sensitiveFilter",
                &[("被就业", "就业"), ("敏感", "")],
                " ---sensitiveFilter()",
                "---sensitiveFilter()",
            ),
        }
    }
}

impl Default for SensitiveFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl From<SensitiveFilter> for SubstitutionFilter {
    fn from(filter: SensitiveFilter) -> Self {
        filter.inner
    }
}

impl Filter for SensitiveFilter {
    fn process(
        &self,
        request: &mut Request,
        response: &mut Response,
        chain: &FilterChain,
    ) -> Result<()> {
        self.inner.process(request, response, chain)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
