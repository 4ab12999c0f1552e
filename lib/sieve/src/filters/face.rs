//! Emoticon substitution filter.

use crate::{Filter, FilterChain, Request, Response, Result};

use super::SubstitutionFilter;

/// Replaces the `:):` emoticon with `^V^`.
///
/// Appends `----FaceFilter()` to the request and `---FaceFilter()` to the
/// response.
#[derive(Debug, Clone)]
pub struct FaceFilter {
    inner: SubstitutionFilter,
}

impl FaceFilter {
    /// Create the filter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: SubstitutionFilter::preset(
                "FaceFilter",
                &[(":):", "^V^")],
                "----FaceFilter()",
                "---FaceFilter()",
            ),
        }
    }
}

impl Default for FaceFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl From<FaceFilter> for SubstitutionFilter {
    fn from(filter: FaceFilter) -> Self {
        filter.inner
    }
}

impl Filter for FaceFilter {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoticon_replaced() {
        let filter = FaceFilter::new();
        assert_eq!(filter.inner.rewrite(":):,:):"), "^V^,^V^----FaceFilter()");
    }
}
