//! Angle-bracket sanitizing filter.

use crate::{Filter, FilterChain, Request, Response, Result};

use super::SubstitutionFilter;

/// Replaces `<` with `[` and `>` with `]`, so markup such as `<script>`
/// reaches downstream filters as inert text.
///
/// Appends `----HTMLFilter()` to the request and `---HTMLFilter()` to the
/// response.
#[derive(Debug, Clone)]
pub struct HtmlFilter {
    inner: SubstitutionFilter,
}

impl HtmlFilter {
    /// Create the filter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: SubstitutionFilter::preset(
                "HTMLFilter",
                &[("<", "["), (">", "]")],
                "----HTMLFilter()",
                "---HTMLFilter()",
            ),
        }
    }
}

impl Default for HtmlFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HtmlFilter> for SubstitutionFilter {
    fn from(filter: HtmlFilter) -> Self {
        filter.inner
    }
}

impl Filter for HtmlFilter {
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
    fn brackets_replaced() {
        let filter = HtmlFilter::new();
        assert_eq!(
            filter.inner.rewrite("<script>alert(1)</script>"),
            "[script]alert(1)[/script]----HTMLFilter()"
        );
    }

    #[test]
    fn annotates_response() {
        let chain = FilterChain::new().with_filter(HtmlFilter::new());
        let mut request = Request::new("<b>");
        let mut response = Response::new("response:");
        chain.run(&mut request, &mut response).expect("run");

        assert_eq!(request.text(), "[b]----HTMLFilter()");
        assert_eq!(response.text(), "response:---HTMLFilter()");
    }
}
