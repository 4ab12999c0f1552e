//! Rule-driven text substitution filter.
//!
//! [`SubstitutionFilter`] is the building block behind [`HtmlFilter`],
//! [`SensitiveFilter`] and [`FaceFilter`]: an ordered list of literal
//! replacements applied to the request, a trace suffix appended to the request,
//! and an annotation appended to the response once downstream returns.
//!
//! [`HtmlFilter`]: super::HtmlFilter
//! [`SensitiveFilter`]: super::SensitiveFilter
//! [`FaceFilter`]: super::FaceFilter

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{Error, Filter, FilterChain, Request, Response, Result};

/// A literal `pattern → replacement` rule.
///
/// Every non-overlapping occurrence of `pattern` is replaced, scanning left
/// to right. The pattern is never empty, including for deserialized rules.
#[derive(Debug, Display, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[display("'{pattern}' -> '{replacement}'")]
#[serde(try_from = "RawSubstitution")]
pub struct Substitution {
    pattern: String,
    replacement: String,
}

#[derive(Deserialize)]
struct RawSubstitution {
    pattern: String,
    #[serde(default)]
    replacement: String,
}

impl TryFrom<RawSubstitution> for Substitution {
    type Error = Error;

    fn try_from(raw: RawSubstitution) -> Result<Self> {
        Self::new(raw.pattern, raw.replacement)
    }
}

impl Substitution {
    /// Create a replacement rule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRule`] if `pattern` is empty.
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Result<Self> {
        let rule = Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        };
        rule.validate()?;
        Ok(rule)
    }

    /// Create a rule that deletes every occurrence of `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRule`] if `pattern` is empty.
    pub fn remove(pattern: impl Into<String>) -> Result<Self> {
        Self::new(pattern, "")
    }

    /// Check the rule can be applied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRule`] if `pattern` is empty.
    pub fn validate(&self) -> Result<()> {
        if self.pattern.is_empty() {
            return Err(Error::invalid_rule(format!(
                "empty pattern (replacement '{}')",
                self.replacement
            )));
        }
        Ok(())
    }

    /// Text to search for.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Text inserted in place of each match.
    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Apply the rule to `text`.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        text.replace(&self.pattern, &self.replacement)
    }

    fn literal(pattern: &str, replacement: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        }
    }
}

/// Filter applying an ordered list of [`Substitution`] rules.
///
/// # Example
///
/// ```
/// use sieve::filters::{Substitution, SubstitutionFilter};
/// use sieve::{FilterChain, Request, Response};
///
/// let filter = SubstitutionFilter::builder("shout")
///     .rule(Substitution::new("!", "!!!")?)
///     .request_suffix("[shout]")
///     .response_annotation("<shout>")
///     .build();
///
/// let chain = FilterChain::new().with_filter(filter);
/// let mut request = Request::new("hi!");
/// let mut response = Response::new("ok");
/// chain.run(&mut request, &mut response)?;
///
/// assert_eq!(request.text(), "hi!!![shout]");
/// assert_eq!(response.text(), "ok<shout>");
/// # Ok::<(), sieve::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionFilter {
    name: String,
    rules: Vec<Substitution>,
    request_suffix: String,
    response_annotation: String,
}

impl SubstitutionFilter {
    /// Creates a new [`SubstitutionFilterBuilder`].
    #[must_use]
    pub fn builder(name: impl Into<String>) -> SubstitutionFilterBuilder {
        SubstitutionFilterBuilder::new(name)
    }

    pub(super) fn preset(
        name: &str,
        rules: &[(&str, &str)],
        request_suffix: &str,
        response_annotation: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            rules: rules
                .iter()
                .map(|(pattern, replacement)| Substitution::literal(pattern, replacement))
                .collect(),
            request_suffix: request_suffix.to_string(),
            response_annotation: response_annotation.to_string(),
        }
    }

    /// Substitution rules, in application order.
    #[must_use]
    pub fn rules(&self) -> &[Substitution] {
        &self.rules
    }

    /// Suffix appended to the request after the rules ran.
    #[must_use]
    pub fn request_suffix(&self) -> &str {
        &self.request_suffix
    }

    /// Annotation appended to the response after downstream returned.
    #[must_use]
    pub fn response_annotation(&self) -> &str {
        &self.response_annotation
    }

    /// Apply every rule, in order, then the request suffix.
    #[must_use]
    pub fn rewrite(&self, text: &str) -> String {
        let mut text = self
            .rules
            .iter()
            .fold(text.to_string(), |text, rule| rule.apply(&text));
        text.push_str(&self.request_suffix);
        text
    }
}

impl Filter for SubstitutionFilter {
    fn process(
        &self,
        request: &mut Request,
        response: &mut Response,
        chain: &FilterChain,
    ) -> Result<()> {
        let rewritten = self.rewrite(request.text());
        trace!(filter = %self.name, rules = self.rules.len(), "request rewritten");
        request.set_text(rewritten);

        chain.advance(request, response, chain)?;

        response.append(&self.response_annotation);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Builder for [`SubstitutionFilter`].
#[derive(Debug, Clone)]
pub struct SubstitutionFilterBuilder {
    name: String,
    rules: Vec<Substitution>,
    request_suffix: String,
    response_annotation: Option<String>,
}

impl SubstitutionFilterBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
            request_suffix: String::new(),
            response_annotation: None,
        }
    }

    /// Appends a rule.
    #[must_use]
    pub fn rule(mut self, rule: Substitution) -> Self {
        self.rules.push(rule);
        self
    }

    /// Appends multiple rules.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = Substitution>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Sets the request trace suffix (default: none).
    #[must_use]
    pub fn request_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.request_suffix = suffix.into();
        self
    }

    /// Sets the response annotation (default: `---{name}()`).
    #[must_use]
    pub fn response_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.response_annotation = Some(annotation.into());
        self
    }

    /// Builds the [`SubstitutionFilter`].
    #[must_use]
    pub fn build(self) -> SubstitutionFilter {
        let response_annotation = self
            .response_annotation
            .unwrap_or_else(|| format!("---{}()", self.name));
        SubstitutionFilter {
            name: self.name,
            rules: self.rules,
            request_suffix: self.request_suffix,
            response_annotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[test]
    fn substitution_replaces_all_occurrences() {
        let rule = Substitution::new("ab", "x").expect("valid rule");
        check!(rule.apply("abcab") == "xcx");
        check!(rule.apply("") == "");
        check!(rule.to_string() == "'ab' -> 'x'");
    }

    #[test]
    fn substitution_rejects_empty_pattern() {
        let_assert!(Err(err) = Substitution::new("", "x"));
        check!(err.to_string() == "invalid rule: empty pattern (replacement 'x')");
    }

    #[test]
    fn rules_apply_sequentially() {
        // The second rule sees the output of the first
        let filter = SubstitutionFilter::builder("seq")
            .rule(Substitution::new("a", "b").expect("rule"))
            .rule(Substitution::new("b", "c").expect("rule"))
            .build();

        check!(filter.rewrite("ab") == "cc");
    }

    #[test]
    fn builder_defaults() {
        let filter = SubstitutionFilter::builder("Upper").build();

        check!(filter.name() == "Upper");
        check!(filter.rules().is_empty());
        check!(filter.request_suffix() == "");
        check!(filter.response_annotation() == "---Upper()");
    }

    #[test]
    fn substitution_deserialize_default_replacement() {
        let rule: Substitution = serde_json::from_str(r#"{"pattern":"x"}"#).expect("json");
        check!(rule == Substitution::remove("x").expect("rule"));
    }

    #[test]
    fn substitution_deserialize_rejects_empty_pattern() {
        let result = serde_json::from_str::<Substitution>(r#"{"pattern":"","replacement":"*"}"#);

        let_assert!(Err(err) = result);
        check!(err.to_string().contains("empty pattern (replacement '*')"));
    }

    #[test]
    fn builder_only_receives_valid_rules() {
        let rules: Vec<Substitution> =
            serde_json::from_str(r#"[{"pattern":"a","replacement":"*"}]"#).expect("json");
        let filter = SubstitutionFilter::builder("x").rules(rules).build();

        check!(filter.rewrite("abc") == "*bc");
    }
}
