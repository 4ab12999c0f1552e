//! Chain configuration types.
//!
//! A [`ChainConfig`] describes a chain as data: an ordered list of
//! [`FilterConfig`] entries, buildable in code or loaded from JSON.
//!
//! ```json
//! {
//!   "filters": [
//!     { "kind": "html" },
//!     { "kind": "substitution", "name": "Shout", "rules": [{ "pattern": "!", "replacement": "!!" }] },
//!     { "kind": "guard", "blocked": ["drop table"], "reject": true }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::filters::{
    FaceFilter, GuardAction, GuardFilter, HtmlFilter, SensitiveFilter, Substitution,
    SubstitutionFilter,
};
use crate::{Filter, FilterChain, Result};

/// Configuration of a single filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterConfig {
    /// [`HtmlFilter`].
    Html,
    /// [`SensitiveFilter`].
    Sensitive,
    /// [`FaceFilter`].
    Face,
    /// Custom [`SubstitutionFilter`].
    Substitution {
        /// Filter name.
        name: String,
        /// Rules, in application order.
        #[serde(default)]
        rules: Vec<Substitution>,
        /// Suffix appended to the request.
        #[serde(default)]
        request_suffix: String,
        /// Annotation appended to the response (default: `---{name}()`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        response_annotation: Option<String>,
    },
    /// [`GuardFilter`].
    Guard {
        /// Terms that stop the chain.
        blocked: Vec<String>,
        /// Fail the pass instead of halting quietly.
        #[serde(default)]
        reject: bool,
    },
    /// [`LoggingFilter`](crate::filters::LoggingFilter).
    #[cfg(feature = "filter-logging")]
    Logging {
        /// Log full request/response text at debug level.
        #[serde(default)]
        debug: bool,
    },
    /// [`MetricsFilter`](crate::filters::MetricsFilter).
    #[cfg(feature = "filter-metrics")]
    Metrics,
}

impl FilterConfig {
    /// Instantiate the configured filter.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidRule`] if a substitution rule is unusable.
    pub fn build(&self) -> Result<Box<dyn Filter>> {
        let filter: Box<dyn Filter> = match self {
            Self::Html => Box::new(HtmlFilter::new()),
            Self::Sensitive => Box::new(SensitiveFilter::new()),
            Self::Face => Box::new(FaceFilter::new()),
            Self::Substitution {
                name,
                rules,
                request_suffix,
                response_annotation,
            } => {
                for rule in rules {
                    rule.validate()?;
                }
                let mut builder = SubstitutionFilter::builder(name.as_str())
                    .rules(rules.iter().cloned())
                    .request_suffix(request_suffix.as_str());
                if let Some(annotation) = response_annotation {
                    builder = builder.response_annotation(annotation.as_str());
                }
                Box::new(builder.build())
            }
            Self::Guard { blocked, reject } => {
                let action = if *reject {
                    GuardAction::Reject
                } else {
                    GuardAction::Halt
                };
                Box::new(GuardFilter::new(blocked.iter().cloned()).with_action(action))
            }
            #[cfg(feature = "filter-logging")]
            Self::Logging { debug } => {
                if *debug {
                    Box::new(crate::filters::LoggingFilter::debug())
                } else {
                    Box::new(crate::filters::LoggingFilter::new())
                }
            }
            #[cfg(feature = "filter-metrics")]
            Self::Metrics => Box::new(crate::filters::MetricsFilter::new()),
        };
        Ok(filter)
    }
}

/// Configuration of a whole chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    /// Filters, in registration order.
    #[serde(default)]
    pub filters: Vec<FilterConfig>,
}

impl ChainConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ChainConfigBuilder {
        ChainConfigBuilder::default()
    }

    /// The reference chain: HTML, sensitive, then face.
    #[must_use]
    pub fn reference() -> Self {
        Self::builder().html().sensitive().face().build()
    }

    /// Load a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] with the path of the offending field.
    pub fn from_json(json: &str) -> Result<Self> {
        crate::from_json(json)
    }

    /// Build a fresh [`FilterChain`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidRule`] if a substitution rule is unusable.
    pub fn build_chain(&self) -> Result<FilterChain> {
        let mut chain = FilterChain::new();
        for filter in &self.filters {
            chain.add_filter(filter.build()?);
        }
        tracing::debug!(filters = ?chain.filter_names(), "filter chain built");
        Ok(chain)
    }
}

/// Builder for [`ChainConfig`].
#[derive(Debug, Clone, Default)]
pub struct ChainConfigBuilder {
    filters: Vec<FilterConfig>,
}

impl ChainConfigBuilder {
    /// Append a filter configuration.
    #[must_use]
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.filters.push(filter);
        self
    }

    /// Append an [`HtmlFilter`].
    #[must_use]
    pub fn html(self) -> Self {
        self.filter(FilterConfig::Html)
    }

    /// Append a [`SensitiveFilter`].
    #[must_use]
    pub fn sensitive(self) -> Self {
        self.filter(FilterConfig::Sensitive)
    }

    /// Append a [`FaceFilter`].
    #[must_use]
    pub fn face(self) -> Self {
        self.filter(FilterConfig::Face)
    }

    /// Append a quietly halting [`GuardFilter`].
    #[must_use]
    pub fn guard<I, S>(self, blocked: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter(FilterConfig::Guard {
            blocked: blocked.into_iter().map(Into::into).collect(),
            reject: false,
        })
    }

    /// Append a [`LoggingFilter`](crate::filters::LoggingFilter).
    #[cfg(feature = "filter-logging")]
    #[must_use]
    pub fn logging(self) -> Self {
        self.filter(FilterConfig::Logging { debug: false })
    }

    /// Append a debug-level [`LoggingFilter`](crate::filters::LoggingFilter).
    #[cfg(feature = "filter-logging")]
    #[must_use]
    pub fn debug_logging(self) -> Self {
        self.filter(FilterConfig::Logging { debug: true })
    }

    /// Append a [`MetricsFilter`](crate::filters::MetricsFilter).
    #[cfg(feature = "filter-metrics")]
    #[must_use]
    pub fn metrics(self) -> Self {
        self.filter(FilterConfig::Metrics)
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> ChainConfig {
        ChainConfig {
            filters: self.filters,
        }
    }
}
