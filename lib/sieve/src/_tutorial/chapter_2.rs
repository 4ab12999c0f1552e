//! # Chapter 2: Configuration & Observability
//!
//! Describe chains as data and watch them run.
//!
//! ## Chains from JSON
//!
//! [`ChainConfig`](crate::ChainConfig) lists filters in registration order:
//!
//! ```
//! use sieve::ChainConfig;
//!
//! let config = ChainConfig::from_json(r#"{
//!     "filters": [
//!         { "kind": "guard", "blocked": ["drop table"] },
//!         { "kind": "html" },
//!         { "kind": "substitution", "name": "Polite", "rules": [{ "pattern": "hey", "replacement": "hello" }] }
//!     ]
//! }"#)?;
//!
//! let chain = config.build_chain()?;
//! assert_eq!(chain.filter_names(), ["GuardFilter", "HTMLFilter", "Polite"]);
//! # Ok::<(), sieve::Error>(())
//! ```
//!
//! Errors point at the offending field, e.g.
//! `invalid configuration at 'filters[0].blocked': invalid type: ...`.
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! sieve = { version = "0.1", features = ["filter-full"] }
//! ```
//!
//! | Feature | Filter | Description |
//! |---------|--------|-------------|
//! | `filter-logging` | `LoggingFilter` | `tracing` events per pass (default) |
//! | `filter-metrics` | `MetricsFilter` | Counters and histograms via `metrics` |
//!
//! ## Where to Put Observability Filters
//!
//! Observability filters only see what runs after them:
//!
//! ```text
//! LoggingFilter → HTMLFilter → FaceFilter      logs the whole pass
//! HTMLFilter → LoggingFilter → FaceFilter      logs FaceFilter only
//! ```
//!
//! Install a subscriber to see the events:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("sieve=debug,sieve_core=trace")
//!     .init();
//! ```
