//! Request and response messages flowing through a chain.
//!
//! A [`Request`] travels forward: each filter rewrites its text before handing
//! it on. A [`Response`] travels backward: each filter appends to it after the
//! rest of the chain has returned.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Forward-flowing message, rewritten in place by each filter.
#[derive(Debug, Display, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[display("{text}")]
pub struct Request {
    text: String,
}

impl Request {
    /// Creates a request carrying the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Current request text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the request text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Mutable access to the request text.
    #[must_use]
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Appends to the request text.
    pub fn append(&mut self, suffix: &str) {
        self.text.push_str(suffix);
    }

    /// Consume into the request text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Backward-flowing message, annotated by each filter once downstream returns.
#[derive(Debug, Display, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[display("{text}")]
pub struct Response {
    text: String,
}

impl Response {
    /// Creates a response seeded with the given text.
    #[must_use]
    pub fn new(seed: impl Into<String>) -> Self {
        Self { text: seed.into() }
    }

    /// Current response text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the response text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Mutable access to the response text.
    #[must_use]
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Appends an annotation to the response text.
    pub fn append(&mut self, annotation: &str) {
        self.text.push_str(annotation);
    }

    /// Consume into the response text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl From<&str> for Request {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Request {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Response {
    fn from(seed: &str) -> Self {
        Self::new(seed)
    }
}

impl From<String> for Response {
    fn from(seed: String) -> Self {
        Self::new(seed)
    }
}
