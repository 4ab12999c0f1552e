//! JSON deserialization helpers.

use crate::Result;

/// Deserialize JSON text into a typed value.
///
/// Uses `serde_path_to_error` so that the resulting [`crate::Error::Config`]
/// names the exact field that failed (e.g., "filters[1].rules[0].pattern").
///
/// # Errors
///
/// Returns an error if the text is not valid JSON for `T`.
///
/// # Example
///
/// ```
/// use sieve_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Rule { pattern: String }
///
/// let rule: Rule = from_json(r#"{"pattern":"<"}"#).expect("deserialize");
/// assert_eq!(rule, Rule { pattern: "<".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(text: &str) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| crate::Error::config(e.path().to_string(), e.inner().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Outer {
        inner: Inner,
    }

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Inner {
        count: u32,
    }

    #[test]
    fn from_json_success() {
        let value: Outer = from_json(r#"{"inner":{"count":3}}"#).expect("deserialize");
        assert_eq!(value, Outer { inner: Inner { count: 3 } });
    }

    #[test]
    fn from_json_error_has_path() {
        let err = from_json::<Outer>(r#"{"inner":{"count":"three"}}"#)
            .expect_err("should fail");

        let crate::Error::Config { path, .. } = err else {
            panic!("expected config error, got {err:?}");
        };
        assert_eq!(path, "inner.count");
    }

    #[test]
    fn from_json_syntax_error() {
        let err = from_json::<Outer>("{not json").expect_err("should fail");
        assert!(err.is_config());
    }
}
