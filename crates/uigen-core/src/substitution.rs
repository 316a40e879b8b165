//! Ordered literal token substitution.

use crate::core::{UigenError, UigenResult};
use crate::naming::ComponentName;

/// Token replaced by the Pascal form of the component name
pub const DEFAULT_PASCAL_TOKEN: &str = "__COMPONENT__";

/// Token replaced by the raw component name
pub const DEFAULT_RAW_TOKEN: &str = "__component__";

/// The pair of placeholder tokens a template uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    pub pascal: String,
    pub raw: String,
}

impl Default for Tokens {
    fn default() -> Self {
        Self {
            pascal: DEFAULT_PASCAL_TOKEN.to_string(),
            raw: DEFAULT_RAW_TOKEN.to_string(),
        }
    }
}

/// Ordered `(token, replacement)` pairs
///
/// Pairs apply in insertion order and each one sees the output of the
/// previous one, so a replacement containing a later token gets rewritten
/// again. Keep tokens disjoint from replacement values to avoid that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionMap {
    pairs: Vec<(String, String)>,
}

impl SubstitutionMap {
    pub fn new(pairs: Vec<(String, String)>) -> UigenResult<Self> {
        if pairs.is_empty() {
            return Err(UigenError::InvalidSubstitution(
                "at least one token is required".to_string(),
            ));
        }

        if let Some((_, value)) = pairs.iter().find(|(token, _)| token.is_empty()) {
            return Err(UigenError::InvalidSubstitution(format!(
                "empty token for replacement '{}'",
                value
            )));
        }

        Ok(Self { pairs })
    }

    /// Build the two-entry map for a component, Pascal token first
    pub fn for_component(name: &ComponentName, tokens: &Tokens) -> UigenResult<Self> {
        Self::new(vec![
            (tokens.pascal.clone(), name.pascal()),
            (tokens.raw.clone(), name.raw().to_string()),
        ])
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Replace every occurrence of every token, one token at a time
    pub fn apply(&self, input: &str) -> String {
        let mut result = input.to_string();
        for (token, value) in &self.pairs {
            if result.contains(token.as_str()) {
                result = result.replace(token.as_str(), value);
            }
        }
        result
    }

    /// Byte-level `apply`, for names that are not valid UTF-8
    ///
    /// Bytes outside token matches are copied through unchanged.
    pub fn apply_bytes(&self, input: &[u8]) -> Vec<u8> {
        let mut result = input.to_vec();
        for (token, value) in &self.pairs {
            result = replace_bytes(&result, token.as_bytes(), value.as_bytes());
        }
        result
    }

    /// Whether `input` contains any token
    pub fn matches(&self, input: &str) -> bool {
        self.pairs.iter().any(|(token, _)| input.contains(token.as_str()))
    }
}

fn replace_bytes(haystack: &[u8], needle: &[u8], value: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    while !rest.is_empty() {
        if rest.starts_with(needle) {
            out.extend_from_slice(value);
            rest = &rest[needle.len()..];
        } else {
            out.push(rest[0]);
            rest = &rest[1..];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> SubstitutionMap {
        SubstitutionMap::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_for_component_order() {
        let name = ComponentName::parse("select").unwrap();
        let subs = SubstitutionMap::for_component(&name, &Tokens::default()).unwrap();
        assert_eq!(
            subs.pairs(),
            &[
                ("__COMPONENT__".to_string(), "Select".to_string()),
                ("__component__".to_string(), "select".to_string()),
            ]
        );
    }

    #[test]
    fn test_apply_replaces_every_occurrence() {
        let subs = map(&[("__COMPONENT__", "Foo")]);
        assert_eq!(
            subs.apply("__COMPONENT__ x __COMPONENT__ y __COMPONENT__"),
            "Foo x Foo y Foo"
        );
    }

    #[test]
    fn test_apply_is_case_sensitive() {
        let name = ComponentName::parse("button").unwrap();
        let subs = SubstitutionMap::for_component(&name, &Tokens::default()).unwrap();
        assert_eq!(
            subs.apply("app.component('Sn__COMPONENT__', __COMPONENT__) // ./src/__component__.vue"),
            "app.component('SnButton', Button) // ./src/button.vue"
        );
    }

    #[test]
    fn test_apply_composes_left_to_right() {
        let subs = map(&[("A", "B"), ("B", "C")]);
        assert_eq!(subs.apply("A"), "C");

        let subs = map(&[("B", "C"), ("A", "B")]);
        assert_eq!(subs.apply("A"), "B");
    }

    #[test]
    fn test_apply_bytes_leaves_invalid_bytes() {
        let subs = map(&[("__x__", "sel"), ("sel", "Sel")]);
        assert_eq!(subs.apply_bytes(b"\xff__x__.ts\xfe"), b"\xffSel.ts\xfe".to_vec());
        assert_eq!(subs.apply_bytes(b"\xffplain"), b"\xffplain".to_vec());
        assert_eq!(subs.apply_bytes(b""), Vec::<u8>::new());
    }

    #[test]
    fn test_tokens_are_literal() {
        let subs = map(&[("a.c", "X")]);
        assert_eq!(subs.apply("abc a.c"), "abc X");
    }

    #[test]
    fn test_identity_without_tokens() {
        let subs = map(&[("__COMPONENT__", "Foo")]);
        assert_eq!(subs.apply("export default {}"), "export default {}");
        assert!(!subs.matches("export default {}"));
    }

    #[test]
    fn test_empty_token_rejected() {
        let result = SubstitutionMap::new(vec![(String::new(), "x".to_string())]);
        assert!(matches!(result, Err(UigenError::InvalidSubstitution(_))));

        let result = SubstitutionMap::new(Vec::new());
        assert!(matches!(result, Err(UigenError::InvalidSubstitution(_))));
    }
}
