//! Variable resolver - current display value of a token
//!
//! Read-only. A value that is absent or whitespace-only comes back as
//! [`UNSET`]; resolution never fails.

use crate::schema;
use crate::theme::StyleSource;
use std::collections::HashMap;

/// Display sentinel for a token with no value
pub const UNSET: &str = "(not set)";

/// Current value of `token`, trimmed, or [`UNSET`]
pub fn resolve(source: &impl StyleSource, token: &str) -> String {
    source
        .computed_value(token)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| UNSET.to_string())
}

/// Every schema token resolved once, for a single render pass
///
/// Built at the start of a render and dropped with it; values are never
/// carried across renders.
#[derive(Debug, Clone, Default)]
pub struct ResolvedValues {
    values: HashMap<&'static str, String>,
}

impl ResolvedValues {
    pub fn capture(source: &impl StyleSource) -> Self {
        let values = schema::all_tokens()
            .into_iter()
            .map(|token| (token, resolve(source, token)))
            .collect();
        Self { values }
    }

    /// Resolved value, or [`UNSET`] for a token outside the capture
    pub fn get(&self, token: &str) -> &str {
        self.values.get(token).map(String::as_str).unwrap_or(UNSET)
    }

    pub fn is_set(&self, token: &str) -> bool {
        self.get(token) != UNSET
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Number of captured tokens that resolved to a value
    pub fn set_count(&self) -> usize {
        self.values.values().filter(|v| v.as_str() != UNSET).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn source(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_resolve_unset_is_sentinel() {
        let src = source(&[]);
        assert_eq!(resolve(&src, "--color-background-danger"), "(not set)");
    }

    #[test]
    fn test_resolve_trims() {
        let src = source(&[("--font-sans", "  Inter, sans-serif \n")]);
        assert_eq!(resolve(&src, "--font-sans"), "Inter, sans-serif");
    }

    #[test]
    fn test_resolve_whitespace_only_is_unset() {
        let src = source(&[("--shadow-sm", "   ")]);
        assert_eq!(resolve(&src, "--shadow-sm"), UNSET);
    }

    #[test]
    fn test_capture_covers_schema() {
        let src = source(&[("--color-text-primary", "#111")]);
        let values = ResolvedValues::capture(&src);
        assert_eq!(values.len(), schema::all_tokens().len());
        assert_eq!(values.get("--color-text-primary"), "#111");
        assert_eq!(values.set_count(), 1);
        assert!(!values.is_set("--color-ring-info"));
        assert_eq!(values.get("--not-a-schema-token"), UNSET);
    }
}
