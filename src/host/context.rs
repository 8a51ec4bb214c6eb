// Host context wire format
//
// {
//   "theme": "light" | "dark",
//   "styles": {
//     "variables": { "--token": "value" | null, ... },
//     "css": { "fonts": "@font-face { ... }" }
//   }
// }
//
// Every field is optional and unknown fields are ignored. A field of the
// wrong type counts as absent, so the rest of the message still applies.
// Variable values that are not strings are stringified; nulls are skipped.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostContext {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub styles: Option<HostStyles>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostStyles {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub variables: Option<BTreeMap<String, Value>>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub css: Option<HostCss>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostCss {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub fonts: Option<String>,
}

/// Decode an optional field, treating a value of the wrong type as absent
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl HostContext {
    /// Decode from a JSON value (notification params, initialize result)
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[cfg(test)]
    pub fn with_theme(theme: &str) -> Self {
        Self {
            theme: Some(theme.to_string()),
            styles: None,
        }
    }

    #[cfg(test)]
    pub fn from_variables<I, K, V>(variables: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let variables = variables
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        Self {
            theme: None,
            styles: Some(HostStyles {
                variables: Some(variables),
                css: None,
            }),
        }
    }

    /// Non-empty theme string, if present
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref().filter(|t| !t.is_empty())
    }

    /// Style variables with nulls dropped, or None when the field is absent
    pub fn style_variables(&self) -> Option<Vec<(String, String)>> {
        let variables = self.styles.as_ref()?.variables.as_ref()?;
        Some(
            variables
                .iter()
                .filter_map(|(token, value)| {
                    let value = match value {
                        Value::Null => return None,
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    Some((token.clone(), value))
                })
                .collect(),
        )
    }

    /// Non-empty font declarations, if present
    pub fn fonts(&self) -> Option<&str> {
        self.styles
            .as_ref()?
            .css
            .as_ref()?
            .fonts
            .as_deref()
            .filter(|f| !f.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.theme().is_none() && self.style_variables().is_none() && self.fonts().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_context() {
        let ctx = HostContext::from_value(json!({
            "theme": "dark",
            "styles": {
                "variables": {
                    "--color-text-primary": "#fff",
                    "--shadow-sm": null,
                    "--font-weight-bold": 700
                },
                "css": { "fonts": "@font-face {}" }
            },
            "displayMode": "inline"
        }))
        .unwrap();

        assert_eq!(ctx.theme(), Some("dark"));
        assert_eq!(
            ctx.style_variables().unwrap(),
            vec![
                ("--color-text-primary".to_string(), "#fff".to_string()),
                ("--font-weight-bold".to_string(), "700".to_string()),
            ]
        );
        assert_eq!(ctx.fonts(), Some("@font-face {}"));
    }

    #[test]
    fn test_absent_fields() {
        let ctx = HostContext::from_value(json!({})).unwrap();
        assert!(ctx.is_empty());
        assert_eq!(ctx.style_variables(), None);

        let ctx = HostContext::from_value(json!({"styles": {"css": {}}})).unwrap();
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let ctx =
            HostContext::from_value(json!({"theme": "", "styles": {"css": {"fonts": ""}}}))
                .unwrap();
        assert_eq!(ctx.theme(), None);
        assert_eq!(ctx.fonts(), None);
    }

    #[test]
    fn test_mistyped_fields_do_not_drop_the_rest() {
        let ctx = HostContext::from_value(json!({
            "theme": 1,
            "styles": {
                "variables": {"--color-ring-info": "rgb(0,0,255)"},
                "css": {"fonts": ["not", "a", "string"]}
            }
        }))
        .unwrap();

        assert_eq!(ctx.theme(), None);
        assert_eq!(ctx.fonts(), None);
        assert_eq!(
            ctx.style_variables().unwrap(),
            vec![("--color-ring-info".to_string(), "rgb(0,0,255)".to_string())]
        );

        let ctx = HostContext::from_value(json!({
            "theme": "dark",
            "styles": {"variables": "--color-text-primary: red"}
        }))
        .unwrap();
        assert_eq!(ctx.theme(), Some("dark"));
        assert_eq!(ctx.style_variables(), None);
    }
}
