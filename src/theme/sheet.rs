// Token sheet - locally-defined default values for design tokens
//
// This is what the inspector falls back to when no host is pushing style
// variables: the equivalent of the page's own stylesheet defaults.
//
// Format version: 1
//
//   [meta]    name / version
//   [tokens]  theme-independent values (typography, radii, shadows)
//   [light]   values applied when the root theme is light
//   [dark]    values applied when the root theme is dark
//
// Theme tables take precedence over [tokens].

use super::bundled;
use super::{referenced_vars, ThemeMode};
use crate::schema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Root structure for TOML token sheets
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TokenSheet {
    #[serde(default)]
    pub meta: SheetMeta,
    #[serde(default)]
    pub tokens: BTreeMap<String, String>,
    #[serde(default)]
    pub light: BTreeMap<String, String>,
    #[serde(default)]
    pub dark: BTreeMap<String, String>,
}

/// Sheet metadata
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SheetMeta {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: u32,
}

fn default_version() -> u32 {
    1
}

impl Default for SheetMeta {
    fn default() -> Self {
        Self {
            name: "untitled".to_string(),
            version: default_version(),
        }
    }
}

/// Where the active sheet came from (shown in startup output)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSource {
    Bundled,
    File(std::path::PathBuf),
}

impl TokenSheet {
    /// Parse a TOML token sheet from string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize back to the TOML sheet format
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// The sheet compiled into the binary
    pub fn bundled() -> Self {
        match Self::from_str(bundled::DEFAULT_SHEET) {
            Ok(sheet) => sheet,
            Err(e) => {
                // Covered by tests; an empty sheet still renders (every token "(not set)")
                tracing::error!("Bundled token sheet failed to parse: {}", e);
                Self::default()
            }
        }
    }

    /// Load a user sheet, falling back to the bundled one
    ///
    /// A broken or missing user sheet is logged, never fatal: the inspector
    /// must still render something useful.
    pub fn load(path: Option<&Path>) -> (Self, SheetSource) {
        let Some(path) = path else {
            return (Self::bundled(), SheetSource::Bundled);
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_str(&contents) {
                Ok(sheet) => {
                    for (token, name) in sheet.unknown_references() {
                        tracing::warn!(
                            "Token sheet {}: {} references {}, which nothing defines",
                            path.display(),
                            token,
                            name
                        );
                    }
                    tracing::debug!(
                        "Loaded token sheet '{}' from {}",
                        sheet.meta.name,
                        path.display()
                    );
                    (sheet, SheetSource::File(path.to_path_buf()))
                }
                Err(e) => {
                    tracing::warn!(
                        "Token sheet {} is invalid ({}), using bundled defaults",
                        path.display(),
                        e
                    );
                    (Self::bundled(), SheetSource::Bundled)
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Cannot read token sheet {} ({}), using bundled defaults",
                    path.display(),
                    e
                );
                (Self::bundled(), SheetSource::Bundled)
            }
        }
    }

    /// var() references to names neither the schema nor this sheet defines,
    /// as (token, referenced name)
    pub fn unknown_references(&self) -> Vec<(String, String)> {
        let defined = |name: &str| {
            schema::contains(name)
                || self.tokens.contains_key(name)
                || self.light.contains_key(name)
                || self.dark.contains_key(name)
        };

        let mut out = Vec::new();
        for (token, value) in self.tokens.iter().chain(&self.light).chain(&self.dark) {
            for name in referenced_vars(value) {
                if !defined(name) {
                    out.push((token.clone(), name.to_string()));
                }
            }
        }
        out
    }

    /// Theme-specific table
    pub fn theme_values(&self, theme: ThemeMode) -> &BTreeMap<String, String> {
        match theme {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// Default value for a token under the given theme
    pub fn value(&self, theme: ThemeMode, token: &str) -> Option<&str> {
        self.theme_values(theme)
            .get(token)
            .or_else(|| self.tokens.get(token))
            .map(String::as_str)
    }

    /// Builder for sheets assembled in code
    #[cfg(test)]
    pub fn with_token(mut self, token: &str, value: &str) -> Self {
        self.tokens.insert(token.to_string(), value.to_string());
        self
    }

    /// Same as [`with_token`](Self::with_token) but for one theme only
    #[cfg(test)]
    pub fn with_theme_token(mut self, theme: ThemeMode, token: &str, value: &str) -> Self {
        let table = match theme {
            ThemeMode::Light => &mut self.light,
            ThemeMode::Dark => &mut self.dark,
        };
        table.insert(token.to_string(), value.to_string());
        self
    }

    /// Remove a token from every table
    #[cfg(test)]
    pub fn without_token(mut self, token: &str) -> Self {
        self.tokens.remove(token);
        self.light.remove(token);
        self.dark.remove(token);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    #[test]
    fn test_unknown_references() {
        assert!(TokenSheet::bundled().unknown_references().is_empty());

        let sheet = TokenSheet::from_str(
            r##"
[tokens]
"--brand" = "#0055ff"
"--color-text-info" = "var(--brand)"

[dark]
"--color-text-danger" = "var(--brnad, red)"
"##,
        )
        .unwrap();
        assert_eq!(
            sheet.unknown_references(),
            vec![("--color-text-danger".to_string(), "--brnad".to_string())]
        );
    }

    #[test]
    fn test_to_toml_reparses() {
        let sheet = TokenSheet::bundled().with_token("--font-mono", "Iosevka");
        let text = sheet.to_toml().unwrap();
        let back = TokenSheet::from_str(&text).unwrap();
        assert_eq!(back.meta.name, sheet.meta.name);
        assert_eq!(back.value(ThemeMode::Dark, "--font-mono"), Some("Iosevka"));
        assert_eq!(back.light, sheet.light);
    }

    #[test]
    fn test_parse_sheet() {
        let toml = r##"
[meta]
name = "Test Sheet"

[tokens]
"--font-sans" = "Inter, sans-serif"

[light]
"--color-text-primary" = "#111111"

[dark]
"--color-text-primary" = "#eeeeee"
"--font-sans" = "Inter Display"
"##;

        let sheet = TokenSheet::from_str(toml).unwrap();
        assert_eq!(sheet.meta.name, "Test Sheet");
        assert_eq!(sheet.meta.version, 1);
        assert_eq!(
            sheet.value(ThemeMode::Light, "--color-text-primary"),
            Some("#111111")
        );
        assert_eq!(
            sheet.value(ThemeMode::Dark, "--color-text-primary"),
            Some("#eeeeee")
        );
        // Theme table wins over shared tokens
        assert_eq!(sheet.value(ThemeMode::Dark, "--font-sans"), Some("Inter Display"));
        assert_eq!(
            sheet.value(ThemeMode::Light, "--font-sans"),
            Some("Inter, sans-serif")
        );
        assert_eq!(sheet.value(ThemeMode::Light, "--shadow-sm"), None);
    }

    #[test]
    fn test_bundled_sheet_covers_schema_in_both_themes() {
        let sheet = TokenSheet::from_str(bundled::DEFAULT_SHEET).unwrap();
        for token in schema::all_tokens() {
            for theme in [ThemeMode::Light, ThemeMode::Dark] {
                assert!(
                    sheet.value(theme, token).is_some(),
                    "bundled sheet is missing {} for {:?}",
                    token,
                    theme
                );
            }
        }
    }

    #[test]
    fn test_load_missing_file_falls_back_to_bundled() {
        let (sheet, source) = TokenSheet::load(Some(Path::new(
            "/nonexistent/theme-inspector/tokens.toml",
        )));
        assert_eq!(source, SheetSource::Bundled);
        assert!(sheet.value(ThemeMode::Light, "--font-sans").is_some());
    }

    #[test]
    fn test_without_token_removes_everywhere() {
        let sheet = TokenSheet::default()
            .with_token("--x", "1")
            .with_theme_token(ThemeMode::Dark, "--x", "2")
            .without_token("--x");
        assert_eq!(sheet.value(ThemeMode::Light, "--x"), None);
        assert_eq!(sheet.value(ThemeMode::Dark, "--x"), None);
    }
}
