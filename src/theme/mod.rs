// Presentation environment - the live style state the inspector renders against
//
// Layers, highest precedence first:
// 1. Host overrides (style variables pushed by the host, root inline style)
// 2. Token sheet table for the active theme ([light] / [dark])
// 3. Token sheet shared table ([tokens])
//
// Values may reference other tokens with var(); those references are
// substituted when a value is computed, the same way a browser computes a
// custom property.

mod bundled;
pub mod color;
mod sheet;

pub use sheet::{SheetSource, TokenSheet};

/// Source text of the bundled token sheet, comments included
pub fn bundled_sheet() -> &'static str {
    bundled::DEFAULT_SHEET
}

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

/// Maximum var() nesting before a value is treated as cyclic
const MAX_SUBSTITUTION_DEPTH: usize = 16;

/// Substituted values longer than this are invalid (treated as unset)
const MAX_VALUE_LEN: usize = 16 * 1024;

// ─────────────────────────────────────────────────────────────────────────────
// Theme Mode
// ─────────────────────────────────────────────────────────────────────────────

/// Root theme attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Parse a host-supplied theme name (case-insensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme
    pub fn other(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Attribute value (`data-theme="..."`)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Capitalized name for buttons and status lines
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Style Source
// ─────────────────────────────────────────────────────────────────────────────

/// Anything that can report the computed value of a custom property
///
/// Implemented by [`Environment`]; tests implement it over plain maps.
pub trait StyleSource {
    /// Computed value with var() references substituted, or None when unset
    fn computed_value(&self, token: &str) -> Option<String>;
}

impl StyleSource for BTreeMap<String, String> {
    fn computed_value(&self, token: &str) -> Option<String> {
        let raw = self.get(token)?;
        Substitution::new(&|name| self.get(name).cloned())
            .value(raw)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Environment
// ─────────────────────────────────────────────────────────────────────────────

/// The live presentation environment
#[derive(Debug, Clone)]
pub struct Environment {
    theme: ThemeMode,
    sheet: TokenSheet,
    overrides: BTreeMap<String, String>,
    fonts: Option<String>,
}

impl Environment {
    pub fn new(sheet: TokenSheet) -> Self {
        Self {
            theme: ThemeMode::default(),
            sheet,
            overrides: BTreeMap::new(),
            fonts: None,
        }
    }

    /// Environment with only the bundled defaults
    #[cfg(test)]
    pub fn standalone() -> Self {
        Self::new(TokenSheet::bundled())
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn sheet(&self) -> &TokenSheet {
        &self.sheet
    }

    /// Host-applied overrides (root inline style)
    pub fn overrides(&self) -> &BTreeMap<String, String> {
        &self.overrides
    }

    /// Installed font declarations, if any
    pub fn fonts(&self) -> Option<&str> {
        self.fonts.as_deref()
    }

    /// Set the root theme attribute
    pub fn apply_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
    }

    /// Push style variables, replacing any existing value per identifier
    pub fn apply_style_variables<I, K, V>(&mut self, variables: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (token, value) in variables {
            self.overrides.insert(token.into(), value.into());
        }
    }

    /// Install host font declarations (replaces previously installed fonts)
    pub fn apply_fonts(&mut self, css: &str) {
        self.fonts = Some(css.to_string());
    }

    /// Raw declared value before var() substitution
    fn declared_value(&self, token: &str) -> Option<String> {
        self.overrides
            .get(token)
            .map(String::as_str)
            .or_else(|| self.sheet.value(self.theme, token))
            .map(str::to_string)
    }

    /// Substitute var() references in an arbitrary value against this environment
    ///
    /// `locals` is consulted first; it carries element-scoped custom properties
    /// such as `--_ring-color`. Returns None when a reference has neither a value
    /// nor a fallback (the whole declaration is invalid, like in CSS).
    pub fn substitute(
        &self,
        value: &str,
        locals: &dyn Fn(&str) -> Option<String>,
    ) -> Option<String> {
        Substitution::new(&|name| locals(name).or_else(|| self.declared_value(name)))
            .value(value)
    }
}

impl StyleSource for Environment {
    fn computed_value(&self, token: &str) -> Option<String> {
        let raw = self.declared_value(token)?;
        self.substitute(&raw, &|_| None)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// var() substitution
// ─────────────────────────────────────────────────────────────────────────────

fn var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"var\(\s*(--[A-Za-z0-9_-]+)\s*").expect("valid var() pattern")
    })
}

/// Custom property names referenced by var() in a value, in order
pub fn referenced_vars(value: &str) -> Vec<&str> {
    var_pattern()
        .captures_iter(value)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

/// Index of the `)` closing a group whose `(` was already consumed
fn closing_paren(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return Some(i),
            ')' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// One substitution pass
///
/// Each referenced name is expanded at most once per pass, so values that
/// reference the same token many times stay linear in the number of tokens.
struct Substitution<'a> {
    lookup: &'a dyn Fn(&str) -> Option<String>,
    resolved: HashMap<String, Option<String>>,
    in_progress: Vec<String>,
}

impl<'a> Substitution<'a> {
    fn new(lookup: &'a dyn Fn(&str) -> Option<String>) -> Self {
        Self {
            lookup,
            resolved: HashMap::new(),
            in_progress: Vec::new(),
        }
    }

    /// Substituted value of a custom property, None when unset, cyclic or too long
    fn var(&mut self, name: &str) -> Option<String> {
        if let Some(done) = self.resolved.get(name) {
            return done.clone();
        }
        if self.in_progress.len() >= MAX_SUBSTITUTION_DEPTH
            || self.in_progress.iter().any(|n| n == name)
        {
            return None;
        }

        self.in_progress.push(name.to_string());
        let value = (self.lookup)(name).and_then(|raw| self.value(&raw));
        self.in_progress.pop();

        self.resolved.insert(name.to_string(), value.clone());
        value
    }

    /// Substitute every var() in `value`
    fn value(&mut self, value: &str) -> Option<String> {
        let mut out = String::with_capacity(value.len());
        let mut rest = value;

        while let Some(caps) = var_pattern().captures(rest) {
            let whole = caps.get(0)?;
            let name = caps.get(1)?.as_str();
            out.push_str(&rest[..whole.start()]);

            let after = &rest[whole.end()..];
            let (fallback, consumed) = match after.chars().next() {
                Some(')') => (None, 1),
                Some(',') => {
                    let body = &after[1..];
                    let end = closing_paren(body)?;
                    (Some(body[..end].trim()), end + 2)
                }
                _ => return None,
            };

            let replacement = self
                .var(name)
                .or_else(|| fallback.and_then(|f| self.value(f)))?;

            out.push_str(&replacement);
            if out.len() > MAX_VALUE_LEN {
                return None;
            }
            rest = &after[consumed..];
        }

        out.push_str(rest);
        (out.len() <= MAX_VALUE_LEN).then_some(out)
    }
}
