//! Token schema - every design token the inspector knows about
//!
//! Pure data. The views, the stylesheet and the resolver all draw their token
//! identifiers from here, so a token that is rendered is always a token that
//! can be inspected.

/// A semantic color group: background / text / border / ring for one intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorGroup {
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub ring: Option<&'static str>,
}

impl ColorGroup {
    /// Declared tokens in display order (background, text, border, ring)
    pub fn tokens(&self) -> Vec<&'static str> {
        let mut tokens = vec![self.background, self.text, self.border];
        tokens.extend(self.ring);
        tokens
    }
}

/// Typography scale entry - size + line-height pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeScaleEntry {
    pub label: &'static str,
    pub size: &'static str,
    pub line_height: &'static str,
}

/// A token with a human label (font families, font weights)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedToken {
    pub label: &'static str,
    pub token: &'static str,
}

// ─────────────────────────────────────────────────────────────────────────────
// Color Groups
// ─────────────────────────────────────────────────────────────────────────────

pub const COLOR_GROUPS: &[ColorGroup] = &[
    ColorGroup {
        name: "primary",
        label: "Primary",
        description: "Default surfaces, body text, main borders",
        background: "--color-background-primary",
        text: "--color-text-primary",
        border: "--color-border-primary",
        ring: Some("--color-ring-primary"),
    },
    ColorGroup {
        name: "secondary",
        label: "Secondary",
        description: "Subtle surfaces, captions, lighter borders",
        background: "--color-background-secondary",
        text: "--color-text-secondary",
        border: "--color-border-secondary",
        ring: Some("--color-ring-secondary"),
    },
    ColorGroup {
        name: "tertiary",
        label: "Tertiary",
        description: "Muted backgrounds, placeholder text, faint borders",
        background: "--color-background-tertiary",
        text: "--color-text-tertiary",
        border: "--color-border-tertiary",
        ring: None,
    },
    ColorGroup {
        name: "inverse",
        label: "Inverse",
        description: "Dark-on-light / light-on-dark contrast flip",
        background: "--color-background-inverse",
        text: "--color-text-inverse",
        border: "--color-border-inverse",
        ring: Some("--color-ring-inverse"),
    },
    ColorGroup {
        name: "ghost",
        label: "Ghost",
        description: "Transparent / subtle hover states",
        background: "--color-background-ghost",
        text: "--color-text-ghost",
        border: "--color-border-ghost",
        ring: None,
    },
    ColorGroup {
        name: "info",
        label: "Info",
        description: "Informational alerts, links, help text",
        background: "--color-background-info",
        text: "--color-text-info",
        border: "--color-border-info",
        ring: Some("--color-ring-info"),
    },
    ColorGroup {
        name: "success",
        label: "Success",
        description: "Confirmation, positive actions, saved states",
        background: "--color-background-success",
        text: "--color-text-success",
        border: "--color-border-success",
        ring: Some("--color-ring-success"),
    },
    ColorGroup {
        name: "warning",
        label: "Warning",
        description: "Caution notices, pending states",
        background: "--color-background-warning",
        text: "--color-text-warning",
        border: "--color-border-warning",
        ring: Some("--color-ring-warning"),
    },
    ColorGroup {
        name: "danger",
        label: "Danger",
        description: "Errors, destructive actions, validation failures",
        background: "--color-background-danger",
        text: "--color-text-danger",
        border: "--color-border-danger",
        ring: Some("--color-ring-danger"),
    },
    ColorGroup {
        name: "disabled",
        label: "Disabled",
        description: "Non-interactive / disabled controls",
        background: "--color-background-disabled",
        text: "--color-text-disabled",
        border: "--color-border-disabled",
        ring: None,
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Typography
// ─────────────────────────────────────────────────────────────────────────────

pub const TEXT_SCALE: &[TypeScaleEntry] = &[
    TypeScaleEntry {
        label: "Text XS",
        size: "--font-text-xs-size",
        line_height: "--font-text-xs-line-height",
    },
    TypeScaleEntry {
        label: "Text SM",
        size: "--font-text-sm-size",
        line_height: "--font-text-sm-line-height",
    },
    TypeScaleEntry {
        label: "Text MD",
        size: "--font-text-md-size",
        line_height: "--font-text-md-line-height",
    },
    TypeScaleEntry {
        label: "Text LG",
        size: "--font-text-lg-size",
        line_height: "--font-text-lg-line-height",
    },
];

pub const HEADING_SCALE: &[TypeScaleEntry] = &[
    TypeScaleEntry {
        label: "Heading XS",
        size: "--font-heading-xs-size",
        line_height: "--font-heading-xs-line-height",
    },
    TypeScaleEntry {
        label: "Heading SM",
        size: "--font-heading-sm-size",
        line_height: "--font-heading-sm-line-height",
    },
    TypeScaleEntry {
        label: "Heading MD",
        size: "--font-heading-md-size",
        line_height: "--font-heading-md-line-height",
    },
    TypeScaleEntry {
        label: "Heading LG",
        size: "--font-heading-lg-size",
        line_height: "--font-heading-lg-line-height",
    },
    TypeScaleEntry {
        label: "Heading XL",
        size: "--font-heading-xl-size",
        line_height: "--font-heading-xl-line-height",
    },
    TypeScaleEntry {
        label: "Heading 2XL",
        size: "--font-heading-2xl-size",
        line_height: "--font-heading-2xl-line-height",
    },
    TypeScaleEntry {
        label: "Heading 3XL",
        size: "--font-heading-3xl-size",
        line_height: "--font-heading-3xl-line-height",
    },
];

pub const FONT_WEIGHTS: &[NamedToken] = &[
    NamedToken {
        label: "Normal",
        token: "--font-weight-normal",
    },
    NamedToken {
        label: "Medium",
        token: "--font-weight-medium",
    },
    NamedToken {
        label: "Semibold",
        token: "--font-weight-semibold",
    },
    NamedToken {
        label: "Bold",
        token: "--font-weight-bold",
    },
];

pub const FONT_FAMILIES: &[NamedToken] = &[
    NamedToken {
        label: "Sans",
        token: "--font-sans",
    },
    NamedToken {
        label: "Mono",
        token: "--font-mono",
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Visual
// ─────────────────────────────────────────────────────────────────────────────

pub const RADIUS_PREFIX: &str = "--border-radius-";
pub const SHADOW_PREFIX: &str = "--shadow-";

pub const BORDER_RADII: &[&str] = &[
    "--border-radius-xs",
    "--border-radius-sm",
    "--border-radius-md",
    "--border-radius-lg",
    "--border-radius-xl",
    "--border-radius-full",
];

pub const BORDER_WIDTH: &str = "--border-width-regular";

pub const SHADOWS: &[&str] = &["--shadow-hairline", "--shadow-sm", "--shadow-md", "--shadow-lg"];

// ─────────────────────────────────────────────────────────────────────────────
// Enumeration
// ─────────────────────────────────────────────────────────────────────────────

/// Every token in schema order, without duplicates
pub fn all_tokens() -> Vec<&'static str> {
    let mut tokens: Vec<&'static str> = Vec::new();

    for group in COLOR_GROUPS {
        tokens.extend(group.tokens());
    }
    for family in FONT_FAMILIES {
        tokens.push(family.token);
    }
    for weight in FONT_WEIGHTS {
        tokens.push(weight.token);
    }
    for entry in HEADING_SCALE.iter().chain(TEXT_SCALE) {
        tokens.push(entry.size);
        tokens.push(entry.line_height);
    }
    tokens.extend(BORDER_RADII);
    tokens.push(BORDER_WIDTH);
    tokens.extend(SHADOWS);

    let mut seen = std::collections::HashSet::new();
    tokens.retain(|t| seen.insert(*t));
    tokens
}

/// Whether the schema declares this token
pub fn contains(token: &str) -> bool {
    all_tokens().contains(&token)
}

/// Look up a color group by name
#[cfg(test)]
pub fn color_group(name: &str) -> Option<&'static ColorGroup> {
    COLOR_GROUPS.iter().find(|g| g.name == name)
}

/// Display label for a simple-list token: the identifier without its category prefix
pub fn display_name<'a>(token: &'a str, prefix: &str) -> &'a str {
    token.strip_prefix(prefix).unwrap_or(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_color_group_names_are_unique() {
        let names: HashSet<_> = COLOR_GROUPS.iter().map(|g| g.name).collect();
        assert_eq!(names.len(), COLOR_GROUPS.len());
        assert_eq!(COLOR_GROUPS.len(), 10);
    }

    #[test]
    fn test_ring_is_optional() {
        let without_ring: Vec<_> = COLOR_GROUPS
            .iter()
            .filter(|g| g.ring.is_none())
            .map(|g| g.name)
            .collect();
        assert_eq!(without_ring, vec!["tertiary", "ghost", "disabled"]);
        assert_eq!(color_group("ghost").unwrap().tokens().len(), 3);
        assert_eq!(color_group("danger").unwrap().tokens().len(), 4);
    }

    #[test]
    fn test_group_tokens_follow_naming_convention() {
        for group in COLOR_GROUPS {
            assert_eq!(
                group.background,
                format!("--color-background-{}", group.name)
            );
            assert_eq!(group.text, format!("--color-text-{}", group.name));
            assert_eq!(group.border, format!("--color-border-{}", group.name));
            if let Some(ring) = group.ring {
                assert_eq!(ring, format!("--color-ring-{}", group.name));
            }
        }
    }

    #[test]
    fn test_scales_have_independent_lengths() {
        assert_eq!(HEADING_SCALE.len(), 7);
        assert_eq!(TEXT_SCALE.len(), 4);
    }

    #[test]
    fn test_all_tokens_deduplicated_and_complete() {
        let tokens = all_tokens();
        let unique: HashSet<_> = tokens.iter().collect();
        assert_eq!(unique.len(), tokens.len());

        // 37 color tokens, 2 families, 4 weights, 22 scale tokens, 6 radii, 1 width, 4 shadows
        assert_eq!(tokens.len(), 37 + 2 + 4 + 22 + 6 + 1 + 4);
        assert!(contains("--border-width-regular"));
        assert!(contains("--color-ring-info"));
        assert!(!contains("--color-ring-ghost"));
    }

    #[test]
    fn test_display_name_strips_prefix() {
        assert_eq!(display_name("--border-radius-full", RADIUS_PREFIX), "full");
        assert_eq!(display_name("--shadow-hairline", SHADOW_PREFIX), "hairline");
        // Unknown prefix leaves the identifier intact
        assert_eq!(display_name("--shadow-sm", RADIUS_PREFIX), "--shadow-sm");
    }
}
