//! Inspector Default - neutral stone palette with blue/green/amber/red intents

pub const SHEET: &str = r##"# Inspector Default token sheet for theme-inspector
# Neutral stone surfaces, saturated intent colors

[meta]
name = "Inspector Default"
version = 1

[tokens]
"--font-sans" = "system-ui, -apple-system, 'Segoe UI', 'Hiragino Sans', 'Noto Sans JP', sans-serif"
"--font-mono" = "ui-monospace, 'SF Mono', Menlo, Consolas, 'Noto Sans Mono CJK JP', monospace"

"--font-weight-normal" = "400"
"--font-weight-medium" = "500"
"--font-weight-semibold" = "600"
"--font-weight-bold" = "700"

"--font-text-xs-size" = "0.75rem"
"--font-text-xs-line-height" = "1.4"
"--font-text-sm-size" = "0.875rem"
"--font-text-sm-line-height" = "1.4"
"--font-text-md-size" = "1rem"
"--font-text-md-line-height" = "1.5"
"--font-text-lg-size" = "1.125rem"
"--font-text-lg-line-height" = "1.5"

"--font-heading-xs-size" = "0.875rem"
"--font-heading-xs-line-height" = "1.3"
"--font-heading-sm-size" = "1rem"
"--font-heading-sm-line-height" = "1.3"
"--font-heading-md-size" = "1.25rem"
"--font-heading-md-line-height" = "1.3"
"--font-heading-lg-size" = "1.5rem"
"--font-heading-lg-line-height" = "1.25"
"--font-heading-xl-size" = "1.875rem"
"--font-heading-xl-line-height" = "1.2"
"--font-heading-2xl-size" = "2.25rem"
"--font-heading-2xl-line-height" = "1.15"
"--font-heading-3xl-size" = "3rem"
"--font-heading-3xl-line-height" = "1.1"

"--border-radius-xs" = "2px"
"--border-radius-sm" = "4px"
"--border-radius-md" = "8px"
"--border-radius-lg" = "12px"
"--border-radius-xl" = "16px"
"--border-radius-full" = "9999px"

"--border-width-regular" = "1px"

[light]
"--color-background-primary" = "#ffffff"
"--color-background-secondary" = "#f5f5f4"
"--color-background-tertiary" = "#e7e5e4"
"--color-background-inverse" = "#1c1917"
"--color-background-ghost" = "transparent"
"--color-background-info" = "#eff6ff"
"--color-background-success" = "#f0fdf4"
"--color-background-warning" = "#fffbeb"
"--color-background-danger" = "#fef2f2"
"--color-background-disabled" = "#f5f5f4"

"--color-text-primary" = "#1c1917"
"--color-text-secondary" = "#57534e"
"--color-text-tertiary" = "#a8a29e"
"--color-text-inverse" = "#fafaf9"
"--color-text-ghost" = "#57534e"
"--color-text-info" = "#1d4ed8"
"--color-text-success" = "#15803d"
"--color-text-warning" = "#b45309"
"--color-text-danger" = "#b91c1c"
"--color-text-disabled" = "#a8a29e"

"--color-border-primary" = "#d6d3d1"
"--color-border-secondary" = "#e7e5e4"
"--color-border-tertiary" = "#f5f5f4"
"--color-border-inverse" = "#44403c"
"--color-border-ghost" = "transparent"
"--color-border-info" = "#bfdbfe"
"--color-border-success" = "#bbf7d0"
"--color-border-warning" = "#fde68a"
"--color-border-danger" = "#fecaca"
"--color-border-disabled" = "#e7e5e4"

"--color-ring-primary" = "#1c1917"
"--color-ring-secondary" = "#78716c"
"--color-ring-inverse" = "#fafaf9"
"--color-ring-info" = "#3b82f6"
"--color-ring-success" = "#22c55e"
"--color-ring-warning" = "#f59e0b"
"--color-ring-danger" = "#ef4444"

"--shadow-hairline" = "0 0 0 1px rgba(28, 25, 23, 0.08)"
"--shadow-sm" = "0 1px 2px rgba(28, 25, 23, 0.08)"
"--shadow-md" = "0 4px 12px rgba(28, 25, 23, 0.10)"
"--shadow-lg" = "0 12px 32px rgba(28, 25, 23, 0.14)"

[dark]
"--color-background-primary" = "#1c1917"
"--color-background-secondary" = "#292524"
"--color-background-tertiary" = "#44403c"
"--color-background-inverse" = "#fafaf9"
"--color-background-ghost" = "transparent"
"--color-background-info" = "#172554"
"--color-background-success" = "#052e16"
"--color-background-warning" = "#451a03"
"--color-background-danger" = "#450a0a"
"--color-background-disabled" = "#292524"

"--color-text-primary" = "#fafaf9"
"--color-text-secondary" = "#d6d3d1"
"--color-text-tertiary" = "#78716c"
"--color-text-inverse" = "#1c1917"
"--color-text-ghost" = "#d6d3d1"
"--color-text-info" = "#93c5fd"
"--color-text-success" = "#86efac"
"--color-text-warning" = "#fcd34d"
"--color-text-danger" = "#fca5a5"
"--color-text-disabled" = "#78716c"

"--color-border-primary" = "#44403c"
"--color-border-secondary" = "#292524"
"--color-border-tertiary" = "#1c1917"
"--color-border-inverse" = "#d6d3d1"
"--color-border-ghost" = "transparent"
"--color-border-info" = "#1e40af"
"--color-border-success" = "#166534"
"--color-border-warning" = "#92400e"
"--color-border-danger" = "#991b1b"
"--color-border-disabled" = "#292524"

"--color-ring-primary" = "#fafaf9"
"--color-ring-secondary" = "#a8a29e"
"--color-ring-inverse" = "#1c1917"
"--color-ring-info" = "#60a5fa"
"--color-ring-success" = "#4ade80"
"--color-ring-warning" = "#fbbf24"
"--color-ring-danger" = "#f87171"

"--shadow-hairline" = "0 0 0 1px rgba(0, 0, 0, 0.40)"
"--shadow-sm" = "0 1px 2px rgba(0, 0, 0, 0.40)"
"--shadow-md" = "0 4px 12px rgba(0, 0, 0, 0.50)"
"--shadow-lg" = "0 12px 32px rgba(0, 0, 0, 0.60)"
"##;
