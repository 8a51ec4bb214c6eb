//! Bundled token sheet (compiled into binary)
//!
//! Used whenever no `token_sheet` is configured. `config --reset` does not
//! touch it; copy it out with `theme-inspector sheet > tokens.toml` to start a
//! custom sheet.

mod inspector_default;

pub use inspector_default::SHEET as DEFAULT_SHEET;
