//! Color name resolution.
//!
//! This module maps the color names accepted on the command line and in
//! update records to ANSI SGR escape codes. Resolution never fails: an
//! unknown name yields no color and a warning.

use tracing::warn;

/// Supported color names and their ANSI foreground codes.
pub const COLORS: [(&str, &str); 8] = [
    ("black", "\x1b[30m"),
    ("red", "\x1b[31m"),
    ("green", "\x1b[32m"),
    ("yellow", "\x1b[33m"),
    ("blue", "\x1b[34m"),
    ("magenta", "\x1b[35m"),
    ("cyan", "\x1b[36m"),
    ("white", "\x1b[37m"),
];

/// Look up the ANSI code for a color name, ignoring case.
///
/// # Example
///
/// ```rust
/// use pbar::utils::color_code;
///
/// assert_eq!(color_code("Green"), Some("\x1b[32m"));
/// assert_eq!(color_code("mauve"), None);
/// ```
pub fn color_code(name: &str) -> Option<&'static str> {
    let name = name.to_lowercase();
    COLORS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, code)| *code)
}

/// Resolve a color name to an escape code, or an empty string for no color.
///
/// An empty name means no color. An unknown name is reported with a warning
/// listing the available colors and also resolves to no color.
///
/// # Example
///
/// ```rust
/// use pbar::utils::resolve_color;
///
/// assert_eq!(resolve_color("red"), "\x1b[31m");
/// assert_eq!(resolve_color(""), "");
/// assert_eq!(resolve_color("mauve"), "");
/// ```
pub fn resolve_color(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    match color_code(name) {
        Some(code) => code.to_string(),
        None => {
            warn!(
                "Invalid color name '{}'. Available colors: {}",
                name,
                available_colors()
            );
            String::new()
        }
    }
}

/// Comma separated list of the supported color names.
pub fn available_colors() -> String {
    COLORS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}
