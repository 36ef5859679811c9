//! Bar styles and their glyph tables.
//!
//! Every style the renderer knows is a variant of [`Style`]. Determinate
//! styles draw a fill proportional to the progress fraction; indeterminate
//! styles ([`Style::Spinner`] and [`Style::BrailleSpinner`]) cycle through a
//! fixed set of glyphs instead.
//!
//! # Examples
//!
//! ```rust
//! use pbar::render::Style;
//!
//! let style: Style = "braille-spinner".parse()?;
//! assert!(style.is_indeterminate());
//! assert_eq!(style.to_string(), "braille-spinner");
//!
//! // Unknown names fall back to the default style.
//! assert_eq!(Style::parse_or_default("neon"), Style::Classic);
//! # Ok::<(), pbar::Error>(())
//! ```

use crate::error::Error;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Spinner glyphs, period 4.
pub static SPINNER_GLYPHS: [&str; 4] = ["|", "/", "-", "\\"];

/// Braille spinner glyphs, period 10.
pub static BRAILLE_SPINNER_GLYPHS: [&str; 10] =
    ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Braille fill ramp, indexed by the number of filled eighths of a cell.
pub const BRAILLE_RAMP: [&str; 9] = [" ", "⠁", "⠃", "⠇", "⠏", "⠟", "⠿", "⡿", "⣿"];

/// Sub-units per braille cell.
pub const BRAILLE_CELL_UNITS: i64 = (BRAILLE_RAMP.len() - 1) as i64;

/// Glyph used by the finished frame.
pub const CHECK_MARK: &str = "✔";

/// Progress bar style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    /// `[#####-----]`
    #[default]
    Classic,
    /// `[█████     ]`
    Block,
    /// `[|]`, `[/]`, `[-]`, `[\]`
    Spinner,
    /// `[---->     ]`
    Arrow,
    /// `[⣿⣿⣿⣿⣿⠏    ]`, eight sub-steps per cell.
    Braille,
    /// `[⠋]`, `[⠙]`, ...
    BrailleSpinner,
    /// Glyphs supplied by the caller.
    Custom,
}

impl Style {
    /// All styles, in the order they are listed to users.
    pub const ALL: [Style; 7] = [
        Style::Classic,
        Style::Block,
        Style::Spinner,
        Style::Arrow,
        Style::Braille,
        Style::Custom,
        Style::BrailleSpinner,
    ];

    /// Name used on the command line and in update records.
    pub fn name(self) -> &'static str {
        match self {
            Style::Classic => "classic",
            Style::Block => "block",
            Style::Spinner => "spinner",
            Style::Arrow => "arrow",
            Style::Braille => "braille",
            Style::BrailleSpinner => "braille-spinner",
            Style::Custom => "custom",
        }
    }

    /// Return `true` if the style conveys activity rather than a fraction.
    pub fn is_indeterminate(self) -> bool {
        matches!(self, Style::Spinner | Style::BrailleSpinner)
    }

    /// Glyph cycle of an indeterminate style, `None` for determinate ones.
    pub fn spinner_glyphs(self) -> Option<&'static [&'static str]> {
        match self {
            Style::Spinner => Some(&SPINNER_GLYPHS[..]),
            Style::BrailleSpinner => Some(&BRAILLE_SPINNER_GLYPHS[..]),
            _ => None,
        }
    }

    /// Parse a style name, falling back to [`Style::Classic`] with a warning.
    pub fn parse_or_default(name: &str) -> Style {
        name.parse().unwrap_or_else(|_| {
            warn!(style = name, "unknown style, using {}", Style::default());
            Style::default()
        })
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| Error::InvalidStyle(s.to_string()))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
