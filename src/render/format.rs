//! Pure formatting of bars, percentages and terminal control sequences.
//!
//! Nothing in this module keeps state: given the progress fraction and the
//! style parameters, the output is fully determined. The spinner phase is
//! passed in by the caller, who owns it.
//!
//! # Examples
//!
//! ```rust
//! use pbar::render::{percent, BarFormat, Style};
//!
//! let fmt = BarFormat::new(Style::Classic, 10);
//! let p = percent(50, 100);
//! assert_eq!(fmt.bar(p), "[#####-----]");
//! assert_eq!(fmt.percent(p), "50%");
//! ```

use super::style::{Style, BRAILLE_CELL_UNITS, BRAILLE_RAMP, SPINNER_GLYPHS};

/// Reset all SGR attributes.
pub const RESET: &str = "\x1b[0m";
/// Erase from the cursor to the end of the line.
pub const CLEAR_LINE: &str = "\x1b[K";
/// Move the cursor up one line.
pub const CURSOR_UP: &str = "\x1b[A";
/// Hide the terminal cursor.
pub const HIDE_CURSOR: &str = "\x1b[?25l";
/// Show the terminal cursor.
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// Widest bar drawn; larger widths are drawn at this width.
pub const MAX_WIDTH: i64 = 1024;

const CLASSIC_FILLED: char = '#';
const CLASSIC_EMPTY: char = '-';

/// Compute the progress fraction, clamped to `[0, 1]`.
///
/// A non-positive `total` has no meaningful ratio: the bar is empty while
/// `current` is zero and complete otherwise. The inputs are never modified.
pub fn percent(current: i64, total: i64) -> f64 {
    let ratio = if total <= 0 {
        if current == 0 {
            0.0
        } else {
            1.0
        }
    } else {
        current as f64 / total as f64
    };
    ratio.clamp(0.0, 1.0)
}

/// Number of filled cells for a bar of `width` cells.
///
/// A single-cell bar shows any non-zero progress as full.
pub fn filled_width(percent: f64, width: i64) -> i64 {
    if width <= 0 {
        return 0;
    }
    if width == 1 && percent > 0.0 {
        return 1;
    }
    ((percent * width as f64) as i64).min(width)
}

/// Wrap a rendered line so that printing it overwrites the current line.
pub fn frame(content: &str) -> String {
    format!("\r{content}{CLEAR_LINE}")
}

/// Sequence erasing a block of `lines` lines whose last line holds the cursor.
///
/// Each line is cleared from its first column; the cursor moves up between
/// lines and ends on the first line of the block.
pub fn erase_lines(lines: usize) -> String {
    let mut out = String::new();
    for i in 0..lines {
        out.push('\r');
        out.push_str(CLEAR_LINE);
        if i + 1 < lines {
            out.push_str(CURSOR_UP);
        }
    }
    out
}

/// Wrap `content` in `color` and a reset, or return it untouched if no color.
pub fn paint(color: &str, content: &str) -> String {
    if color.is_empty() {
        content.to_string()
    } else {
        format!("{color}{content}{RESET}")
    }
}

/// Style parameters for drawing one bar.
#[derive(Debug, Clone, Copy)]
pub struct BarFormat<'a> {
    /// Bar style.
    pub style: Style,
    /// Number of cells between the brackets.
    pub width: i64,
    /// Filled and empty glyphs for [`Style::Custom`].
    pub custom_chars: &'a str,
    /// ANSI code wrapping the bracketed bar.
    pub color_bar: &'a str,
    /// ANSI code wrapping the percentage and spinner glyphs.
    pub color_text: &'a str,
}

impl<'a> BarFormat<'a> {
    /// Create an uncolored format.
    pub fn new(style: Style, width: i64) -> Self {
        Self {
            style,
            width,
            custom_chars: "",
            color_bar: "",
            color_text: "",
        }
    }

    /// Set the custom glyphs.
    pub fn custom_chars(mut self, chars: &'a str) -> Self {
        self.custom_chars = chars;
        self
    }

    /// Set the bar and text colors.
    pub fn colors(mut self, color_bar: &'a str, color_text: &'a str) -> Self {
        self.color_bar = color_bar;
        self.color_text = color_text;
        self
    }

    /// Draw the bracketed bar.
    ///
    /// Indeterminate styles have no fill; they are drawn as their first
    /// spinner glyph.
    pub fn bar(&self, percent: f64) -> String {
        if self.width <= 0 {
            return "[]".to_string();
        }
        let content = match self.style {
            Style::Classic => self.fill(percent, CLASSIC_FILLED, CLASSIC_EMPTY),
            Style::Block => self.fill(percent, '█', ' '),
            Style::Custom => {
                let (filled, empty) = self.custom_glyphs();
                self.fill(percent, filled, empty)
            }
            Style::Arrow => self.arrow(percent),
            Style::Braille => self.braille(percent),
            Style::Spinner | Style::BrailleSpinner => return self.spinner(0),
        };
        paint(self.color_bar, &format!("[{content}]"))
    }

    /// Draw the spinner glyph for `phase`, wrapping modulo the glyph count.
    pub fn spinner(&self, phase: usize) -> String {
        let glyphs = self
            .style
            .spinner_glyphs()
            .unwrap_or(&SPINNER_GLYPHS[..]);
        let glyph = glyphs[phase % glyphs.len()];
        format!("[{}]", paint(self.color_text, glyph))
    }

    /// Format the percentage, floored to a whole number.
    pub fn percent(&self, percent: f64) -> String {
        paint(self.color_text, &format!("{}%", (percent * 100.0) as i64))
    }

    /// Number of cells actually drawn.
    fn cells(&self) -> i64 {
        self.width.min(MAX_WIDTH)
    }

    fn custom_glyphs(&self) -> (char, char) {
        let mut chars = self.custom_chars.chars();
        match (chars.next(), chars.next()) {
            (Some(filled), Some(empty)) => (filled, empty),
            (Some(only), None) => (only, only),
            _ => (CLASSIC_FILLED, CLASSIC_EMPTY),
        }
    }

    fn fill(&self, percent: f64, filled: char, empty: char) -> String {
        let width = self.cells();
        let filled_width = filled_width(percent, width);
        let empty_width = width - filled_width;
        let mut out = String::with_capacity(width as usize);
        out.extend(std::iter::repeat(filled).take(filled_width as usize));
        out.extend(std::iter::repeat(empty).take(empty_width as usize));
        out
    }

    fn arrow(&self, percent: f64) -> String {
        let width = self.cells();
        let filled_width = filled_width(percent, width);
        let empty_width = width - filled_width;
        let mut out = String::new();
        if filled_width > 0 {
            out.push_str(&"-".repeat(filled_width as usize - 1));
            out.push('>');
        }
        out.push_str(&" ".repeat(empty_width as usize));
        out
    }

    fn braille(&self, percent: f64) -> String {
        let width = self.cells();
        let total_units = width * BRAILLE_CELL_UNITS;
        let filled_units = (percent * total_units as f64) as i64;
        (0..width)
            .map(|cell| {
                let units = filled_units - cell * BRAILLE_CELL_UNITS;
                if units >= BRAILLE_CELL_UNITS {
                    BRAILLE_RAMP[BRAILLE_RAMP.len() - 1]
                } else if units > 0 {
                    BRAILLE_RAMP[units as usize]
                } else {
                    " "
                }
            })
            .collect()
    }
}
