//! Render module containing the stateless bar formatter.
//!
//! This module turns a progress fraction and a set of style parameters into
//! the exact characters written to the terminal, including the control
//! sequences used to repaint lines in place.
//!
//! # Overview
//!
//! The render module is organized into two main components:
//!
//! - `style` - The [`Style`] enum and its glyph tables
//! - `format` - Bar, percentage and control-sequence formatting
//!
//! # Examples
//!
//! ## Drawing a Bar
//!
//! ```rust
//! use pbar::render::{frame, percent, BarFormat, Style};
//!
//! let fmt = BarFormat::new(Style::Braille, 10);
//! let p = percent(55, 100);
//! let line = format!("{} {}", fmt.bar(p), fmt.percent(p));
//! assert_eq!(line, "[⣿⣿⣿⣿⣿⠏    ] 55%");
//! assert_eq!(frame(&line), "\r[⣿⣿⣿⣿⣿⠏    ] 55%\x1b[K");
//! ```
//!
//! ## Colored Output
//!
//! ```rust
//! use pbar::render::{percent, BarFormat, Style};
//!
//! let fmt = BarFormat::new(Style::Classic, 10).colors("\x1b[32m", "");
//! assert_eq!(fmt.bar(percent(5, 10)), "\x1b[32m[#####-----]\x1b[0m");
//! ```

pub(crate) mod format;
pub(crate) mod style;

pub use format::{
    erase_lines, filled_width, frame, paint, percent, BarFormat, CLEAR_LINE, CURSOR_UP,
    HIDE_CURSOR, MAX_WIDTH, RESET, SHOW_CURSOR,
};
pub use style::{
    Style, BRAILLE_RAMP, BRAILLE_SPINNER_GLYPHS, CHECK_MARK, SPINNER_GLYPHS,
};
