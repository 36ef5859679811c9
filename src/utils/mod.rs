//! Shared utility functions.
//!
//! This module contains utility functions that are used across multiple
//! modules in the pbar crate.
//!
//! # Overview
//!
//! The utils module currently contains:
//!
//! - [`colors`] - Color name to ANSI escape code resolution
//!
//! # Examples
//!
//! ## Resolving a Color Name
//!
//! ```rust
//! use pbar::utils::resolve_color;
//!
//! let code = resolve_color("cyan");
//! assert_eq!(code, "\x1b[36m");
//! ```

pub mod colors;

// Re-export commonly used utilities
pub use colors::{available_colors, color_code, resolve_color, COLORS};
