//! Configuration structures and defaults for the manager.
//!
//! This module provides the configuration used by the [`Manager`] and
//! [`ManagerBuilder`]: the width and style given to a bar the first time an
//! update mentions it.
//!
//! # Examples
//!
//! ```rust
//! use pbar::manager::ManagerConfig;
//! use pbar::render::Style;
//!
//! let config = ManagerConfig::default();
//! assert_eq!(config.width, 50);
//! assert_eq!(config.style, Style::Classic);
//! ```
//!
//! [`Manager`]: super::Manager
//! [`ManagerBuilder`]: super::ManagerBuilder

use crate::bar::DEFAULT_WIDTH;
use crate::render::Style;

/// Configuration structure for the manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Width of bars created without an explicit width.
    pub width: i64,
    /// Style of bars created without an explicit style.
    pub style: Style,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            style: Style::default(),
        }
    }
}
