//! Builder pattern implementation for creating Manager instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use pbar::manager::ManagerBuilder;
//! use pbar::render::Style;
//!
//! let manager = ManagerBuilder::new()
//!     .width(30)
//!     .style(Style::Block)
//!     .writer(std::io::sink())
//!     .build();
//! assert!(manager.is_empty().unwrap());
//! ```
//!
//! ## Capturing Output
//!
//! ```rust
//! use pbar::manager::{ManagerBuilder, Update};
//!
//! # fn example() -> pbar::Result<()> {
//! let manager = ManagerBuilder::new().writer(Vec::new()).build();
//! manager.apply_update(Update::new("a", 1, 2))?;
//! let frame = manager.render_all()?;
//! assert!(frame.contains("50%"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use super::{config::ManagerConfig, manager::Manager};
use crate::render::Style;

use std::io::{self, Write};

/// A builder used to create a [`Manager`].
#[derive(Default)]
pub struct ManagerBuilder {
    config: ManagerConfig,
    writer: Option<Box<dyn Write + Send>>,
}

impl ManagerBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        ManagerBuilder::default()
    }

    /// Set the width given to new bars.
    pub fn width(mut self, width: i64) -> Self {
        self.config.width = width;
        self
    }

    /// Set the style given to new bars.
    pub fn style(mut self, style: Style) -> Self {
        self.config.style = style;
        self
    }

    /// Set the sink frames are written to. Defaults to standard output.
    pub fn writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Create the [`Manager`] with the specified options.
    pub fn build(self) -> Manager {
        let writer = self
            .writer
            .unwrap_or_else(|| Box::new(io::stdout()) as Box<dyn Write + Send>);
        Manager::new(self.config, writer)
    }
}
