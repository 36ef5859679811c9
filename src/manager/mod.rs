//! Manager module containing multi-bar coordination, builder pattern, and configuration.
//!
//! This module provides the main [`Manager`] struct and its associated builder
//! pattern. The manager tracks named bars, merges update records into them and
//! repaints the block of bars at the bottom of the terminal in place.
//!
//! # Overview
//!
//! The manager module is organized into four main components:
//!
//! - `manager` - Core Manager struct with update and repaint logic
//! - `builder` - ManagerBuilder for configuration using the builder pattern
//! - `config` - Defaults applied to newly tracked bars
//! - `update` - The sparse update record decoded from batch input
//!
//! # Examples
//!
//! ## Streaming Updates
//!
//! ```rust
//! use pbar::manager::{ManagerBuilder, Update};
//!
//! # fn example() -> pbar::Result<()> {
//! let manager = ManagerBuilder::new().writer(std::io::sink()).build();
//! for line in [
//!     r#"{"id":"download","current":10,"total":100}"#,
//!     r#"{"id":"extract","current":0,"total":5,"style":"spinner"}"#,
//!     r#"{"id":"download","current":20}"#,
//! ] {
//!     manager.apply_update(Update::parse(line)?)?;
//!     manager.render_all()?;
//! }
//! assert_eq!(manager.len()?, 2);
//! assert_eq!(manager.with_bar("download", |bar| bar.total)?, Some(100));
//!
//! manager.clear()?;
//! assert_eq!(manager.last_line_count()?, 0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod builder;
pub mod config;
pub mod manager;
pub mod update;

pub use builder::ManagerBuilder;
pub use config::ManagerConfig;
pub use manager::Manager;
pub use update::Update;
