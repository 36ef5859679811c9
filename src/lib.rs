//! pbar is a crate for drawing text progress bars on a terminal, either one
//! frame per process invocation (for shell scripts) or as a block of bars
//! repainted in place from a stream of updates.
//!
//! # Quick Start
//!
//! ```rust
//! use pbar::bar::Bar;
//! use pbar::render::Style;
//!
//! let mut bar = Bar::new(100).with_width(10).with_style(Style::Braille);
//! bar.current = 55;
//! assert_eq!(bar.render(), "\r[⣿⣿⣿⣿⣿⠏    ] 55%\x1b[K");
//! ```
//!
//! # Module Organization
//!
//! The pbar crate is organized into several modules:
//!
//! - [`render`] - Stateless formatting of bars, percentages and control sequences
//! - [`metrics`] - Elapsed time, smoothed throughput and ETA
//! - [`bar`] - The `Bar` entity composing the formatter and the estimator
//! - [`manager`] - The thread-safe `Manager` repainting several named bars
//! - [`state`] - Persisted bar state and instance IDs for single-shot mode
//! - [`cli`] - The command line driver behind the `pbar` binary
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`logging`] - Diagnostic output setup
//! - [`utils`] - Shared utility functions

pub mod bar;
pub mod cli;
pub mod error;
pub mod logging;
pub mod manager;
pub mod metrics;
pub mod render;
pub mod state;
pub mod utils;

pub use bar::{Bar, BarState};
pub use error::{Error, Result};
pub use manager::{Manager, ManagerBuilder, Update};
pub use metrics::ThroughputHistory;
pub use render::Style;
pub use state::{FileStateStore, StateStore};
