//! Bar module containing the single progress indicator entity.
//!
//! A [`Bar`] composes the stateless formatter from [`render`](crate::render)
//! with the per-bar estimator from [`metrics`](crate::metrics) to produce one
//! frame per call.
//!
//! # Examples
//!
//! ## Finishing a Bar
//!
//! ```rust
//! use pbar::bar::{Bar, BarState};
//!
//! let mut bar = Bar::new(10);
//! bar.current = 3;
//! bar.finished = true;
//! bar.completion_message = "done".to_string();
//!
//! assert_eq!(bar.state(), BarState::Finished);
//! assert_eq!(bar.render(), "\r[✔] 100% done\x1b[K");
//! ```

pub mod bar;

pub use bar::{Bar, BarState, DEFAULT_WIDTH};
