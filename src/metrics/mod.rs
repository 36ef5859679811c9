//! Metrics module containing elapsed time, throughput and ETA estimation.
//!
//! The estimator is stateful per bar: every render of a determinate bar
//! pushes one instantaneous rate into the bar's [`ThroughputHistory`], and
//! the smoothed rate drives the remaining-time estimate.

pub(crate) mod estimator;

pub use estimator::{estimate, format_duration, Estimate, ThroughputHistory, HISTORY_CAPACITY};
