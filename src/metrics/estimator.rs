//! Throughput smoothing and remaining-time estimation.
//!
//! Each bar keeps a [`ThroughputHistory`]: a sliding window of the last
//! [`HISTORY_CAPACITY`] instantaneous rates. The displayed throughput is the
//! unweighted mean of that window, and the ETA divides the remaining work by
//! it.
//!
//! # Examples
//!
//! ```rust
//! use pbar::metrics::{estimate, format_duration, ThroughputHistory};
//! use std::time::Duration;
//!
//! let mut history = ThroughputHistory::new();
//! let est = estimate(&mut history, 50, 100, Duration::from_secs(10))
//!     .expect("determinate bar with elapsed time");
//! assert_eq!(est.throughput_label(), " 5.00 it/s");
//! assert_eq!(est.eta_label(), " ETA 10s");
//! assert_eq!(format_duration(Duration::from_secs(3723)), "1h2m3s");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Number of rate samples kept per bar.
pub const HISTORY_CAPACITY: usize = 10;

/// Bounded FIFO window of recent throughput samples, in items per second.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThroughputHistory {
    samples: VecDeque<f64>,
}

impl ThroughputHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample, evicting the oldest one once the window is full.
    pub fn push(&mut self, rate: f64) {
        self.samples.push_back(rate);
        while self.samples.len() > HISTORY_CAPACITY {
            self.samples.pop_front();
        }
    }

    /// Arithmetic mean of the window, `0.0` when empty.
    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// Number of samples held.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Return `true` if no sample was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples from oldest to newest.
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }
}

/// Smoothed throughput and the derived remaining time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Mean rate over the history window.
    pub throughput: f64,
    /// Time left at that rate; `None` when the rate is zero.
    pub eta: Option<Duration>,
}

impl Estimate {
    /// Metadata fragment for the throughput, e.g. `" 12.50 it/s"`.
    pub fn throughput_label(&self) -> String {
        format!(" {:.2} it/s", self.throughput)
    }

    /// Metadata fragment for the ETA, e.g. `" ETA 3m12s"` or `" ETA Inf"`.
    pub fn eta_label(&self) -> String {
        match self.eta {
            Some(eta) => format!(" ETA {}", format_duration(eta)),
            None => " ETA Inf".to_string(),
        }
    }
}

/// Record a rate sample for the given progress and derive an [`Estimate`].
///
/// Returns `None`, without touching the history, when no time has elapsed.
/// The instantaneous rate is zero unless both `total` and `current` are
/// positive.
pub fn estimate(
    history: &mut ThroughputHistory,
    current: i64,
    total: i64,
    elapsed: Duration,
) -> Option<Estimate> {
    let seconds = elapsed.as_secs_f64();
    if seconds <= 0.0 {
        return None;
    }

    let rate = if total > 0 && current > 0 {
        current as f64 / seconds
    } else {
        0.0
    };
    history.push(rate);

    let throughput = history.mean();
    let eta = (throughput > 0.0).then(|| {
        let remaining = (total as f64 - current as f64) / throughput;
        Duration::try_from_secs_f64(remaining).unwrap_or(Duration::ZERO)
    });

    Some(Estimate { throughput, eta })
}

/// Format a duration as `HhMmSs`, omitting leading zero units.
///
/// Sub-second precision is truncated: `45s`, `3m12s`, `1h2m3s`, `1h0m0s`.
pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.as_secs();
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let remaining = seconds % 60;

    if hours > 0 {
        format!("{hours}h{minutes}m{remaining}s")
    } else if minutes > 0 {
        format!("{minutes}m{remaining}s")
    } else {
        format!("{remaining}s")
    }
}
