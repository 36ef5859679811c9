//! The [`Bar`] entity: one logical progress indicator.
//!
//! A bar owns everything needed to draw itself: progress counters, style
//! parameters, timing information and the per-bar throughput history and
//! spinner phase. Rendering mutates the bar (history, phase, last update
//! time), which is why [`Bar::render`] takes `&mut self`.
//!
//! # Examples
//!
//! ```rust
//! use pbar::bar::Bar;
//! use pbar::render::Style;
//!
//! let mut bar = Bar::new(100).with_width(10);
//! bar.current = 50;
//! assert_eq!(bar.render(), "\r[#####-----] 50%\x1b[K");
//!
//! let mut arrow = Bar::new(100).with_width(10).with_style(Style::Arrow);
//! arrow.current = 100;
//! assert_eq!(arrow.render(), "\r[--------->] 100%\x1b[K");
//! ```

use crate::metrics::{estimate, format_duration, ThroughputHistory};
use crate::render::{frame, percent, BarFormat, Style, CHECK_MARK};

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// Width used when none is given.
pub const DEFAULT_WIDTH: i64 = 50;

/// Lifecycle of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarState {
    /// Never rendered.
    Fresh,
    /// Rendered at least once and not finished.
    InProgress,
    /// Finished; the bar draws the completion frame from now on.
    Finished,
}

/// A single progress indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bar {
    /// Work done so far.
    pub current: i64,
    /// Total amount of work. Zero and negative totals are valid.
    pub total: i64,
    /// Number of cells between the brackets.
    pub width: i64,
    /// Drawing style.
    pub style: Style,
    /// ANSI code for the bar, empty for no color.
    pub color_bar: String,
    /// ANSI code for the percentage and spinner glyph, empty for no color.
    pub color_text: String,
    /// Filled and empty glyphs for [`Style::Custom`].
    pub custom_chars: String,
    /// Text shown after the metadata while in progress.
    pub message: String,
    /// Text shown after the metadata once finished. When empty, the
    /// finished frame shows `message` instead.
    pub completion_message: String,
    /// When the bar started. Without it no timing metadata is shown.
    pub start_time: Option<SystemTime>,
    /// When the bar was last rendered.
    pub last_update_time: Option<SystemTime>,
    /// Recent throughput samples.
    pub throughput_history: ThroughputHistory,
    /// Sticky completion flag.
    pub finished: bool,
    /// Index of the next spinner glyph.
    pub spinner_phase: usize,
    /// Show the elapsed time.
    pub show_elapsed: bool,
    /// Show the smoothed throughput.
    pub show_throughput: bool,
    /// Show the estimated time remaining.
    pub show_eta: bool,
    /// Owned by a [`Manager`](crate::manager::Manager).
    pub managed: bool,
}

impl Default for Bar {
    fn default() -> Self {
        Self {
            current: 0,
            total: 0,
            width: DEFAULT_WIDTH,
            style: Style::default(),
            color_bar: String::new(),
            color_text: String::new(),
            custom_chars: String::new(),
            message: String::new(),
            completion_message: String::new(),
            start_time: None,
            last_update_time: None,
            throughput_history: ThroughputHistory::new(),
            finished: false,
            spinner_phase: 0,
            show_elapsed: true,
            show_throughput: true,
            show_eta: true,
            managed: false,
        }
    }
}

impl Bar {
    /// Create an untimed bar for `total` items.
    pub fn new(total: i64) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Set the width.
    pub fn with_width(self, width: i64) -> Self {
        Self { width, ..self }
    }

    /// Set the style.
    pub fn with_style(self, style: Style) -> Self {
        Self { style, ..self }
    }

    /// Start the clock at `start`.
    pub fn started_at(self, start: SystemTime) -> Self {
        Self {
            start_time: Some(start),
            ..self
        }
    }

    /// Fraction of the work done, clamped to `[0, 1]`.
    pub fn percent(&self) -> f64 {
        percent(self.current, self.total)
    }

    /// Return `true` if the counters alone say the work is complete.
    ///
    /// Indeterminate bars never complete on their own.
    pub fn is_complete(&self) -> bool {
        !self.style.is_indeterminate() && self.current >= self.total
    }

    /// Current lifecycle state.
    pub fn state(&self) -> BarState {
        if self.finished {
            BarState::Finished
        } else if self.last_update_time.is_none() {
            BarState::Fresh
        } else {
            BarState::InProgress
        }
    }

    /// Render one frame using the current wall-clock time.
    pub fn render(&mut self) -> String {
        self.render_at(SystemTime::now())
    }

    /// Render one frame as of `now`.
    ///
    /// The frame starts with a carriage return and ends with an
    /// erase-to-end-of-line sequence so successive frames overwrite each
    /// other.
    pub fn render_at(&mut self, now: SystemTime) -> String {
        self.last_update_time = Some(now);
        let elapsed = self
            .start_time
            .map(|start| now.duration_since(start).unwrap_or_default());

        if self.finished {
            let mut line = format!("[{CHECK_MARK}] 100%");
            self.push_elapsed(&mut line, elapsed);
            let message = if self.completion_message.is_empty() {
                &self.message
            } else {
                &self.completion_message
            };
            push_message(&mut line, message);
            return frame(&line);
        }

        let fmt = BarFormat::new(self.style, self.width)
            .custom_chars(&self.custom_chars)
            .colors(&self.color_bar, &self.color_text);

        let mut line = if let Some(glyphs) = self.style.spinner_glyphs() {
            let phase = self.spinner_phase % glyphs.len();
            self.spinner_phase = (phase + 1) % glyphs.len();
            fmt.spinner(phase)
        } else {
            let percent = self.percent();
            format!("{} {}", fmt.bar(percent), fmt.percent(percent))
        };

        self.push_elapsed(&mut line, elapsed);
        if let Some(elapsed) = elapsed.filter(|_| !self.style.is_indeterminate()) {
            let current = self.current;
            let total = self.total;
            if let Some(est) = estimate(&mut self.throughput_history, current, total, elapsed) {
                if self.show_throughput {
                    line.push_str(&est.throughput_label());
                }
                if self.show_eta {
                    line.push_str(&est.eta_label());
                }
            }
        }
        push_message(&mut line, &self.message);
        frame(&line)
    }

    fn push_elapsed(&self, line: &mut String, elapsed: Option<Duration>) {
        if let Some(elapsed) = elapsed.filter(|_| self.show_elapsed) {
            line.push_str(" Elapsed ");
            line.push_str(&format_duration(elapsed));
        }
    }
}

fn push_message(line: &mut String, message: &str) {
    if !message.is_empty() {
        line.push(' ');
        line.push_str(message);
    }
}
