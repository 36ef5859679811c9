//! Command line arguments.
//!
//! Flags may appear anywhere on the command line, before or after the
//! optional `CURRENT TOTAL` pair.

use crate::error::{Error, Result};

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Width of a single-shot bar when `--width` is not given.
pub const DEFAULT_WIDTH: i64 = 40;
/// Total used when no positional arguments are given.
pub const DEFAULT_TOTAL: i64 = 100;
/// Flags that never take a value.
pub const SWITCHES: [&str; 5] = ["parallel", "version", "help", "V", "h"];

/// Render a progress bar, one frame per call or streamed in parallel.
#[derive(Parser, Debug, Clone)]
#[command(name = "pbar", version)]
pub struct Args {
    /// Width of the progress bar [default: 40, or 50 for parallel bars]
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Style of the progress bar (classic, block, spinner, arrow, braille, custom, braille-spinner)
    #[arg(long)]
    pub style: Option<String>,

    /// Color for the bar (black, red, green, yellow, blue, magenta, cyan, white)
    #[arg(long, default_value = "")]
    pub colorbar: String,

    /// Color for the percentage and spinner glyph
    #[arg(long, default_value = "")]
    pub colortext: String,

    /// Message to display when the progress bar is complete
    #[arg(long = "finished-message", default_value = "")]
    pub finished_message: String,

    /// Custom characters for the progress bar (e.g. '#=')
    #[arg(long, default_value = "")]
    pub chars: String,

    /// Optional message to display alongside the progress bar
    #[arg(long, default_value = "")]
    pub message: String,

    /// Read JSON update records from standard input and render several bars
    #[arg(long)]
    pub parallel: bool,

    /// Unique ID for the progress bar instance
    #[arg(long)]
    pub id: Option<String>,

    /// Show elapsed time
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub show_elapsed: bool,

    /// Show throughput (iterations/second)
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub show_throughput: bool,

    /// Show estimated time remaining
    #[arg(long = "show-eta", default_value_t = true, action = ArgAction::Set)]
    pub show_eta: bool,

    /// Directory holding single-shot state [default: system temp dir]
    #[arg(long, env = "PBAR_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    /// CURRENT and TOTAL progress values
    #[arg(value_name = "CURRENT TOTAL", allow_negative_numbers = true)]
    pub positional: Vec<String>,
}

/// Default visibility of the metadata fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    /// Show elapsed time.
    pub elapsed: bool,
    /// Show throughput.
    pub throughput: bool,
    /// Show ETA.
    pub eta: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            elapsed: true,
            throughput: true,
            eta: true,
        }
    }
}

impl Args {
    /// Visibility toggles requested on the command line.
    pub fn visibility(&self) -> Visibility {
        Visibility {
            elapsed: self.show_elapsed,
            throughput: self.show_throughput,
            eta: self.show_eta,
        }
    }

    /// Interpret the positional arguments as `(current, total)`.
    ///
    /// No positional arguments mean `(0, 100)`; otherwise exactly two
    /// integers are required.
    pub fn progress(&self) -> Result<(i64, i64)> {
        match self.positional.as_slice() {
            [] => Ok((0, DEFAULT_TOTAL)),
            [current, total] => Ok((
                parse_number("current", current)?,
                parse_number("total", total)?,
            )),
            [only] => Err(Error::InvalidArguments(format!(
                "When using positional arguments, provide both current and total values. Got only: {only}"
            ))),
            all => Err(Error::InvalidArguments(format!(
                "Too many positional arguments. Expected 0 or 2, got {}: {:?}",
                all.len(),
                all
            ))),
        }
    }
}

fn parse_number(name: &'static str, value: &str) -> Result<i64> {
    value.trim().parse().map_err(|_| Error::InvalidNumber {
        name,
        value: value.to_string(),
    })
}
