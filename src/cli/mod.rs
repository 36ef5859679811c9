//! Command line driver for the `pbar` binary.
//!
//! # Overview
//!
//! - `args` - Flag and positional argument definitions
//! - `single` - One frame per invocation, with persisted state
//! - `batch` - Streamed JSON updates rendered as a block of bars
//!
//! # Examples
//!
//! ## Single-shot Steps From a Script
//!
//! ```bash
//! for i in $(seq 0 10); do pbar --style arrow "$i" 10; sleep 1; done
//! ```
//!
//! ## Parallel Bars
//!
//! ```bash
//! printf '%s\n' '{"id":"a","current":1,"total":4}' '{"id":"b","current":2,"total":4}' \
//!   | pbar --parallel
//! ```

pub mod args;
pub mod batch;
pub mod single;

pub use args::{Args, Visibility};
pub use batch::{run_batch, stream_updates};
pub use single::run_single;

use crate::error::Result;
use crate::state::FileStateStore;

/// Run the mode selected by `args`.
///
/// `raw_args` are the command line arguments without the program name.
pub async fn run(args: Args, raw_args: &[String]) -> Result<()> {
    if args.parallel {
        return run_batch(&args).await;
    }

    let store = match &args.state_dir {
        Some(dir) => FileStateStore::new(dir),
        None => FileStateStore::default(),
    };
    run_single(&args, raw_args, &store, &mut std::io::stdout())?;
    Ok(())
}
