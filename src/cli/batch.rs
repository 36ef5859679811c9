//! Batch mode: stream update records and repaint all bars after each one.
//!
//! The foreground task reads records line by line and performs an
//! update-then-render cycle for each. A background task waits for an
//! interrupt, erases the drawn block, restores the cursor and exits. The two
//! share the [`Manager`], whose lock serializes their operations.

use super::args::{Args, Visibility};
use crate::error::Result;
use crate::manager::{Manager, ManagerBuilder, Update};
use crate::render::Style;

use console::Term;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

/// Run batch mode over standard input until it ends or an interrupt arrives.
pub async fn run_batch(args: &Args) -> Result<()> {
    let mut builder = ManagerBuilder::new();
    if let Some(width) = args.width {
        builder = builder.width(width);
    }
    if let Some(style) = &args.style {
        builder = builder.style(Style::parse_or_default(style));
    }
    let manager = Arc::new(builder.build());

    let term = Term::stdout();
    term.hide_cursor()?;

    let interrupted = Arc::clone(&manager);
    tokio::spawn(async move {
        wait_for_interrupt().await;
        if let Err(e) = interrupted.clear() {
            warn!("Error clearing progress bars: {e}");
        }
        let _ = Term::stdout().show_cursor();
        std::process::exit(0);
    });

    let stdin = BufReader::new(tokio::io::stdin());
    let applied = stream_updates(stdin, &manager, args.visibility()).await;
    debug!(applied, "input stream ended");

    manager.clear()?;
    term.show_cursor()?;
    Ok(())
}

/// Apply every record read from `reader` to `manager`, repainting after each.
///
/// Blank lines are ignored. Records that fail to decode or apply are logged
/// and skipped, including lines that are not valid UTF-8 (invalid sequences
/// are replaced before decoding). Only the end of the input or an I/O error
/// stops the loop. Returns the number of records applied.
pub async fn stream_updates<R>(mut reader: R, manager: &Manager, visibility: Visibility) -> usize
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let mut applied = 0;
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!("Error reading update records: {e}");
                break;
            }
        }
        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        let update = match Update::parse(&line) {
            Ok(update) => update.with_visibility_defaults(
                visibility.elapsed,
                visibility.throughput,
                visibility.eta,
            ),
            Err(e) => {
                warn!("Skipping update record: {e}");
                continue;
            }
        };

        match manager.apply_update(update).and_then(|_| manager.render_all()) {
            Ok(_) => applied += 1,
            Err(e) => warn!("Error rendering update: {e}"),
        }
    }
    applied
}

/// Resolve on Ctrl-C, or on SIGTERM where available.
async fn wait_for_interrupt() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = terminate.recv() => {}
                }
            }
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
