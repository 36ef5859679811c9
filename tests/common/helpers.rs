#![allow(dead_code)]

use pbar::bar::Bar;
use pbar::cli::Args;
use pbar::manager::{Manager, ManagerBuilder, Update};
use pbar::render::{Style, CLEAR_LINE};
use pbar::state::FileStateStore;

use clap::Parser;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tempfile::TempDir;

// === Time Helpers ===

/// A fixed start time so timing metadata is deterministic
pub fn fixed_start() -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(1_700_000_000)
}

/// The instant `secs` seconds after [`fixed_start`]
pub fn after(secs: u64) -> SystemTime {
    fixed_start() + Duration::from_secs(secs)
}

// === Bar Helpers ===

/// Creates an untimed bar with the given progress, width and style
pub fn create_test_bar(current: i64, total: i64, width: i64, style: Style) -> Bar {
    let mut bar = Bar::new(total).with_width(width).with_style(style);
    bar.current = current;
    bar
}

/// Creates a bar whose clock started at [`fixed_start`]
pub fn create_timed_bar(current: i64, total: i64, width: i64) -> Bar {
    create_test_bar(current, total, width, Style::Classic).started_at(fixed_start())
}

/// Strips the carriage return and erase-line wrapper from a frame
pub fn strip_frame(frame: &str) -> &str {
    let frame = frame.strip_prefix('\r').expect("frame starts with \\r");
    frame.strip_suffix(CLEAR_LINE).expect("frame ends with erase-line")
}

/// Counts occurrences of `glyph` in the bracketed part of a line
pub fn count_glyph(line: &str, glyph: char) -> usize {
    let end = line.find(']').expect("line contains a bar");
    line[..end].chars().filter(|c| *c == glyph).count()
}

// === Manager Helpers ===

/// In-memory sink that can be inspected while the manager owns a clone
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("utf-8 output")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Creates a manager writing into a fresh [`SharedBuffer`]
pub fn create_test_manager(width: i64) -> (Manager, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let manager = ManagerBuilder::new()
        .width(width)
        .writer(buffer.clone())
        .build();
    (manager, buffer)
}

/// Creates an update with all timing metadata hidden
pub fn create_quiet_update(id: &str, current: i64, total: i64) -> Update {
    Update {
        show_elapsed: Some(false),
        show_throughput: Some(false),
        show_eta: Some(false),
        ..Update::new(id, current, total)
    }
}

// === CLI Helpers ===

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a state store inside `dir`
pub fn create_test_store(dir: &TempDir) -> FileStateStore {
    FileStateStore::new(dir.path())
}

/// Parses command line arguments, returning them with the raw argument list
pub fn parse_args(args: &[&str]) -> (Args, Vec<String>) {
    let parsed = Args::try_parse_from(std::iter::once("pbar").chain(args.iter().copied()))
        .expect("Failed to parse arguments");
    let raw = args.iter().map(|arg| arg.to_string()).collect();
    (parsed, raw)
}
