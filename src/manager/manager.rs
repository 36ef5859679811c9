//! Core manager implementation coordinating several named bars.
//!
//! The [`Manager`] owns a collection of [`Bar`]s keyed by ID, applies sparse
//! update records to them and repaints the whole block of bars in place. All
//! state lives behind one mutex, and each public operation holds it for its
//! entire duration, so updates and renders coming from different threads or
//! tasks never interleave partial frames.
//!
//! # Examples
//!
//! ```rust
//! use pbar::manager::{ManagerBuilder, Update};
//!
//! # fn example() -> pbar::Result<()> {
//! let manager = ManagerBuilder::new().width(10).writer(std::io::sink()).build();
//!
//! manager.apply_update(Update::new("b", 5, 10))?;
//! manager.apply_update(Update::new("a", 1, 10))?;
//! assert_eq!(manager.ids()?, vec!["a", "b"]);
//!
//! let first = manager.render_all()?;
//! assert_eq!(first.lines().count(), 2);
//!
//! // The next frame starts by erasing the two lines drawn before.
//! let second = manager.render_all()?;
//! assert!(second.starts_with("\r\x1b[K\x1b[A\r\x1b[K"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use super::config::ManagerConfig;
use super::update::Update;
use crate::bar::Bar;
use crate::error::{Error, Result};
use crate::render::{erase_lines, Style};
use crate::utils::resolve_color;

use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::sync::{Mutex, MutexGuard};
use std::time::SystemTime;
use tracing::debug;

/// State guarded by the manager's lock.
struct Inner {
    bars: HashMap<String, Bar>,
    order: Vec<String>,
    last_line_count: usize,
    writer: Box<dyn Write + Send>,
}

/// Represents the multi-bar controller.
///
/// A manager can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use pbar::manager::ManagerBuilder;
///
/// let m = ManagerBuilder::new().build();
/// # }
/// ```
pub struct Manager {
    config: ManagerConfig,
    inner: Mutex<Inner>,
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Manager");
        debug.field("config", &self.config);
        if let Ok(inner) = self.inner.try_lock() {
            debug
                .field("order", &inner.order)
                .field("last_line_count", &inner.last_line_count);
        }
        debug.finish_non_exhaustive()
    }
}

impl Default for Manager {
    fn default() -> Self {
        super::ManagerBuilder::new().build()
    }
}

impl Manager {
    /// Creates a new Manager writing frames to `writer`.
    pub(crate) fn new(config: ManagerConfig, writer: Box<dyn Write + Send>) -> Self {
        Self {
            config,
            inner: Mutex::new(Inner {
                bars: HashMap::new(),
                order: Vec::new(),
                last_line_count: 0,
                writer,
            }),
        }
    }

    /// Gets the configuration applied to new bars.
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| Error::Internal("bar manager lock poisoned".to_string()))
    }

    /// Insert or merge one update record.
    ///
    /// A record for an unknown ID creates a bar with the configured width and
    /// style whose clock starts now, and re-sorts the display order. A record
    /// for a known ID only overwrites the fields it actually carries.
    pub fn apply_update(&self, update: Update) -> Result<()> {
        if update.id.is_empty() {
            return Err(Error::InvalidRecord("missing \"id\"".to_string()));
        }

        let mut inner = self.lock()?;
        let inner = &mut *inner;
        if !inner.bars.contains_key(&update.id) {
            debug!(id = %update.id, "tracking new bar");
            let bar = Bar {
                width: self.config.width,
                style: self.config.style,
                managed: true,
                start_time: Some(SystemTime::now()),
                ..Bar::default()
            };
            inner.bars.insert(update.id.clone(), bar);
            inner.order.push(update.id.clone());
            inner.order.sort();
        }

        if let Some(bar) = inner.bars.get_mut(&update.id) {
            merge(bar, update);
        }
        Ok(())
    }

    /// Repaint every bar, replacing the previously drawn block.
    ///
    /// Returns the exact text written to the sink.
    pub fn render_all(&self) -> Result<String> {
        self.render_all_at(SystemTime::now())
    }

    /// Repaint every bar as of `now`.
    pub fn render_all_at(&self, now: SystemTime) -> Result<String> {
        let mut inner = self.lock()?;
        let inner = &mut *inner;

        let mut out = erase_lines(inner.last_line_count);
        let mut lines = Vec::with_capacity(inner.order.len());
        for id in &inner.order {
            if let Some(bar) = inner.bars.get_mut(id) {
                lines.push(bar.render_at(now));
            }
        }
        out.push_str(&lines.join("\n"));

        inner.writer.write_all(out.as_bytes())?;
        inner.writer.flush()?;
        inner.last_line_count = lines.len();
        Ok(out)
    }

    /// Erase the previously drawn block without drawing a new one.
    pub fn clear(&self) -> Result<()> {
        let mut inner = self.lock()?;
        let erase = erase_lines(inner.last_line_count);
        inner.writer.write_all(erase.as_bytes())?;
        inner.writer.flush()?;
        inner.last_line_count = 0;
        Ok(())
    }

    /// Number of tracked bars.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.bars.len())
    }

    /// Return `true` if no bar is tracked.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.bars.is_empty())
    }

    /// IDs in display order.
    pub fn ids(&self) -> Result<Vec<String>> {
        Ok(self.lock()?.order.clone())
    }

    /// Number of lines drawn by the last render.
    pub fn last_line_count(&self) -> Result<usize> {
        Ok(self.lock()?.last_line_count)
    }

    /// Inspect the bar with the given ID.
    pub fn with_bar<R>(&self, id: &str, f: impl FnOnce(&Bar) -> R) -> Result<Option<R>> {
        Ok(self.lock()?.bars.get(id).map(f))
    }
}

/// Sparse-patch merge of a record into an existing bar.
fn merge(bar: &mut Bar, update: Update) {
    if let Some(current) = update.current {
        bar.current = current;
    }
    if let Some(total) = update.total {
        bar.total = total;
    }
    if update.width > 0 {
        bar.width = update.width;
    }
    if !update.style.is_empty() {
        bar.style = Style::parse_or_default(&update.style);
    }
    if !update.color_bar.is_empty() {
        bar.color_bar = resolve_color(&update.color_bar);
    }
    if !update.color_text.is_empty() {
        bar.color_text = resolve_color(&update.color_text);
    }
    if update.finished {
        bar.finished = true;
    }
    if !update.custom_chars.is_empty() {
        bar.custom_chars = update.custom_chars;
    }
    if !update.message.is_empty() {
        bar.message = update.message;
    }
    if let Some(show) = update.show_elapsed {
        bar.show_elapsed = show;
    }
    if let Some(show) = update.show_throughput {
        bar.show_throughput = show;
    }
    if let Some(show) = update.show_eta {
        bar.show_eta = show;
    }
}
