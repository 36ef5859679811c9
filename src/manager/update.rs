//! Update records consumed by the [`Manager`](super::Manager).
//!
//! In batch mode every input line is one JSON object describing a change to
//! a bar. Records are sparse: a field that is absent, empty or zero leaves
//! the bar's current value untouched.
//!
//! # Examples
//!
//! ```rust
//! use pbar::manager::Update;
//!
//! let update = Update::parse(r#"{"id":"build","current":3,"total":10,"style":"arrow"}"#)?;
//! assert_eq!(update.id, "build");
//! assert_eq!(update.current, Some(3));
//! assert_eq!(update.width, 0);
//! assert!(update.show_eta.is_none());
//!
//! // Structurally broken records are rejected.
//! assert!(Update::parse("{not json").is_err());
//! # Ok::<(), pbar::Error>(())
//! ```

use crate::error::{Error, Result};

use serde::{Deserialize, Serialize};

/// A sparse change to one managed bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Update {
    /// Bar identifier; bars are displayed sorted by it.
    pub id: String,
    /// New progress, if present.
    pub current: Option<i64>,
    /// New total, if present.
    pub total: Option<i64>,
    /// New width; ignored unless positive.
    pub width: i64,
    /// Style name; ignored when empty.
    pub style: String,
    /// Bar color name; ignored when empty.
    #[serde(rename = "colorbar")]
    pub color_bar: String,
    /// Text color name; ignored when empty.
    #[serde(rename = "colortext")]
    pub color_text: String,
    /// Marks the bar finished. `false` never clears the flag.
    pub finished: bool,
    /// Custom glyphs; ignored when empty.
    #[serde(rename = "chars")]
    pub custom_chars: String,
    /// In-progress message; ignored when empty.
    pub message: String,
    /// Elapsed time visibility.
    #[serde(rename = "showelapsed", skip_serializing_if = "Option::is_none")]
    pub show_elapsed: Option<bool>,
    /// Throughput visibility.
    #[serde(rename = "showthroughput", skip_serializing_if = "Option::is_none")]
    pub show_throughput: Option<bool>,
    /// ETA visibility.
    #[serde(rename = "showeta", skip_serializing_if = "Option::is_none")]
    pub show_eta: Option<bool>,
}

impl Update {
    /// Create a record setting the progress of bar `id`.
    pub fn new(id: impl Into<String>, current: i64, total: i64) -> Self {
        Self {
            id: id.into(),
            current: Some(current),
            total: Some(total),
            ..Self::default()
        }
    }

    /// Decode one JSON record.
    ///
    /// Fails on malformed JSON and on records without an `id`.
    pub fn parse(line: &str) -> Result<Self> {
        let update: Update = serde_json::from_str(line)?;
        if update.id.is_empty() {
            return Err(Error::InvalidRecord("missing \"id\"".to_string()));
        }
        Ok(update)
    }

    /// Fill the visibility toggles the record left unset.
    pub fn with_visibility_defaults(mut self, elapsed: bool, throughput: bool, eta: bool) -> Self {
        self.show_elapsed.get_or_insert(elapsed);
        self.show_throughput.get_or_insert(throughput);
        self.show_eta.get_or_insert(eta);
        self
    }
}
