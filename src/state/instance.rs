//! Stable identifiers for single-shot bars.
//!
//! A script calls the tool once per step, with a different `CURRENT` (and
//! often a different message) each time. The instance ID is derived from
//! the parts of the command line that stay the same across those calls, so
//! every step of one logical bar finds the state saved by the previous one.

use sha2::{Digest, Sha256};

/// Signature used when nothing on the command line identifies the bar.
pub const DEFAULT_SIGNATURE: &str = "default_pbar_instance";

/// Flags that change from one step to the next and are left out of the ID.
pub const VOLATILE_FLAGS: [&str; 4] = ["current", "total", "message", "state-dir"];

/// Derive the instance ID from an explicit ID and the raw arguments.
///
/// `args` excludes the program name. Every flag other than the
/// [`VOLATILE_FLAGS`] contributes itself and, unless it is listed in
/// `switches` or written as `--flag=value`, the value that follows it.
/// Positional arguments never contribute. The result is a hex SHA-256.
///
/// # Example
///
/// ```rust
/// use pbar::state::instance_id;
///
/// let step = |current: &str, message: &str| {
///     let args: Vec<String> = ["--style", "arrow", current, "10", "--message", message]
///         .iter()
///         .map(|s| s.to_string())
///         .collect();
///     instance_id(None, &args, &["parallel"])
/// };
/// assert_eq!(step("1", "first"), step("2", "second"));
/// ```
pub fn instance_id(explicit_id: Option<&str>, args: &[String], switches: &[&str]) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(id) = explicit_id.filter(|id| !id.is_empty()) {
        parts.push(id);
    }

    let mut args = args.iter().peekable();
    while let Some(arg) = args.next() {
        if !arg.starts_with('-') {
            continue;
        }
        let flag = arg.trim_start_matches('-');
        let (name, inline_value) = match flag.split_once('=') {
            Some((name, _)) => (name, true),
            None => (flag, false),
        };
        let takes_value = !inline_value && !switches.contains(&name);
        let value = if takes_value {
            args.next_if(|next| !next.starts_with('-'))
        } else {
            None
        };
        if VOLATILE_FLAGS.contains(&name) {
            continue;
        }
        parts.push(arg);
        if let Some(value) = value {
            parts.push(value);
        }
    }

    if parts.is_empty() {
        parts.push(DEFAULT_SIGNATURE);
    }

    let signature = parts.join("_");
    format!("{:x}", Sha256::digest(signature.as_bytes()))
}
