//! State module containing single-shot persistence.
//!
//! # Overview
//!
//! - `store` - The [`StateStore`] trait and its JSON file implementation
//! - `instance` - Derivation of the stable ID a bar is stored under

pub mod instance;
pub mod store;

pub use instance::{instance_id, DEFAULT_SIGNATURE, VOLATILE_FLAGS};
pub use store::{FileStateStore, StateStore};
