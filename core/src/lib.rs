//! Dictionary dataset loading and the in-memory entry store.
//!
//! The crate performs no I/O. Callers hand over an already deserialized
//! dataset (or JSON text) and get back an immutable [`EntryStore`].

pub(crate) mod dataset;
pub mod error;
pub mod store;
pub mod types;

pub use error::{Error, FormatError, Result};
pub use store::EntryStore;
pub use types::{Definition, Entry, Word};
